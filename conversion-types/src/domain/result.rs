//! Conversion result record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fully itemized conversion.
///
/// Results are immutable once created - they record what a single
/// conversion computed and live only for the request/response cycle.
/// Currency codes are echoed upper-cased and the payment method
/// lower-cased, so case-variant requests yield identical records apart
/// from `converted_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Original amount, in major units of the base currency
    pub amount: f64,
    /// Base currency code, normalized upper-case
    pub base_currency: String,
    /// Target currency code, normalized upper-case
    pub target_currency: String,
    /// Payment method, normalized lower-case
    pub payment_method: String,
    /// Fee fraction applied, in [0, 1)
    pub fee_fraction: f64,
    /// Fee charged, in base currency
    pub fee_amount: f64,
    /// Amount remaining after the fee, in base currency
    pub amount_after_fee: f64,
    /// Exchange rate applied
    pub exchange_rate: f64,
    /// Converted amount, in target currency
    pub final_amount: f64,
    /// When the computation ran
    pub converted_at: DateTime<Utc>,
}

impl ConversionResult {
    /// Compares every field except `converted_at`.
    ///
    /// Two calls with identical inputs produce records that are equal
    /// under this comparison even though their timestamps differ.
    pub fn same_computation(&self, other: &Self) -> bool {
        self.amount == other.amount
            && self.base_currency == other.base_currency
            && self.target_currency == other.target_currency
            && self.payment_method == other.payment_method
            && self.fee_fraction == other.fee_fraction
            && self.fee_amount == other.fee_amount
            && self.amount_after_fee == other.amount_after_fee
            && self.exchange_rate == other.exchange_rate
            && self.final_amount == other.final_amount
    }
}
