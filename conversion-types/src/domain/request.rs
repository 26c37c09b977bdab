//! Conversion request record.

use serde::{Deserialize, Serialize};

/// A single conversion request.
///
/// Constructed per call and never persisted. Currency codes and the
/// payment method are free-text and matched case-insensitively by the
/// catalogs, so callers may pass them in any casing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Amount to convert, in major units of the base currency
    pub amount: f64,
    /// Currency the amount is denominated in (e.g., "USD")
    pub base_currency: String,
    /// Currency to convert into (e.g., "BDT")
    pub target_currency: String,
    /// Payment method used, matched against the fee catalog
    pub payment_method: String,
}

impl ConversionRequest {
    /// Creates a new conversion request.
    pub fn new(
        amount: f64,
        base_currency: impl Into<String>,
        target_currency: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            base_currency: base_currency.into(),
            target_currency: target_currency.into(),
            payment_method: payment_method.into(),
        }
    }
}
