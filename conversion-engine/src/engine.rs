//! Conversion pipeline.
//!
//! Combines a fee source and a rate source into the itemized
//! fee -> rate -> final-amount computation. Pure: no IO, no internal
//! state, safe to call concurrently without synchronization.

use chrono::Utc;

use conversion_types::{
    ConversionError, ConversionRequest, ConversionResult, FeeSource, RateSource,
};

/// Conversion engine over injected catalogs.
///
/// Generic over `F: FeeSource` and `R: RateSource` - production wires in
/// `FeeCatalog`/`RateCatalog`, tests inject fakes. This enables:
/// - Swapping tables without code changes
/// - Testing error precedence with recording fakes
/// - Compile-time checks for port implementation
pub struct ConversionEngine<F: FeeSource, R: RateSource> {
    fees: F,
    rates: R,
}

impl<F: FeeSource, R: RateSource> ConversionEngine<F, R> {
    /// Creates a new engine over the given catalogs.
    pub fn new(fees: F, rates: R) -> Self {
        Self { fees, rates }
    }

    /// Converts an amount between currencies, itemizing the fee.
    ///
    /// Checks run in a fixed order - amount, payment method, currency
    /// pair - and the first failure short-circuits the rest, so fee
    /// errors are always reported before rate errors and an invalid
    /// amount triggers no catalog lookup at all.
    ///
    /// `base == target` is permitted here; it resolves against whatever
    /// the rate catalog holds for the pair. Rejecting same-currency
    /// requests is caller policy.
    #[tracing::instrument(
        skip(self, request),
        fields(
            amount = request.amount,
            base = %request.base_currency,
            target = %request.target_currency,
            method = %request.payment_method,
        )
    )]
    pub fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        // NaN fails this comparison too and is reported as invalid.
        if !(request.amount > 0.0) {
            return Err(ConversionError::InvalidAmount(request.amount));
        }

        let fee_fraction = self
            .fees
            .fee_fraction(&request.payment_method)
            .ok_or_else(|| {
                ConversionError::UnknownPaymentMethod(request.payment_method.clone())
            })?;

        let exchange_rate = self
            .rates
            .rate(&request.base_currency, &request.target_currency)
            .ok_or_else(|| {
                ConversionError::UnsupportedCurrencyPair(
                    request.base_currency.clone(),
                    request.target_currency.clone(),
                )
            })?;

        let fee_amount = request.amount * fee_fraction;
        let amount_after_fee = request.amount - fee_amount;
        let final_amount = amount_after_fee * exchange_rate;

        tracing::debug!(fee_fraction, exchange_rate, final_amount, "conversion computed");

        Ok(ConversionResult {
            amount: request.amount,
            base_currency: request.base_currency.to_uppercase(),
            target_currency: request.target_currency.to_uppercase(),
            payment_method: request.payment_method.to_lowercase(),
            fee_fraction,
            fee_amount,
            amount_after_fee,
            exchange_rate,
            final_amount,
            converted_at: Utc::now(),
        })
    }
}

impl ConversionEngine<crate::FeeCatalog, crate::RateCatalog> {
    /// Engine wired to the built-in reference tables.
    pub fn with_reference_tables() -> Self {
        Self::new(crate::FeeCatalog::reference(), crate::RateCatalog::reference())
    }
}
