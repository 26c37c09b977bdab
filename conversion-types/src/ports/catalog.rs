//! Catalog lookup ports.

use std::sync::Arc;

/// Port trait for payment-method fee sources.
pub trait FeeSource: Send + Sync {
    /// Returns the fee fraction for a payment method, or `None` when the
    /// method is not listed.
    ///
    /// Lookup is case-insensitive. A configured fee of exactly `0.0` is a
    /// found result: implementations must check key presence, never
    /// truthiness of the fraction.
    fn fee_fraction(&self, method: &str) -> Option<f64>;
}

/// Port trait for directed exchange-rate sources.
pub trait RateSource: Send + Sync {
    /// Returns the rate for the ordered pair `(base, target)`, or `None`
    /// when that exact pair is not listed.
    ///
    /// Lookup is case-insensitive on both codes. Direction matters:
    /// implementations must not fall back to the inverse pair, and rates
    /// for opposite directions need not be mutual inverses.
    fn rate(&self, base: &str, target: &str) -> Option<f64>;
}

// Reference and Arc passthroughs: tests borrow their fakes, and callers
// can hot-swap a whole catalog atomically while concurrent readers keep
// their reference.

impl<T: FeeSource + ?Sized> FeeSource for &T {
    fn fee_fraction(&self, method: &str) -> Option<f64> {
        (**self).fee_fraction(method)
    }
}

impl<T: RateSource + ?Sized> RateSource for &T {
    fn rate(&self, base: &str, target: &str) -> Option<f64> {
        (**self).rate(base, target)
    }
}

impl<T: FeeSource + ?Sized> FeeSource for Arc<T> {
    fn fee_fraction(&self, method: &str) -> Option<f64> {
        (**self).fee_fraction(method)
    }
}

impl<T: RateSource + ?Sized> RateSource for Arc<T> {
    fn rate(&self, base: &str, target: &str) -> Option<f64> {
        (**self).rate(base, target)
    }
}
