//! In-memory fee and rate catalogs.
//!
//! Catalogs are built once at process start and never mutated afterwards,
//! so concurrent readers need no synchronization. A caller that wants
//! fresh tables swaps in a whole new catalog (typically behind an `Arc`)
//! rather than editing entries in place.

use std::collections::HashMap;

use conversion_types::{FeeSource, RateSource};

/// Catalog construction failures.
///
/// Malformed reference data is a programming error, distinct from the
/// per-request `ConversionError` taxonomy: it surfaces once, when the
/// catalog is built, never during a conversion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Fee fraction for '{method}' must be in [0, 1), got {fraction}")]
    InvalidFeeFraction { method: String, fraction: f64 },

    #[error("Rate for {base} -> {target} must be positive and finite, got {rate}")]
    InvalidRate {
        base: String,
        target: String,
        rate: f64,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Fee Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Static mapping from payment-method name to fee fraction.
///
/// Keys are stored lower-cased; lookups normalize the same way.
#[derive(Debug, Clone)]
pub struct FeeCatalog {
    fees: HashMap<String, f64>,
}

impl FeeCatalog {
    /// Builds a catalog from `(method, fraction)` entries.
    ///
    /// Fails if any fraction is outside `[0, 1)` (NaN included). Later
    /// entries win when two methods collide after case normalization.
    pub fn new<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut fees = HashMap::new();
        for (method, fraction) in entries {
            let method = method.into();
            if !(0.0..1.0).contains(&fraction) {
                return Err(CatalogError::InvalidFeeFraction { method, fraction });
            }
            fees.insert(method.to_lowercase(), fraction);
        }
        Ok(Self { fees })
    }

    /// The built-in reference fee table.
    pub fn reference() -> Self {
        Self::new([
            ("bank transfer", 0.01),
            ("credit card", 0.025),
            ("mobile banking", 0.015),
            ("cash", 0.0),
        ])
        .expect("reference fee table is valid")
    }

    /// Iterates over `(method, fraction)` entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fees.iter().map(|(method, &fraction)| (method.as_str(), fraction))
    }

    pub fn len(&self) -> usize {
        self.fees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }
}

impl FeeSource for FeeCatalog {
    fn fee_fraction(&self, method: &str) -> Option<f64> {
        // Presence check: a configured 0.0 fee is a valid hit.
        self.fees.get(&method.to_lowercase()).copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Rate Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Static mapping from an ordered `(base, target)` currency pair to a
/// multiplicative exchange rate.
///
/// The table is a flat set of curated observations, not a computed graph:
/// opposite directions are separate entries and need not be mutual
/// inverses, and no inverse fallback happens on lookup.
#[derive(Debug, Clone)]
pub struct RateCatalog {
    rates: HashMap<(String, String), f64>,
}

impl RateCatalog {
    /// Builds a catalog from `(base, target, rate)` entries.
    ///
    /// Fails if any rate is non-positive or non-finite. Later entries win
    /// when two pairs collide after case normalization.
    pub fn new<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: Into<String>,
    {
        let mut rates = HashMap::new();
        for (base, target, rate) in entries {
            let (base, target) = (base.into(), target.into());
            if !(rate.is_finite() && rate > 0.0) {
                return Err(CatalogError::InvalidRate { base, target, rate });
            }
            rates.insert((base.to_lowercase(), target.to_lowercase()), rate);
        }
        Ok(Self { rates })
    }

    /// The built-in reference rate table.
    ///
    /// Entries are curated per direction; USD->BDT and BDT->USD are
    /// intentionally not exact inverses.
    pub fn reference() -> Self {
        Self::new([
            ("usd", "bdt", 120.0),
            ("bdt", "usd", 0.0085),
            ("usd", "eur", 0.92),
            ("eur", "usd", 1.09),
            ("usd", "gbp", 0.79),
            ("gbp", "usd", 1.27),
            ("usd", "inr", 83.12),
            ("inr", "usd", 0.0121),
            ("eur", "bdt", 130.5),
        ])
        .expect("reference rate table is valid")
    }

    /// Iterates over `(base, target, rate)` entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.rates
            .iter()
            .map(|((base, target), &rate)| (base.as_str(), target.as_str(), rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl RateSource for RateCatalog {
    fn rate(&self, base: &str, target: &str) -> Option<f64> {
        self.rates
            .get(&(base.to_lowercase(), target.to_lowercase()))
            .copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_lookup_is_case_insensitive() {
        let catalog = FeeCatalog::reference();
        assert_eq!(catalog.fee_fraction("Bank Transfer"), Some(0.01));
        assert_eq!(catalog.fee_fraction("BANK TRANSFER"), Some(0.01));
        assert_eq!(catalog.fee_fraction("bank transfer"), Some(0.01));
    }

    #[test]
    fn test_zero_fee_is_found() {
        // Regression guard: presence check, not truthiness of the fraction.
        let catalog = FeeCatalog::reference();
        assert_eq!(catalog.fee_fraction("Cash"), Some(0.0));
    }

    #[test]
    fn test_unknown_method_is_none() {
        let catalog = FeeCatalog::reference();
        assert_eq!(catalog.fee_fraction("Bitcoin Gift Card"), None);
    }

    #[test]
    fn test_fee_fraction_must_be_below_one() {
        let err = FeeCatalog::new([("courier", 1.0)]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidFeeFraction {
                method: "courier".into(),
                fraction: 1.0,
            }
        );
    }

    #[test]
    fn test_negative_fee_fraction_rejected() {
        assert!(FeeCatalog::new([("courier", -0.01)]).is_err());
        assert!(FeeCatalog::new([("courier", f64::NAN)]).is_err());
    }

    #[test]
    fn test_rate_lookup_is_case_insensitive() {
        let catalog = RateCatalog::reference();
        assert_eq!(catalog.rate("USD", "BDT"), Some(120.0));
        assert_eq!(catalog.rate("usd", "bdt"), Some(120.0));
    }

    #[test]
    fn test_no_inverse_fallback() {
        let catalog = RateCatalog::new([("usd", "bdt", 120.0)]).unwrap();
        assert_eq!(catalog.rate("USD", "BDT"), Some(120.0));
        assert_eq!(catalog.rate("BDT", "USD"), None);
    }

    #[test]
    fn test_reference_pairs_are_not_reciprocal() {
        // Curated table entries are ground truth; 0.0085 != 1/120.
        let catalog = RateCatalog::reference();
        let forward = catalog.rate("USD", "BDT").unwrap();
        let backward = catalog.rate("BDT", "USD").unwrap();
        assert_ne!(backward, 1.0 / forward);
    }

    #[test]
    fn test_rate_must_be_positive_and_finite() {
        assert!(RateCatalog::new([("usd", "bdt", 0.0)]).is_err());
        assert!(RateCatalog::new([("usd", "bdt", -1.0)]).is_err());
        assert!(RateCatalog::new([("usd", "bdt", f64::INFINITY)]).is_err());
        assert!(RateCatalog::new([("usd", "bdt", f64::NAN)]).is_err());
    }

    #[test]
    fn test_entries_roundtrip() {
        let catalog = FeeCatalog::reference();
        assert_eq!(catalog.entries().count(), catalog.len());
        assert!(!catalog.is_empty());

        let rates = RateCatalog::reference();
        assert_eq!(rates.entries().count(), rates.len());
    }
}
