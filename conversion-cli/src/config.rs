//! Catalog loading for the CLI.
//!
//! Override files are JSON: a `{"method": fraction}` map for fees and a
//! `[{"base", "target", "rate"}]` array for rates. Without an override
//! the built-in reference tables are used.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use conversion_engine::{FeeCatalog, RateCatalog};

#[derive(Debug, Deserialize)]
struct RateRow {
    base: String,
    target: String,
    rate: f64,
}

/// Loads the fee catalog, from `path` when an override is configured.
pub fn load_fee_catalog(path: Option<&Path>) -> anyhow::Result<FeeCatalog> {
    let Some(path) = path else {
        return Ok(FeeCatalog::reference());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading fee table {}", path.display()))?;
    let entries: HashMap<String, f64> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing fee table {}", path.display()))?;
    tracing::debug!(entries = entries.len(), "loaded fee table override");
    FeeCatalog::new(entries).map_err(Into::into)
}

/// Loads the rate catalog, from `path` when an override is configured.
pub fn load_rate_catalog(path: Option<&Path>) -> anyhow::Result<RateCatalog> {
    let Some(path) = path else {
        return Ok(RateCatalog::reference());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading rate table {}", path.display()))?;
    let rows: Vec<RateRow> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing rate table {}", path.display()))?;
    tracing::debug!(entries = rows.len(), "loaded rate table override");
    RateCatalog::new(rows.into_iter().map(|row| (row.base, row.target, row.rate)))
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use conversion_types::{FeeSource, RateSource};

    use super::*;

    #[test]
    fn test_defaults_to_reference_tables() {
        let fees = load_fee_catalog(None).unwrap();
        assert_eq!(fees.fee_fraction("cash"), Some(0.0));

        let rates = load_rate_catalog(None).unwrap();
        assert_eq!(rates.rate("usd", "bdt"), Some(120.0));
    }

    #[test]
    fn test_loads_override_files() {
        let dir = std::env::temp_dir();
        let fees_path = dir.join("conversion-cli-test-fees.json");
        let rates_path = dir.join("conversion-cli-test-rates.json");
        fs::write(&fees_path, r#"{"Voucher": 0.05}"#).unwrap();
        fs::write(
            &rates_path,
            r#"[{"base": "USD", "target": "JPY", "rate": 150.0}]"#,
        )
        .unwrap();

        let fees = load_fee_catalog(Some(&fees_path)).unwrap();
        assert_eq!(fees.fee_fraction("voucher"), Some(0.05));
        assert_eq!(fees.fee_fraction("cash"), None);

        let rates = load_rate_catalog(Some(&rates_path)).unwrap();
        assert_eq!(rates.rate("usd", "jpy"), Some(150.0));
        assert_eq!(rates.rate("jpy", "usd"), None);

        let _ = fs::remove_file(fees_path);
        let _ = fs::remove_file(rates_path);
    }

    #[test]
    fn test_malformed_override_is_a_startup_error() {
        let path = std::env::temp_dir().join("conversion-cli-test-bad-fees.json");
        fs::write(&path, r#"{"Voucher": 1.5}"#).unwrap();

        assert!(load_fee_catalog(Some(&path)).is_err());

        let _ = fs::remove_file(path);
    }
}
