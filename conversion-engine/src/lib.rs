//! # Conversion Engine
//!
//! Fee and rate catalogs plus the conversion pipeline for the currency
//! conversion service.
//!
//! ## Architecture
//!
//! - `catalog/` - Immutable fee and rate tables built once at startup
//! - `engine/` - The conversion pipeline, generic over the catalog ports
//!
//! The engine is generic over `F: FeeSource` and `R: RateSource`, allowing
//! fake catalogs to be injected in tests.

pub mod catalog;
pub mod engine;


pub use catalog::{CatalogError, FeeCatalog, RateCatalog};
pub use engine::ConversionEngine;
