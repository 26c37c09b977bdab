//! Port traits (interfaces for catalog adapters).
//!
//! The engine depends on these traits, not concrete catalogs, so tests
//! can inject fakes and deployments can swap tables atomically.

mod catalog;

pub use catalog::{FeeSource, RateSource};
