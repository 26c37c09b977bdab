//! # Conversion Types
//!
//! Domain types and port traits for the currency conversion service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the service:
//! - `domain/` - Pure domain records (ConversionRequest, ConversionResult)
//! - `ports/` - Trait definitions that catalog adapters must implement
//! - `dto/` - Data Transfer Objects for the tool-call boundary
//! - `error/` - Conversion error taxonomy

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{ConversionRequest, ConversionResult};
pub use dto::ToolResponse;
pub use error::ConversionError;
pub use ports::{FeeSource, RateSource};
