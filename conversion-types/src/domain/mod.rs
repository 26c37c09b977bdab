//! Domain records for the conversion service.

pub mod request;
pub mod result;

pub use request::ConversionRequest;
pub use result::ConversionResult;
