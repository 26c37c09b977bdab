//! Error types for the conversion service.

/// Per-request conversion failures.
///
/// All three variants are user-input errors: never transient, never
/// retryable, never fatal to the process. They are returned as values
/// from the engine rather than raised past its boundary, and each
/// carries the offending input verbatim so the calling layer can render
/// the message as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    #[error("Unsupported currency pair: {0} -> {1}")]
    UnsupportedCurrencyPair(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_embed_offending_values() {
        assert_eq!(
            ConversionError::InvalidAmount(-5.0).to_string(),
            "Invalid amount: -5"
        );
        assert_eq!(
            ConversionError::UnknownPaymentMethod("Bitcoin Gift Card".into()).to_string(),
            "Unknown payment method: Bitcoin Gift Card"
        );
        assert_eq!(
            ConversionError::UnsupportedCurrencyPair("USD".into(), "XYZ".into()).to_string(),
            "Unsupported currency pair: USD -> XYZ"
        );
    }
}
