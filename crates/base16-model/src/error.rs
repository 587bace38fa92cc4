use thiserror::Error;

/// Errors raised by color parsing and color arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Text is not a 6-digit hex color.
    #[error("invalid hex color '{value}': {reason}")]
    InvalidHex { value: String, reason: &'static str },

    /// A blend ratio fell outside [0, 1].
    #[error("ratio {ratio} is outside the range [0, 1]")]
    RatioOutOfRange { ratio: f64 },
}

impl ColorError {
    pub fn invalid_hex(value: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidHex {
            value: value.into(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, ColorError>;
