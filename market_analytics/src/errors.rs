use thiserror::Error;

/// The unified error type for the `market_analytics` crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// A window operation was asked to compute over fewer samples than its period.
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    /// Symbol and benchmark windows disagree in length.
    #[error("Length mismatch: symbol window has {symbol} candles, benchmark window has {benchmark}")]
    LengthMismatch { symbol: usize, benchmark: usize },

    /// An arithmetic step produced no valid value.
    #[error("Computation error: {0}")]
    ComputationError(String),

    /// A parameter is outside its valid range (e.g. a zero window).
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl AnalyticsError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
