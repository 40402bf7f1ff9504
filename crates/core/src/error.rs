use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum BatmonError {
    #[error("config error: {0}")]
    Config(String),

    #[error("sensor error: {0}")]
    Sensor(String),

    /// A battery was detected but its reading could not be turned into a
    /// [`BatteryStatus`](crate::status::BatteryStatus).
    #[error("failed to get battery information: {source}")]
    BatteryInfo {
        #[source]
        source: RecordError,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Why a raw sensor snapshot was rejected during record construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("charge percentage is not a finite number ({0})")]
    NonFinitePercent(f32),

    #[error("charge percentage is negative ({0})")]
    NegativePercent(f32),
}

impl From<RecordError> for BatmonError {
    fn from(source: RecordError) -> Self {
        Self::BatteryInfo { source }
    }
}

pub type Result<T, E = BatmonError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn battery_info_wraps_cause() {
        let err = BatmonError::from(RecordError::NegativePercent(-3.0));
        assert_eq!(
            err.to_string(),
            "failed to get battery information: charge percentage is negative (-3)"
        );
        assert!(err.source().is_some());
    }
}
