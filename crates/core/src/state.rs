use crate::{error::BatmonError, status::BatteryStatus};
use chrono::{DateTime, Local};

/// Central application state; all widgets read from this snapshot.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Outcome of the most recent refresh.
    pub reading: Reading,
    /// When the most recent refresh ran (success or failure).
    pub last_updated: Option<DateTime<Local>>,
}

impl AppState {
    /// Record the outcome of a refresh that ran at `at`.
    pub fn apply(&mut self, result: Result<BatteryStatus, BatmonError>, at: DateTime<Local>) {
        self.reading = match result {
            Ok(status) => Reading::Status(status),
            Err(e)     => Reading::Error(e.to_string()),
        };
        self.last_updated = Some(at);
    }
}

/// What the window currently has to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Reading {
    /// No refresh has completed yet.
    #[default]
    Pending,
    Status(BatteryStatus),
    /// The reader failed; carries the error message.
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;

    #[test]
    fn starts_pending() {
        let state = AppState::default();
        assert_eq!(state.reading, Reading::Pending);
        assert!(state.last_updated.is_none());
    }

    #[test]
    fn apply_keeps_latest_outcome() {
        let mut state = AppState::default();
        let now = Local::now();

        state.apply(Ok(BatteryStatus::no_battery()), now);
        assert_eq!(state.reading, Reading::Status(BatteryStatus::no_battery()));

        state.apply(Err(RecordError::NonFinitePercent(f32::NAN).into()), now);
        assert!(matches!(state.reading, Reading::Error(ref m) if m.starts_with("failed to get battery information")));
        assert_eq!(state.last_updated, Some(now));
    }
}
