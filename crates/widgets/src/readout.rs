use batmon_core::{BatteryStatus, ChargeStatus, Reading};
use batmon_theme::{Color, Theme};

/// Label texts and colors for one frame, derived from the current [`Reading`].
///
/// Keeping this separate from the Iced views lets the error and placeholder
/// states be checked without a renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout {
    /// Gauge fill (0–100).
    pub gauge:      u8,
    pub percentage: String,
    pub status:     String,
    pub time:       String,
    pub health:     String,
    pub power:      String,
    pub tone:       Tone,
    /// Classification behind `status`, when a record was read.
    pub charge:     Option<ChargeStatus>,
}

/// How the percentage label and gauge are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Plain foreground (nothing read yet).
    Neutral,
    /// Color band for the given percentage.
    Level(u8),
    Error,
}

impl Readout {
    pub fn from_reading(reading: &Reading) -> Self {
        match reading {
            Reading::Pending       => Self::pending(),
            Reading::Status(s)     => Self::from_status(s),
            Reading::Error(_)      => Self::error(),
        }
    }

    /// Placeholders shown before the first refresh completes.
    pub fn pending() -> Self {
        Self {
            gauge:      0,
            percentage: "---%".to_string(),
            status:     "Status: Unknown".to_string(),
            time:       "Time Remaining: N/A".to_string(),
            health:     health_label(),
            power:      "Power Supply: N/A".to_string(),
            tone:       Tone::Neutral,
            charge:     None,
        }
    }

    pub fn from_status(status: &BatteryStatus) -> Self {
        let supply = if status.is_plugged { "Plugged In" } else { "Battery" };
        Self {
            gauge:      status.percentage,
            percentage: format!("{}%", status.percentage),
            status:     format!("Status: {}", status.status),
            time:       format!("Time Remaining: {}", status.time_remaining),
            health:     health_label(),
            power:      format!("Power Supply: {supply}"),
            tone:       Tone::Level(status.percentage),
            charge:     Some(status.status),
        }
    }

    /// Terminal state after the reader failed: gauge emptied, labels blanked.
    pub fn error() -> Self {
        Self {
            gauge:      0,
            percentage: "N/A".to_string(),
            status:     "Status: Error".to_string(),
            time:       "Time Remaining: N/A".to_string(),
            health:     health_label(),
            power:      "Power Supply: Unknown".to_string(),
            tone:       Tone::Error,
            charge:     None,
        }
    }

    /// Color of the percentage label and gauge fill.
    pub fn color(&self, theme: &Theme) -> Color {
        match self.tone {
            Tone::Neutral    => theme.foreground,
            Tone::Level(pct) => theme.level_color(pct),
            Tone::Error      => theme.error_color(),
        }
    }

    /// Color of the status line: error red, nominal green once fully
    /// charged, foreground otherwise.
    pub fn status_color(&self, theme: &Theme) -> Color {
        match (self.tone, self.charge) {
            (Tone::Error, _) => theme.error_color(),
            (_, Some(ChargeStatus::FullyCharged)) => theme.nominal,
            _ => theme.foreground,
        }
    }
}

// Wear level is not available from the sensor.
fn health_label() -> String {
    "Battery Health: N/A".to_string()
}
