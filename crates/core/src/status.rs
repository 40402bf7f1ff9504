use serde::{Deserialize, Serialize};
use std::fmt;

/// `time_remaining` value used whenever no estimate applies.
pub const NOT_AVAILABLE: &str = "N/A";

/// Display-ready snapshot of the battery, rebuilt on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryStatus {
    /// Charge level (0–100).  Also 100 when there is no battery at all.
    pub percentage: u8,
    /// Whether external power is connected.
    pub is_plugged: bool,
    pub status: ChargeStatus,
    /// `"1h 5m"`, `"12m"`, `"Unlimited"`, `"Calculating..."` or `"N/A"`.
    pub time_remaining: String,
}

impl BatteryStatus {
    /// Build a record for a present battery, classifying the charge status.
    pub fn new(percentage: u8, is_plugged: bool, time_remaining: impl Into<String>) -> Self {
        Self {
            percentage,
            is_plugged,
            status: ChargeStatus::classify(is_plugged, percentage),
            time_remaining: time_remaining.into(),
        }
    }

    /// Fixed record reported when no battery is present or the sensor query
    /// failed.  Reads as "plugged in and full" so desktops never look alarming.
    pub fn no_battery() -> Self {
        Self {
            percentage: 100,
            is_plugged: true,
            status: ChargeStatus::NoBattery,
            time_remaining: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Charge state shown next to the gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeStatus {
    #[serde(rename = "No Battery (PC)")]
    NoBattery,
    #[serde(rename = "Fully Charged")]
    FullyCharged,
    Charging,
    Discharging,
}

impl ChargeStatus {
    /// Status of a present battery.
    pub fn classify(is_plugged: bool, percentage: u8) -> Self {
        match (is_plugged, percentage) {
            (true, p) if p >= 100 => Self::FullyCharged,
            (true, _) => Self::Charging,
            (false, _) => Self::Discharging,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoBattery    => "No Battery (PC)",
            Self::FullyCharged => "Fully Charged",
            Self::Charging     => "Charging",
            Self::Discharging  => "Discharging",
        }
    }
}

impl fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
