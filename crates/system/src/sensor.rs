use batmon_core::{BatmonError, Result};

/// Raw values reported by the platform power-supply sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSnapshot {
    /// Charge level as reported, normally in `[0, 100]`.
    pub percent: f32,
    /// Whether external power is connected.
    pub power_plugged: bool,
    pub secs_left: SecsLeft,
}

/// Estimated seconds until the battery is depleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecsLeft {
    /// On external power; no discharge estimate applies.
    Unlimited,
    /// Discharging, but the estimate is not computable yet.
    Unknown,
    Seconds(u64),
}

/// A source of battery readings.
///
/// Implementations report `Ok(None)` when the machine has no battery and
/// `Err` when the query itself failed.
pub trait PowerSensor {
    fn read_power_sensor(&mut self) -> Result<Option<SensorSnapshot>>;
}

impl<S: PowerSensor + ?Sized> PowerSensor for Box<S> {
    fn read_power_sensor(&mut self) -> Result<Option<SensorSnapshot>> {
        (**self).read_power_sensor()
    }
}

/// Outcome of one sensor query, keeping "no battery" and "query failed" apart.
#[derive(Debug)]
pub enum SensorReading {
    Present(SensorSnapshot),
    NoBattery,
    Failed(BatmonError),
}

impl SensorReading {
    pub fn snapshot(&self) -> Option<&SensorSnapshot> {
        match self {
            Self::Present(s) => Some(s),
            Self::NoBattery | Self::Failed(_) => None,
        }
    }
}

impl From<Result<Option<SensorSnapshot>>> for SensorReading {
    fn from(result: Result<Option<SensorSnapshot>>) -> Self {
        match result {
            Ok(Some(snapshot)) => Self::Present(snapshot),
            Ok(None)           => Self::NoBattery,
            Err(e)             => Self::Failed(e),
        }
    }
}
