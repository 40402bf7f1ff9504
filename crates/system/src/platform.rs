//! Battery readings through the OS battery APIs (Linux, macOS, Windows, BSDs).

use crate::sensor::{PowerSensor, SecsLeft, SensorSnapshot};
use batmon_core::{BatmonError, Result};
use starship_battery::{
    units::{ratio, time::second},
    Manager, State,
};

/// Reads the first battery the platform reports.
///
/// A fresh [`Manager`] is opened on every query so the sensor stays `Send`
/// and a battery that is hot-plugged later is found on the next read.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformSensor;

impl PlatformSensor {
    pub fn new() -> Self {
        Self
    }
}

impl PowerSensor for PlatformSensor {
    fn read_power_sensor(&mut self) -> Result<Option<SensorSnapshot>> {
        let manager = Manager::new().map_err(sensor_error)?;
        let mut batteries = manager.batteries().map_err(sensor_error)?;

        let Some(battery) = batteries.next() else {
            return Ok(None);
        };
        let battery = battery.map_err(sensor_error)?;

        Ok(Some(snapshot(
            battery.state_of_charge().get::<ratio::percent>(),
            battery.state(),
            battery.time_to_empty().map(|t| t.get::<second>()),
        )))
    }
}

fn sensor_error(e: starship_battery::Error) -> BatmonError {
    BatmonError::Sensor(e.to_string())
}

/// Map raw platform values onto a [`SensorSnapshot`].
fn snapshot(percent: f32, state: State, secs_to_empty: Option<f32>) -> SensorSnapshot {
    let power_plugged = matches!(state, State::Charging | State::Full);

    let secs_left = if power_plugged {
        SecsLeft::Unlimited
    } else {
        match secs_to_empty {
            Some(secs) if secs.is_finite() && secs >= 0.0 => SecsLeft::Seconds(secs as u64),
            _ => SecsLeft::Unknown,
        }
    };

    SensorSnapshot { percent, power_plugged, secs_left }
}
