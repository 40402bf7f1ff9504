use crate::sensor::{PowerSensor, SensorReading, SensorSnapshot};
use crate::time::format_time_remaining;
use batmon_core::{BatteryStatus, RecordError, Result};
use tracing::{debug, warn};

/// Turns raw sensor readings into [`BatteryStatus`] records.
///
/// Every [`get_status`](Self::get_status) call re-queries the sensor, so a
/// battery that appears or disappears is noticed on the next refresh.
#[derive(Debug)]
pub struct BatteryReader<S> {
    sensor:  S,
    reading: SensorReading,
}

impl<S: PowerSensor> BatteryReader<S> {
    /// Wrap `sensor` and take an initial reading.
    pub fn new(sensor: S) -> Self {
        let mut reader = Self { sensor, reading: SensorReading::NoBattery };
        reader.initialize();
        reader
    }

    /// Query the sensor and remember the outcome.  Failures are logged and
    /// treated as "no battery"; they never reach the caller.
    pub fn initialize(&mut self) -> &SensorReading {
        self.reading = SensorReading::from(self.sensor.read_power_sensor());
        match &self.reading {
            SensorReading::Failed(e) => warn!("Error reading battery sensor: {e}"),
            SensorReading::NoBattery => debug!("No battery detected"),
            SensorReading::Present(_) => {}
        }
        &self.reading
    }

    /// Whether the latest reading found a battery.
    pub fn has_battery(&self) -> bool {
        self.reading.snapshot().is_some()
    }

    /// The most recent raw reading.
    pub fn reading(&self) -> &SensorReading {
        &self.reading
    }

    /// Fresh status record.
    ///
    /// Without a battery (or when the query failed) this is
    /// [`BatteryStatus::no_battery`].  An error is only returned when a battery
    /// is present but its snapshot cannot be turned into a record.
    pub fn get_status(&mut self) -> Result<BatteryStatus> {
        let status = match self.initialize() {
            SensorReading::Present(snapshot) => build_status(snapshot)?,
            SensorReading::NoBattery | SensorReading::Failed(_) => BatteryStatus::no_battery(),
        };
        debug!(?status, "battery status");
        Ok(status)
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }
}

fn build_status(snapshot: &SensorSnapshot) -> Result<BatteryStatus, RecordError> {
    let percentage = whole_percent(snapshot.percent)?;
    Ok(BatteryStatus::new(
        percentage,
        snapshot.power_plugged,
        format_time_remaining(snapshot.secs_left),
    ))
}

/// Truncate a raw percentage to `0..=100`.
fn whole_percent(percent: f32) -> Result<u8, RecordError> {
    if !percent.is_finite() {
        return Err(RecordError::NonFinitePercent(percent));
    }
    if percent < 0.0 {
        return Err(RecordError::NegativePercent(percent));
    }
    Ok(percent.min(100.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensor::SecsLeft;
    use batmon_core::{BatmonError, ChargeStatus};
    use std::collections::VecDeque;

    /// Replays scripted readings; the last one repeats forever.
    #[derive(Debug)]
    struct FakeSensor {
        script: VecDeque<Script>,
        calls:  usize,
    }

    #[derive(Debug, Clone, Copy)]
    enum Script {
        Battery(SensorSnapshot),
        Absent,
        Broken,
    }

    impl FakeSensor {
        fn new(script: impl IntoIterator<Item = Script>) -> Self {
            Self { script: script.into_iter().collect(), calls: 0 }
        }
    }

    impl PowerSensor for FakeSensor {
        fn read_power_sensor(&mut self) -> Result<Option<SensorSnapshot>> {
            self.calls += 1;
            let next = if self.script.len() > 1 {
                self.script.pop_front()
            } else {
                self.script.front().copied()
            };
            match next.unwrap_or(Script::Absent) {
                Script::Battery(s) => Ok(Some(s)),
                Script::Absent     => Ok(None),
                Script::Broken     => Err(BatmonError::Sensor("sensor exploded".into())),
            }
        }
    }

    fn snap(percent: f32, power_plugged: bool, secs_left: SecsLeft) -> Script {
        Script::Battery(SensorSnapshot { percent, power_plugged, secs_left })
    }

    fn status_for(script: Script) -> Result<BatteryStatus> {
        BatteryReader::new(FakeSensor::new([script])).get_status()
    }

    #[test]
    fn no_battery_gives_fallback_record() {
        let mut reader = BatteryReader::new(FakeSensor::new([Script::Absent]));
        assert!(!reader.has_battery());
        assert_eq!(
            reader.get_status().unwrap(),
            BatteryStatus {
                percentage:     100,
                is_plugged:     true,
                status:         ChargeStatus::NoBattery,
                time_remaining: "N/A".to_string(),
            }
        );
    }

    #[test]
    fn sensor_failure_degrades_to_fallback() {
        let mut reader = BatteryReader::new(FakeSensor::new([Script::Broken]));
        assert!(matches!(reader.reading(), SensorReading::Failed(_)));
        assert_eq!(reader.get_status().unwrap(), BatteryStatus::no_battery());
    }

    #[test]
    fn plugged_and_full() {
        let s = status_for(snap(100.0, true, SecsLeft::Unlimited)).unwrap();
        assert_eq!(s.status, ChargeStatus::FullyCharged);
        assert_eq!(s.time_remaining, "Unlimited");
        assert_eq!(s.percentage, 100);
    }

    #[test]
    fn plugged_and_charging() {
        let s = status_for(snap(63.7, true, SecsLeft::Unlimited)).unwrap();
        assert_eq!(s.status, ChargeStatus::Charging);
        assert_eq!(s.percentage, 63);
        assert!(s.is_plugged);
    }

    #[test]
    fn unplugged_is_discharging_even_when_full() {
        let s = status_for(snap(100.0, false, SecsLeft::Seconds(3661))).unwrap();
        assert_eq!(s.status, ChargeStatus::Discharging);
        assert_eq!(s.time_remaining, "1h 1m");
    }

    #[test]
    fn unknown_estimate_is_calculating() {
        let s = status_for(snap(40.0, false, SecsLeft::Unknown)).unwrap();
        assert_eq!(s.time_remaining, "Calculating...");
    }

    #[test]
    fn successive_calls_are_identical() {
        let mut reader =
            BatteryReader::new(FakeSensor::new([snap(55.0, false, SecsLeft::Seconds(7200))]));
        let first  = reader.get_status().unwrap();
        let second = reader.get_status().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn every_call_requeries_the_sensor() {
        let mut reader = BatteryReader::new(FakeSensor::new([Script::Absent]));
        reader.get_status().unwrap();
        reader.get_status().unwrap();
        assert_eq!(reader.sensor().calls, 3);
    }

    #[test]
    fn battery_removed_later_falls_back_silently() {
        let mut reader = BatteryReader::new(FakeSensor::new([
            snap(80.0, false, SecsLeft::Seconds(600)),
            snap(80.0, false, SecsLeft::Seconds(600)),
            Script::Absent,
        ]));
        assert!(reader.has_battery());
        assert_eq!(reader.get_status().unwrap().status, ChargeStatus::Discharging);
        assert_eq!(reader.get_status().unwrap(), BatteryStatus::no_battery());
        assert!(!reader.has_battery());
    }

    #[test]
    fn bad_snapshot_is_wrapped_error() {
        let err = status_for(snap(f32::NAN, false, SecsLeft::Unknown)).unwrap_err();
        assert!(matches!(
            err,
            BatmonError::BatteryInfo { source: RecordError::NonFinitePercent(_) }
        ));

        let err = status_for(snap(-1.0, true, SecsLeft::Unlimited)).unwrap_err();
        assert!(matches!(
            err,
            BatmonError::BatteryInfo { source: RecordError::NegativePercent(_) }
        ));
    }

    #[test]
    fn over_range_percent_is_clamped() {
        let s = status_for(snap(104.2, true, SecsLeft::Unlimited)).unwrap();
        assert_eq!(s.percentage, 100);
        assert_eq!(s.status, ChargeStatus::FullyCharged);
    }
}
