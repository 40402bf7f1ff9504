//! Battery readings straight from the Linux sysfs power-supply class.
//!
//! Used instead of [`PlatformSensor`](crate::PlatformSensor) when the config
//! points `[sensor] power_supply_path` at a specific directory.

use crate::sensor::{PowerSensor, SecsLeft, SensorSnapshot};
use batmon_core::{BatmonError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Reads the first battery under a power-supply directory.
///
/// A missing directory or a directory without a battery entry is reported as
/// "no battery", which is what desktops and VMs look like.
#[derive(Debug, Clone)]
pub struct SysfsSensor {
    root: PathBuf,
}

impl SysfsSensor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// All supplies under the root, sorted so `BAT0` wins over `BAT1`.
    fn supplies(&self) -> Result<Vec<PathBuf>> {
        let mut entries = fs::read_dir(&self.root)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        entries.sort();
        Ok(entries)
    }

    fn find_battery(supplies: &[PathBuf]) -> Option<&Path> {
        supplies
            .iter()
            .find(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with("BAT") || n.to_lowercase().contains("battery"))
            })
            .map(PathBuf::as_path)
    }

    /// `Some(true)` if any mains adapter is online, `None` if there is none.
    fn mains_online(supplies: &[PathBuf]) -> Result<Option<bool>> {
        let mut seen = false;
        for supply in supplies {
            if read_string(supply, "type").as_deref() != Some("Mains") {
                continue;
            }
            seen = true;
            if read_value::<u8>(supply, "online")? == Some(1) {
                return Ok(Some(true));
            }
        }
        Ok(seen.then_some(false))
    }
}

impl PowerSensor for SysfsSensor {
    fn read_power_sensor(&mut self) -> Result<Option<SensorSnapshot>> {
        if !self.root.exists() {
            debug!("'{}' does not exist; assuming no battery", self.root.display());
            return Ok(None);
        }

        let supplies = self.supplies()?;
        let Some(bat) = Self::find_battery(&supplies) else {
            return Ok(None);
        };

        // Energy (µWh / µW) and charge (µAh / µA) attributes come in pairs;
        // a driver exposes one family or the other.
        let (now, full, rate) = match read_value::<u64>(bat, "energy_now")? {
            Some(now) => (
                Some(now),
                read_value::<u64>(bat, "energy_full")?,
                read_value::<i64>(bat, "power_now")?,
            ),
            None => (
                read_value::<u64>(bat, "charge_now")?,
                read_value::<u64>(bat, "charge_full")?,
                read_value::<i64>(bat, "current_now")?,
            ),
        };

        let percent = match (now, full) {
            (Some(now), Some(full)) if full > 0 => 100.0 * now as f64 / full as f64,
            _ => match read_value::<f64>(bat, "capacity")? {
                Some(capacity) => capacity,
                None => {
                    return Err(BatmonError::Sensor(format!(
                        "'{}' reports neither energy, charge nor capacity",
                        bat.display()
                    )))
                }
            },
        };

        let power_plugged = match Self::mains_online(&supplies)? {
            Some(online) => online,
            None => matches!(read_string(bat, "status").as_deref(), Some("Charging" | "Full")),
        };

        let secs_left = if power_plugged {
            SecsLeft::Unlimited
        } else {
            match (now, rate.map(i64::unsigned_abs)) {
                (Some(now), Some(rate)) if rate > 0 => {
                    SecsLeft::Seconds((now as f64 / rate as f64 * 3600.0) as u64)
                }
                _ => SecsLeft::Unknown,
            }
        };

        Ok(Some(SensorSnapshot {
            percent: percent.min(100.0) as f32,
            power_plugged,
            secs_left,
        }))
    }
}

/// Read a trimmed attribute; unreadable or missing attributes are `None`.
fn read_string(dir: &Path, name: &str) -> Option<String> {
    match fs::read_to_string(dir.join(name)) {
        Ok(raw) => Some(raw.trim().to_string()),
        Err(e) => {
            debug!("cannot read '{}': {e}", dir.join(name).display());
            None
        }
    }
}

/// Read and parse an attribute.  A value that is present but unparseable is
/// a sensor error.
fn read_value<T>(dir: &Path, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    read_string(dir, name)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| {
                BatmonError::Sensor(format!("'{}' = {raw:?}: {e}", dir.join(name).display()))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn supply(root: &Path, name: &str, attrs: &[(&str, &str)]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for (attr, value) in attrs {
            fs::write(dir.join(attr), format!("{value}\n")).unwrap();
        }
    }

    fn read(root: &Path) -> Result<Option<SensorSnapshot>> {
        SysfsSensor::new(root).read_power_sensor()
    }

    #[test]
    fn missing_root_means_no_battery() {
        let td = TempDir::new().unwrap();
        assert_eq!(read(&td.path().join("absent")).unwrap(), None);
    }

    #[test]
    fn mains_only_means_no_battery() {
        let td = TempDir::new().unwrap();
        supply(td.path(), "AC", &[("type", "Mains"), ("online", "1")]);
        assert_eq!(read(td.path()).unwrap(), None);
    }

    #[test]
    fn discharging_from_energy_attributes() {
        let td = TempDir::new().unwrap();
        supply(td.path(), "AC", &[("type", "Mains"), ("online", "0")]);
        supply(
            td.path(),
            "BAT0",
            &[
                ("type", "Battery"),
                ("status", "Discharging"),
                ("energy_now", "25000000"),
                ("energy_full", "50000000"),
                ("power_now", "10000000"),
            ],
        );

        let snap = read(td.path()).unwrap().unwrap();
        assert_eq!(snap.percent, 50.0);
        assert!(!snap.power_plugged);
        assert_eq!(snap.secs_left, SecsLeft::Seconds(9000));
    }

    #[test]
    fn charge_attributes_and_negative_current() {
        let td = TempDir::new().unwrap();
        supply(
            td.path(),
            "BAT1",
            &[
                ("status", "Discharging"),
                ("charge_now", "3000000"),
                ("charge_full", "4000000"),
                ("current_now", "-1500000"),
            ],
        );

        let snap = read(td.path()).unwrap().unwrap();
        assert_eq!(snap.percent, 75.0);
        assert_eq!(snap.secs_left, SecsLeft::Seconds(7200));
    }

    #[test]
    fn plugged_in_is_unlimited() {
        let td = TempDir::new().unwrap();
        supply(td.path(), "ADP1", &[("type", "Mains"), ("online", "1")]);
        supply(td.path(), "BAT0", &[("status", "Not charging"), ("capacity", "80")]);

        let snap = read(td.path()).unwrap().unwrap();
        assert_eq!(snap.percent, 80.0);
        assert!(snap.power_plugged);
        assert_eq!(snap.secs_left, SecsLeft::Unlimited);
    }

    #[test]
    fn status_decides_plug_state_without_mains_supply() {
        let td = TempDir::new().unwrap();
        supply(td.path(), "BAT0", &[("status", "Charging"), ("capacity", "42")]);

        let snap = read(td.path()).unwrap().unwrap();
        assert!(snap.power_plugged);
    }

    #[test]
    fn zero_rate_is_unknown() {
        let td = TempDir::new().unwrap();
        supply(
            td.path(),
            "BAT0",
            &[
                ("status", "Discharging"),
                ("energy_now", "100"),
                ("energy_full", "100"),
                ("power_now", "0"),
            ],
        );

        let snap = read(td.path()).unwrap().unwrap();
        assert_eq!(snap.secs_left, SecsLeft::Unknown);
    }

    #[test]
    fn percent_is_capped_at_100() {
        let td = TempDir::new().unwrap();
        supply(td.path(), "BAT0", &[("status", "Full"), ("energy_now", "52000"), ("energy_full", "50000")]);

        let snap = read(td.path()).unwrap().unwrap();
        assert_eq!(snap.percent, 100.0);
    }

    #[test]
    fn first_battery_in_sorted_order_wins() {
        let td = TempDir::new().unwrap();
        supply(td.path(), "BAT1", &[("status", "Discharging"), ("capacity", "10")]);
        supply(td.path(), "BAT0", &[("status", "Discharging"), ("capacity", "90")]);

        let snap = read(td.path()).unwrap().unwrap();
        assert_eq!(snap.percent, 90.0);
    }

    #[test]
    fn garbage_value_is_a_sensor_error() {
        let td = TempDir::new().unwrap();
        supply(td.path(), "BAT0", &[("status", "Discharging"), ("capacity", "lots")]);

        assert!(matches!(read(td.path()), Err(BatmonError::Sensor(_))));
    }

    #[test]
    fn battery_without_any_level_is_a_sensor_error() {
        let td = TempDir::new().unwrap();
        supply(td.path(), "BAT0", &[("status", "Unknown")]);

        assert!(matches!(read(td.path()), Err(BatmonError::Sensor(_))));
    }
}
