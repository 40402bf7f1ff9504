//! Battery state acquisition: the power-sensor seam, the platform and sysfs
//! sensors, and the reader that normalizes readings into [`BatteryStatus`] records.
//!
//! [`BatteryStatus`]: batmon_core::BatteryStatus

pub mod platform;
pub mod reader;
pub mod sensor;
#[cfg(target_os = "linux")]
pub mod sysfs;
pub mod time;

pub use platform::PlatformSensor;
pub use reader::BatteryReader;
pub use sensor::{PowerSensor, SecsLeft, SensorReading, SensorSnapshot};
#[cfg(target_os = "linux")]
pub use sysfs::SysfsSensor;
pub use time::format_time_remaining;
