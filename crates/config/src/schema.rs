use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure parsed from `batmon.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub general: GeneralConfig,
    pub sensor: SensorConfig,
    /// Percentage bands used to color the gauge.
    pub thresholds: ThresholdConfig,
    pub window: WindowConfig,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

/// Refresh behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Seconds between automatic refreshes.
    pub refresh_interval_secs: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { refresh_interval_secs: 30 }
    }
}

impl GeneralConfig {
    /// Refresh period, never shorter than one second.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }
}

/// Where the power-supply sensor is read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Linux only: read this sysfs power-supply directory directly instead
    /// of going through the OS battery API.  Ignored on other platforms.
    pub power_supply_path: Option<PathBuf>,
}

/// Upper bounds (inclusive) of the warning and caution color bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub warning: u8,
    pub caution: u8,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self { warning: 20, caution: 50 }
    }
}

impl ThresholdConfig {
    /// Returns the thresholds with `warning <= caution`, swapping if needed.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.warning <= self.caution {
            self
        } else {
            tracing::warn!(
                "thresholds.warning ({}) is above thresholds.caution ({}); swapping",
                self.warning,
                self.caution
            );
            Self { warning: self.caution, caution: self.warning }
        }
    }
}

/// Main window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial width in logical pixels.
    pub width: f32,
    /// Initial height in logical pixels.
    pub height: f32,
    /// The window cannot be shrunk below these.
    pub min_width: f32,
    pub min_height: f32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:      "Battery Monitor".to_string(),
            width:      500.0,
            height:     700.0,
            min_width:  500.0,
            min_height: 700.0,
            resizable:  true,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#1a1a1a"`).
    pub background: String,
    /// Card background color.
    pub surface: String,
    /// Card border color.
    pub border: String,
    /// Primary text/foreground color.
    pub foreground: String,
    /// Accent color (Refresh button).
    pub accent: String,
    /// Gauge color at or below `thresholds.warning`; also the error color.
    pub warning: String,
    /// Gauge color at or below `thresholds.caution`.
    pub caution: String,
    /// Gauge color above `thresholds.caution`.
    pub nominal: String,
    /// Body text size in points.
    pub font_size: f32,
    /// Window heading size in points.
    pub title_size: f32,
    /// Size of the large percentage label.
    pub percentage_size: f32,
    /// Corner radius for cards (pixels).
    pub border_radius: f32,
    /// Inner padding of each card (pixels).
    pub padding: u16,
    /// Gap between cards (pixels).
    pub spacing: u16,
    /// `strftime` format for the "last updated" footer.
    pub time_format: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:      "#1a1a1a".to_string(),
            surface:         "#2d2d2d".to_string(),
            border:          "#3d3d3d".to_string(),
            foreground:      "#ffffff".to_string(),
            accent:          "#0078d4".to_string(),
            warning:         "#ff4444".to_string(),
            caution:         "#ffaa00".to_string(),
            nominal:         "#00cc44".to_string(),
            font_size:       14.0,
            title_size:      16.0,
            percentage_size: 56.0,
            border_radius:   15.0,
            padding:         25,
            spacing:         25,
            time_format:     "%H:%M:%S".to_string(),
        }
    }
}
