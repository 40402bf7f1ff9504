pub mod schema;
pub mod watcher;

pub use schema::{
    GeneralConfig, MonitorConfig, SensorConfig, ThemeConfig, ThresholdConfig, WindowConfig,
};
pub use watcher::watch;

use batmon_core::{BatmonError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `MonitorConfig::default()` if
/// the file doesn't exist so the monitor always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<MonitorConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(MonitorConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| BatmonError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| BatmonError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("batmon").join("batmon.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let td = TempDir::new().unwrap();
        let cfg = load(td.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, MonitorConfig::default());
    }

    #[test]
    fn reads_file_from_disk() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("batmon.toml");
        std::fs::write(
            &path,
            "[sensor]\npower_supply_path = \"/tmp/ps\"\n[thresholds]\nwarning = 10\n",
        )
        .unwrap();

        let cfg = load(&path).unwrap();
        assert_eq!(cfg.sensor.power_supply_path, Some(PathBuf::from("/tmp/ps")));
        assert_eq!(cfg.thresholds.warning, 10);
        assert_eq!(cfg.thresholds.caution, 50);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let td = TempDir::new().unwrap();
        let path = td.path().join("batmon.toml");
        std::fs::write(&path, "[general\nrefresh_interval_secs = ").unwrap();

        assert!(matches!(load(&path), Err(BatmonError::Config(_))));
    }

    #[test]
    fn default_path_ends_in_batmon_toml() {
        assert!(default_path().ends_with("batmon/batmon.toml"));
    }
}
