//! Application configuration management.
//!
//! nettraf reads a small JSON config file (default `config.json`) with one
//! recognized key: the name of the interface to monitor. A missing or
//! malformed file is not fatal — the loader logs the failure and falls back
//! to defaults, and the run then fails at startup because a null interface
//! can never match a real one.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::logger::{LogLevel, Logger};

/// User-supplied monitor settings.
///
/// Unrecognized keys in the file are ignored; the only recognized field is
/// the interface name. `interface = null` (or an absent key) means "nothing
/// to monitor" and makes the sampler fail with `InterfaceNotFound`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Name of the network interface to monitor.
    pub interface: Option<String>,
}

/// Loads [`MonitorConfig`] from a JSON file.
///
/// Never fails: any read or parse error is logged at ERROR level to the
/// given sink and the default config (`interface = None`) is returned.
pub fn load_config(path: &Path, logger: &mut Logger) -> MonitorConfig {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = format!("Config loading failed: {}: {e}", path.display());
            logger.error(constants::LOG_CAT_CONFIG, &msg);
            eprintln!("Warning: {msg}");
            return MonitorConfig::default();
        }
    };

    match serde_json::from_str::<MonitorConfig>(&content) {
        Ok(config) => {
            logger.log(
                LogLevel::Debug,
                constants::LOG_CAT_CONFIG,
                &format!("Loaded config from {}", path.display()),
            );
            config
        }
        Err(e) => {
            let msg = format!("Config loading failed: {}: {e}", path.display());
            logger.error(constants::LOG_CAT_CONFIG, &msg);
            eprintln!("Warning: {msg}");
            MonitorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_logger(name: &str) -> (Logger, std::path::PathBuf) {
        let path = std::env::temp_dir().join(name);
        let _ = std::fs::remove_file(&path);
        (Logger::open(&path).unwrap(), path)
    }

    #[test]
    fn test_load_config_missing_file() {
        let (mut logger, log_path) = temp_logger("nettraf_test_cfg_missing.log");
        let config = load_config(Path::new("/nonexistent/nettraf_config.json"), &mut logger);
        assert_eq!(config, MonitorConfig::default());
        assert!(config.interface.is_none());

        logger.flush();
        let log = std::fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("Config loading failed"));

        let _ = std::fs::remove_file(&log_path);
    }

    #[test]
    fn test_load_config_malformed_json() {
        let dir = std::env::temp_dir().join("nettraf_test_cfg_malformed");
        let _ = std::fs::create_dir_all(&dir);
        let cfg_path = dir.join("config.json");
        std::fs::write(&cfg_path, "{\"interface\": ").unwrap();

        let (mut logger, log_path) = temp_logger("nettraf_test_cfg_malformed.log");
        let config = load_config(&cfg_path, &mut logger);
        assert!(config.interface.is_none());

        logger.flush();
        let log = std::fs::read_to_string(&log_path).unwrap();
        assert!(log.contains("[ERROR]"));

        let _ = std::fs::remove_file(&log_path);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_config_valid() {
        let dir = std::env::temp_dir().join("nettraf_test_cfg_valid");
        let _ = std::fs::create_dir_all(&dir);
        let cfg_path = dir.join("config.json");
        std::fs::write(&cfg_path, r#"{"interface": "eth0"}"#).unwrap();

        let (mut logger, log_path) = temp_logger("nettraf_test_cfg_valid.log");
        let config = load_config(&cfg_path, &mut logger);
        assert_eq!(config.interface.as_deref(), Some("eth0"));

        let _ = std::fs::remove_file(&log_path);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_config_null_interface() {
        let dir = std::env::temp_dir().join("nettraf_test_cfg_null");
        let _ = std::fs::create_dir_all(&dir);
        let cfg_path = dir.join("config.json");
        std::fs::write(&cfg_path, r#"{"interface": null}"#).unwrap();

        let (mut logger, log_path) = temp_logger("nettraf_test_cfg_null.log");
        let config = load_config(&cfg_path, &mut logger);
        assert!(config.interface.is_none());

        let _ = std::fs::remove_file(&log_path);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_config_ignores_unknown_keys() {
        let dir = std::env::temp_dir().join("nettraf_test_cfg_extra");
        let _ = std::fs::create_dir_all(&dir);
        let cfg_path = dir.join("config.json");
        std::fs::write(
            &cfg_path,
            r#"{"interface": "wlan0", "threshold": 9000, "comment": "spare"}"#,
        )
        .unwrap();

        let (mut logger, log_path) = temp_logger("nettraf_test_cfg_extra.log");
        let config = load_config(&cfg_path, &mut logger);
        assert_eq!(config.interface.as_deref(), Some("wlan0"));

        let _ = std::fs::remove_file(&log_path);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
