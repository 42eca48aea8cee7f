//! Presence configuration.
//!
//! A single JSON file (camelCase keys) in the platform config directory:
//!
//! ```json
//! {
//!   "applicationId": "1234567890",
//!   "debounceMs": 5000,
//!   "activity": {
//!     "state": "{action} {filename}",
//!     "largeUse": "editor",
//!     "smallUse": "language"
//!   }
//! }
//! ```
//!
//! Every key is optional; missing keys take their defaults.

mod error;

pub use error::{ConfigError, ConfigResult};

use presence_types::ActivityTemplate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "presence";

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_DEBOUNCE_MS: u64 = 5_000;

pub const DEFAULT_IMAGE_TIMEOUT_MS: u64 = 3_000;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresenceConfig {
    /// Application id used to log in to the presence service.
    pub application_id: String,
    /// Quiet period before a presence update is sent.
    pub debounce_ms: u64,
    /// Timeout for a single icon liveness check.
    pub image_timeout_ms: u64,
    /// How long icon checks are memoized; 0 disables the cache.
    pub image_cache_ttl_secs: u64,
    pub activity: ActivityTemplate,
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self {
            application_id: String::new(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            image_timeout_ms: DEFAULT_IMAGE_TIMEOUT_MS,
            image_cache_ttl_secs: 0,
            activity: ActivityTemplate::default(),
        }
    }
}

impl PresenceConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        parse(json, None)
    }

    /// A zero debounce window would send every keystroke and a zero image
    /// timeout would fail every icon check, so both are rejected.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "debounceMs",
                message: "must be greater than zero".to_string(),
            });
        }
        if self.image_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "imageTimeoutMs",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn image_timeout(&self) -> Duration {
        Duration::from_millis(self.image_timeout_ms)
    }

    pub fn image_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.image_cache_ttl_secs)
    }
}

/// Default config file location.
///
/// - Linux: `~/.config/presence/config.json`
/// - macOS: `~/Library/Application Support/presence/config.json`
/// - Windows: `%APPDATA%\presence\config.json`
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Load and validate the config at `path`.
pub fn load_from(path: &Path) -> ConfigResult<PresenceConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = parse(&content, Some(path))?;

    tracing::debug!(path = %path.display(), "Loaded presence config");
    Ok(config)
}

fn parse(json: &str, path: Option<&Path>) -> ConfigResult<PresenceConfig> {
    let config: PresenceConfig = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
        path: path.map(Path::to_path_buf),
        source: e,
    })?;
    config.validate()?;
    Ok(config)
}

/// Load the config at `path`, falling back to defaults.
///
/// A missing file is normal. A file that exists but cannot be read or parsed
/// is logged so a broken config does not silently reset settings.
pub fn load_or_default(path: &Path) -> PresenceConfig {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No presence config, using defaults");
        return PresenceConfig::default();
    }

    match load_from(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid presence config, using defaults");
            PresenceConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presence_types::SlotUse;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PresenceConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PresenceConfig::default());
        assert_eq!(config.debounce_window(), Duration::from_secs(5));
        assert_eq!(config.image_timeout(), Duration::from_secs(3));
        assert!(config.image_cache_ttl().is_zero());
    }

    #[test]
    fn test_partial_document() {
        let config = PresenceConfig::from_json_str(
            r#"{
                "applicationId": "42",
                "debounceMs": 250,
                "activity": { "details": "Working on {workspace}", "smallUse": "editor" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.application_id, "42");
        assert_eq!(config.debounce_window(), Duration::from_millis(250));
        assert_eq!(config.activity.details, "Working on {workspace}");
        assert_eq!(config.activity.state, "{action} {filename}");
        assert_eq!(config.activity.small_use, SlotUse::Editor);
    }

    #[test]
    fn test_unknown_slot_use_is_rejected() {
        let result = PresenceConfig::from_json_str(r#"{"activity": {"largeUse": "banner"}}"#);
        assert!(matches!(result, Err(ConfigError::Parse { path: None, .. })));
    }

    #[test]
    fn test_zero_image_timeout_is_rejected() {
        let result = PresenceConfig::from_json_str(r#"{"imageTimeoutMs": 0}"#);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "imageTimeoutMs",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_debounce_is_rejected() {
        let result = PresenceConfig::from_json_str(r#"{"debounceMs": 0}"#);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                field: "debounceMs",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_file_is_replaced_by_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"applicationId": "abc", "debounceMs": 0}"#).unwrap();

        assert!(matches!(load_from(&path), Err(ConfigError::Invalid { .. })));
        assert_eq!(load_or_default(&path), PresenceConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{"applicationId": "abc", "imageCacheTtlSecs": 60}"#).unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.application_id, "abc");
        assert_eq!(config.image_cache_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_or_default_handles_missing_and_corrupt() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert_eq!(load_or_default(&missing), PresenceConfig::default());

        let corrupt = dir.path().join("corrupt.json");
        std::fs::write(&corrupt, "{ not json").unwrap();
        assert_eq!(load_or_default(&corrupt), PresenceConfig::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = PresenceConfig {
            application_id: "xyz".to_string(),
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_config_path_ends_with_file_name() {
        let expected = Path::new(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        assert!(config_path().ends_with(expected));
    }
}
