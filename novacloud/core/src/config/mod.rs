//! TOML Configuration File Support
//!
//! Loads the landing-page configuration from
//! `$XDG_CONFIG_HOME/novacloud/landing.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (via [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [hero]
//! phrases = ["Cloud in Seconds", "Apps with Ease"]
//! typing_interval_ms = 80
//! deleting_interval_ms = 40
//! pause_ms = 2000
//!
//! [testimonials]
//! typing_interval_ms = 70
//!
//! [preferences]
//! path = "/home/me/.config/novacloud/preferences.toml"
//! ```
//!
//! # Environment Variables
//!
//! - `NOVACLOUD_TYPING_INTERVAL_MS`: typing interval for both effects
//! - `NOVACLOUD_DELETING_INTERVAL_MS`: deleting interval for both effects
//! - `NOVACLOUD_PAUSE_MS`: dwell for both effects
//! - `NOVACLOUD_PREFERENCES`: preference file path

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preferences::PreferenceStore;
use crate::typewriter::{PhraseList, TypewriterConfig};

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// One typewriter section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterToml {
    /// Phrases in cycling order
    pub phrases: Option<Vec<String>>,

    /// Delay between typed characters in milliseconds
    pub typing_interval_ms: Option<u64>,

    /// Delay between deleted characters in milliseconds
    pub deleting_interval_ms: Option<u64>,

    /// Dwell after a phrase is typed in milliseconds
    pub pause_ms: Option<u64>,
}

/// Preferences section of the TOML configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesToml {
    /// Preference file path
    pub path: Option<String>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingToml {
    /// Hero heading typewriter
    pub hero: TypewriterToml,

    /// Testimonials heading typewriter
    pub testimonials: TypewriterToml,

    /// Preference storage
    pub preferences: PreferencesToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved landing-page configuration
///
/// Use [`load_config`] to load with proper priority handling, then
/// [`ConfigOverrides::apply`] for CLI values.
#[derive(Clone, Debug)]
pub struct LandingConfig {
    /// Hero heading typewriter
    pub hero: TypewriterConfig,

    /// Testimonials heading typewriter
    pub testimonials: TypewriterConfig,

    /// Preference file (`None` keeps preferences in memory)
    pub preferences_path: Option<PathBuf>,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            hero: TypewriterConfig::hero(),
            testimonials: TypewriterConfig::testimonials(),
            preferences_path: PreferenceStore::default_path(),
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl LandingConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Check both typewriter configs
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the failing section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for config in [&self.hero, &self.testimonials] {
            config
                .validate()
                .map_err(|e| ConfigError::ValidationError(format!("[{}] {e}", config.name)))?;
        }
        Ok(())
    }

    /// Open the preference store this config points at
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file exists but is unreadable.
    pub fn open_preferences(&self) -> Result<PreferenceStore, crate::PreferenceError> {
        match &self.preferences_path {
            Some(path) => PreferenceStore::open(path),
            None => Ok(PreferenceStore::in_memory()),
        }
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/novacloud/landing.toml` or
/// `~/.config/novacloud/landing.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("novacloud").join("landing.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or the
/// result fails validation. A missing config file is not an error.
pub fn load_config() -> Result<LandingConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path, then the process environment
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or the result fails validation.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<LandingConfig, ConfigError> {
    load_config_with_env(path, |key| std::env::var(key).ok())
}

/// Load configuration with a custom environment lookup
///
/// # Errors
///
/// Same as [`load_config_from_path`].
pub fn load_config_with_env<F>(path: Option<PathBuf>, env: F) -> Result<LandingConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults
    let mut config = LandingConfig::default();

    // Try to load from file
    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: LandingToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config)?;
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    // Apply environment variables (overrides file values)
    apply_env_config(&mut config, env);

    config.validate()?;
    Ok(config)
}

/// Apply TOML configuration values to the config struct
fn apply_toml_config(config: &mut LandingConfig, toml: &LandingToml) -> Result<(), ConfigError> {
    apply_typewriter_toml(&mut config.hero, &toml.hero)?;
    apply_typewriter_toml(&mut config.testimonials, &toml.testimonials)?;

    if let Some(ref path) = toml.preferences.path {
        config.preferences_path = Some(PathBuf::from(path));
    }
    Ok(())
}

fn apply_typewriter_toml(
    config: &mut TypewriterConfig,
    toml: &TypewriterToml,
) -> Result<(), ConfigError> {
    if let Some(ref phrases) = toml.phrases {
        config.phrases = PhraseList::new(phrases.iter().cloned())
            .map_err(|e| ConfigError::ValidationError(format!("[{}] {e}", config.name)))?;
    }
    if let Some(ms) = toml.typing_interval_ms {
        config.timing.typing_interval = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.deleting_interval_ms {
        config.timing.deleting_interval = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.pause_ms {
        config.timing.pause = Duration::from_millis(ms);
    }
    Ok(())
}

/// Apply environment variable overrides to the config
fn apply_env_config<F>(config: &mut LandingConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    let parse_ms = |key: &str| -> Option<u64> {
        let raw = env(key)?;
        match raw.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(_) => {
                tracing::warn!(key, value = %raw, "Ignoring non-numeric environment override");
                None
            }
        }
    };

    if let Some(ms) = parse_ms("NOVACLOUD_TYPING_INTERVAL_MS") {
        config.hero.timing.typing_interval = Duration::from_millis(ms);
        config.testimonials.timing.typing_interval = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = parse_ms("NOVACLOUD_DELETING_INTERVAL_MS") {
        config.hero.timing.deleting_interval = Duration::from_millis(ms);
        config.testimonials.timing.deleting_interval = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(ms) = parse_ms("NOVACLOUD_PAUSE_MS") {
        config.hero.timing.pause = Duration::from_millis(ms);
        config.testimonials.timing.pause = Duration::from_millis(ms);
        config.source = ConfigSource::Env;
    }
    if let Some(path) = env("NOVACLOUD_PREFERENCES") {
        config.preferences_path = Some(PathBuf::from(path));
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Preference file override
    pub preferences_path: Option<PathBuf>,

    /// Typing interval override for both effects (milliseconds)
    pub typing_interval_ms: Option<u64>,

    /// Deleting interval override for both effects (milliseconds)
    pub deleting_interval_ms: Option<u64>,

    /// Dwell override for both effects (milliseconds)
    pub pause_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set preference file override
    #[must_use]
    pub fn with_preferences_path(mut self, path: PathBuf) -> Self {
        self.preferences_path = Some(path);
        self
    }

    /// Set typing interval override
    #[must_use]
    pub fn with_typing_interval_ms(mut self, ms: u64) -> Self {
        self.typing_interval_ms = Some(ms);
        self
    }

    /// Set deleting interval override
    #[must_use]
    pub fn with_deleting_interval_ms(mut self, ms: u64) -> Self {
        self.deleting_interval_ms = Some(ms);
        self
    }

    /// Set dwell override
    #[must_use]
    pub fn with_pause_ms(mut self, ms: u64) -> Self {
        self.pause_ms = Some(ms);
        self
    }

    /// Apply overrides to a configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if an override zeroes a duration.
    pub fn apply(&self, config: &mut LandingConfig) -> Result<(), ConfigError> {
        if self.preferences_path.is_some()
            || self.typing_interval_ms.is_some()
            || self.deleting_interval_ms.is_some()
            || self.pause_ms.is_some()
        {
            config.source = ConfigSource::Cli;
        }

        if let Some(ref path) = self.preferences_path {
            config.preferences_path = Some(path.clone());
        }

        for typewriter in [&mut config.hero, &mut config.testimonials] {
            if let Some(ms) = self.typing_interval_ms {
                typewriter.timing.typing_interval = Duration::from_millis(ms);
            }
            if let Some(ms) = self.deleting_interval_ms {
                typewriter.timing.deleting_interval = Duration::from_millis(ms);
            }
            if let Some(ms) = self.pause_ms {
                typewriter.timing.pause = Duration::from_millis(ms);
            }
        }

        config.validate()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_toml(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // =========================================================================
    // Default Configuration Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = LandingConfig::default();

        assert_eq!(config.hero, TypewriterConfig::hero());
        assert_eq!(config.testimonials, TypewriterConfig::testimonials());
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("novacloud/landing.toml"));
        }
    }

    // =========================================================================
    // TOML Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_valid_toml() {
        let file = write_toml(
            r#"
[hero]
phrases = ["Go", "Run"]
typing_interval_ms = 100
deleting_interval_ms = 50
pause_ms = 1500

[testimonials]
typing_interval_ms = 60

[preferences]
path = "/tmp/novacloud-prefs.toml"
"#,
        );

        let config =
            load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();

        assert_eq!(config.hero.phrases.get(1), Some("Run"));
        assert_eq!(config.hero.timing.typing_interval, Duration::from_millis(100));
        assert_eq!(config.hero.timing.deleting_interval, Duration::from_millis(50));
        assert_eq!(config.hero.timing.pause, Duration::from_millis(1500));

        // untouched fields keep their preset
        assert_eq!(config.testimonials.timing.typing_interval, Duration::from_millis(60));
        assert_eq!(config.testimonials.timing.pause, Duration::from_millis(2200));
        assert_eq!(config.testimonials.phrases.len(), 4);

        assert_eq!(
            config.preferences_path,
            Some(PathBuf::from("/tmp/novacloud-prefs.toml"))
        );
        assert_eq!(config.source(), ConfigSource::File);
        assert_eq!(config.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_parse_empty_toml() {
        let file = write_toml("");
        let config = load_config_with_env(Some(file.path().to_path_buf()), no_env).unwrap();
        assert_eq!(config.hero, TypewriterConfig::hero());
        assert_eq!(config.source(), ConfigSource::File);
    }

    #[test]
    fn test_missing_file_graceful() {
        let path = PathBuf::from("/nonexistent/novacloud/landing.toml");
        let config = load_config_with_env(Some(path), no_env).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.config_file_path.is_none());
    }

    #[test]
    fn test_no_path_uses_defaults() {
        let config = load_config_with_env(None, no_env).unwrap();
        assert_eq!(config.hero, TypewriterConfig::hero());
    }

    #[test]
    fn test_malformed_toml_error() {
        let file = write_toml("[hero\nphrases = ");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        let file = write_toml("[hero]\nphrases = []\n");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);
        match result {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.starts_with("[hero]")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_interval_rejected() {
        let file = write_toml("[testimonials]\npause_ms = 0\n");
        let result = load_config_with_env(Some(file.path().to_path_buf()), no_env);
        match result {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("testimonials"));
                assert!(msg.contains("pause"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // =========================================================================
    // Priority Tests
    // =========================================================================

    #[test]
    fn test_env_overrides_file() {
        let file = write_toml("[hero]\ntyping_interval_ms = 100\n");
        let env = env_from(&[
            ("NOVACLOUD_TYPING_INTERVAL_MS", "25"),
            ("NOVACLOUD_PREFERENCES", "/tmp/env-prefs.toml"),
        ]);

        let config = load_config_with_env(Some(file.path().to_path_buf()), env).unwrap();

        assert_eq!(config.hero.timing.typing_interval, Duration::from_millis(25));
        assert_eq!(config.testimonials.timing.typing_interval, Duration::from_millis(25));
        assert_eq!(
            config.preferences_path,
            Some(PathBuf::from("/tmp/env-prefs.toml"))
        );
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_non_numeric_env_ignored() {
        let env = env_from(&[("NOVACLOUD_PAUSE_MS", "soon")]);
        let config = load_config_with_env(None, env).unwrap();
        assert_eq!(config.hero.timing.pause, Duration::from_millis(2000));
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_zero_env_rejected() {
        let env = env_from(&[("NOVACLOUD_DELETING_INTERVAL_MS", "0")]);
        let result = load_config_with_env(None, env);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_cli_overrides_env() {
        let env = env_from(&[("NOVACLOUD_PAUSE_MS", "500")]);
        let mut config = load_config_with_env(None, env).unwrap();

        ConfigOverrides::new()
            .with_pause_ms(100)
            .apply(&mut config)
            .unwrap();

        assert_eq!(config.hero.timing.pause, Duration::from_millis(100));
        assert_eq!(config.testimonials.timing.pause, Duration::from_millis(100));
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_config_overrides_builder() {
        let overrides = ConfigOverrides::new()
            .with_preferences_path(PathBuf::from("/tmp/p.toml"))
            .with_typing_interval_ms(10)
            .with_deleting_interval_ms(5);

        assert_eq!(overrides.preferences_path, Some(PathBuf::from("/tmp/p.toml")));
        assert_eq!(overrides.typing_interval_ms, Some(10));
        assert_eq!(overrides.deleting_interval_ms, Some(5));
        assert_eq!(overrides.pause_ms, None);
    }

    #[test]
    fn test_config_overrides_empty_no_change() {
        let mut config = LandingConfig::default();
        ConfigOverrides::new().apply(&mut config).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
        assert_eq!(config.hero, TypewriterConfig::hero());
    }

    #[test]
    fn test_config_overrides_zero_rejected() {
        let mut config = LandingConfig::default();
        let result = ConfigOverrides::new().with_typing_interval_ms(0).apply(&mut config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Cli.to_string(), "CLI");
        assert_eq!(ConfigSource::Env.to_string(), "environment");
        assert_eq!(ConfigSource::File.to_string(), "config file");
        assert_eq!(ConfigSource::Default.to_string(), "default");
    }

    #[test]
    fn test_open_preferences_in_memory() {
        let mut config = LandingConfig::default();
        config.preferences_path = None;
        let store = config.open_preferences().unwrap();
        assert!(store.path().is_none());
    }
}
