use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::anim::{DEFAULT_SCRAMBLE_INTERVAL, DEFAULT_SETTLE, DEFAULT_TEAR};
use crate::syslog::DEFAULT_LOG_CAPACITY;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Default CV location handed to the platform opener
pub const DEFAULT_CV_URL: &str = "https://example.com/Abdalrahman_Eleimat_CV.pdf";

/// Errors raised while loading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Boot sequence timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootConfig {
    /// Play the boot animation on startup
    pub enabled: bool,
    /// Delay between boot log lines
    pub interval: Duration,
    /// Pause after the last line before the glitch transition
    pub settle: Duration,
    /// Length of the glitch transition
    pub tear: Duration,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: Duration::from_millis(150),
            settle: DEFAULT_SETTLE,
            tear: DEFAULT_TEAR,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub boot: BootConfig,
    /// Frame delay for navigation label scrambles
    pub scramble_interval: Duration,
    /// Simulated contact form transmission time
    pub transmit_delay: Duration,
    /// Number of entries the system log keeps
    pub log_capacity: usize,
    /// Where "DOWNLOAD_CV" points
    pub cv_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boot: BootConfig::default(),
            scramble_interval: DEFAULT_SCRAMBLE_INTERVAL,
            transmit_delay: Duration::from_millis(1500),
            log_capacity: DEFAULT_LOG_CAPACITY,
            cv_url: DEFAULT_CV_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlBootConfig {
    pub enabled: Option<bool>,
    pub interval_ms: Option<u64>,
    pub settle_ms: Option<u64>,
    pub tear_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlScrambleConfig {
    pub interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlContactConfig {
    pub transmit_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlLogConfig {
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlProfileConfig {
    pub cv_url: Option<String>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub boot: Option<TomlBootConfig>,
    pub scramble: Option<TomlScrambleConfig>,
    pub contact: Option<TomlContactConfig>,
    pub log: Option<TomlLogConfig>,
    pub profile: Option<TomlProfileConfig>,
}

fn positive_millis(field: &'static str, value: u64) -> Result<Duration, ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid {
            field,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_millis(value))
}

impl Config {
    /// Load configuration from the default location, merging with defaults.
    ///
    /// Never fails: problems are logged and the defaults are used instead.
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        match Self::load_from(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Falling back to default configuration");
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let toml_config =
            toml::from_str::<TomlConfig>(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Config::default().merge(toml_config)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Apply values from a parsed file on top of `self`
    pub fn merge(mut self, toml_config: TomlConfig) -> Result<Self, ConfigError> {
        if let Some(boot) = toml_config.boot {
            if let Some(enabled) = boot.enabled {
                self.boot.enabled = enabled;
            }
            if let Some(ms) = boot.interval_ms {
                self.boot.interval = positive_millis("boot.interval_ms", ms)?;
            }
            // Zero is allowed for the grace stages: it skips them
            if let Some(ms) = boot.settle_ms {
                self.boot.settle = Duration::from_millis(ms);
            }
            if let Some(ms) = boot.tear_ms {
                self.boot.tear = Duration::from_millis(ms);
            }
        }

        if let Some(scramble) = toml_config.scramble {
            if let Some(ms) = scramble.interval_ms {
                self.scramble_interval = positive_millis("scramble.interval_ms", ms)?;
            }
        }

        if let Some(contact) = toml_config.contact {
            if let Some(ms) = contact.transmit_delay_ms {
                self.transmit_delay = Duration::from_millis(ms);
            }
        }

        if let Some(log) = toml_config.log {
            if let Some(capacity) = log.capacity {
                if capacity == 0 {
                    return Err(ConfigError::Invalid {
                        field: "log.capacity",
                        reason: "must keep at least one entry".to_string(),
                    });
                }
                self.log_capacity = capacity;
            }
        }

        if let Some(profile) = toml_config.profile {
            if let Some(cv_url) = profile.cv_url {
                self.cv_url = cv_url;
            }
        }

        Ok(self)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, path = %path.display(), "Failed to write default config");
        }
    }

    pub fn with_boot_enabled(mut self, enabled: bool) -> Self {
        self.boot.enabled = enabled;
        self
    }
}
