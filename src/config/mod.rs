mod settings;

pub use settings::{
    BootConfig, Config, ConfigError, TomlConfig, DEFAULT_CV_URL, EXAMPLE_CONFIG,
};
