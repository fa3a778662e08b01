use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::{
    error::{LoggerError, LoggerResult},
    object::{LoggerFormat, LoggerLevel, LoggerTimeZone},
};

pub const ENV_LOG_FORMAT: &str = "RTATTR_LOG_FORMAT";
pub const ENV_LOG_LEVEL: &str = "RTATTR_LOG_LEVEL";
pub const ENV_LOG_TZ: &str = "RTATTR_LOG_TZ";
pub const ENV_LOG_COLOR: &str = "RTATTR_LOG_COLOR";

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression (e.g. "info", "rtattr_core=debug,info").
    pub level: LoggerLevel,
    /// Timezone for timestamps.
    pub tz: LoggerTimeZone,
    /// Whether to include module/target names in log output.
    pub with_targets: bool,
    /// Whether to use colored output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            tz: LoggerTimeZone::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Defaults overridden by `RTATTR_LOG_FORMAT`, `RTATTR_LOG_LEVEL`, `RTATTR_LOG_TZ` and `RTATTR_LOG_COLOR`.
    ///
    /// Unset variables keep their default; set but invalid ones are an error.
    pub fn from_env() -> LoggerResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`LoggerConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> LoggerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(v) = lookup(ENV_LOG_FORMAT) {
            cfg.format = v.parse()?;
        }
        if let Some(v) = lookup(ENV_LOG_LEVEL) {
            cfg.level = v.parse()?;
        }
        if let Some(v) = lookup(ENV_LOG_TZ) {
            cfg.tz = v.parse()?;
        }
        if let Some(v) = lookup(ENV_LOG_COLOR) {
            cfg.use_color = match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(LoggerError::InvalidEnv {
                        var: ENV_LOG_COLOR,
                        value: v,
                    });
                }
            };
        }
        Ok(cfg)
    }

    /// Color is used only when enabled in config and stderr, where events are written, is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}
