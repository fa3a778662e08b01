mod config;
mod error;
mod install;
mod object;

pub use config::{ENV_LOG_COLOR, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_LOG_TZ, LoggerConfig};
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel, LoggerTimeZone, init_local_offset};

/// Installs the global tracing subscriber described by `cfg`.
///
/// With [`LoggerTimeZone::Local`], call [`init_local_offset`] in `main()` before spawning threads.
///
/// # Examples
/// ```rust
/// use rtattr_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger init");
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => install::logger_text(cfg),
        LoggerFormat::Json => install::logger_json(cfg),
        LoggerFormat::Journald => install::logger_journald(cfg),
    }
}
