use std::{
    fmt,
    str::FromStr,
    sync::{OnceLock, RwLock},
};

use serde::{Deserialize, Serialize};
use time::UtcOffset;

use crate::logger::error::LoggerError;

/// Cached local UTC offset, written by `init_local_offset()`.
static LOCAL_OFFSET: RwLock<UtcOffset> = RwLock::new(UtcOffset::UTC);

/// Set once local offset detection has been attempted.
static DETECTED: OnceLock<()> = OnceLock::new();

/// Timezone used for log timestamps.
#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LoggerTimeZone {
    #[default]
    Utc,
    /// System timezone; see [`init_local_offset`].
    Local,
}

impl FromStr for LoggerTimeZone {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utc" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => Err(LoggerError::InvalidTimeZone(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoggerTimeZone::Utc => "utc",
            LoggerTimeZone::Local => "local",
        })
    }
}

impl LoggerTimeZone {
    /// Offset to apply to timestamps for this timezone.
    pub(crate) fn offset(&self) -> UtcOffset {
        match self {
            LoggerTimeZone::Utc => UtcOffset::UTC,
            LoggerTimeZone::Local => local_offset(),
        }
    }
}

/// Detects and caches the local timezone offset.
///
/// Call from `main()` before any thread is spawned: offset detection fails in multi-threaded processes on most Unix platforms.
/// Falls back to UTC when detection fails.
pub fn init_local_offset() {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    if let Ok(mut guard) = LOCAL_OFFSET.write() {
        *guard = offset;
    }
    let _ = DETECTED.set(());
}

fn local_offset() -> UtcOffset {
    DETECTED.get_or_init(|| match UtcOffset::current_local_offset() {
        Ok(detected) => {
            if let Ok(mut guard) = LOCAL_OFFSET.write() {
                *guard = detected;
            }
        }
        Err(_) => {
            eprintln!(
                "WARNING: rtattr-observe could not detect the local timezone; \
                 call init_local_offset() before spawning threads. Falling back to UTC."
            );
        }
    });

    LOCAL_OFFSET
        .read()
        .map(|guard| *guard)
        .unwrap_or(UtcOffset::UTC)
}
