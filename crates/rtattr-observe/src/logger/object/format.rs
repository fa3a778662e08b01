use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::logger::LoggerError;

/// Output format for the logger.
/// - `Text`     — human-friendly text logs, colored when stdout is a terminal.
/// - `Json`     — one JSON object per event, for log collectors.
/// - `Journald` — events go to systemd-journald (Linux only).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoggerFormat {
    #[default]
    Text,
    Json,
    Journald,
}

impl LoggerFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LoggerFormat::Text => "text",
            LoggerFormat::Json => "json",
            LoggerFormat::Journald => "journald",
        }
    }
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            #[cfg(target_os = "linux")]
            "journald" | "journal" => Ok(Self::Journald),
            #[cfg(not(target_os = "linux"))]
            "journald" | "journal" => Err(LoggerError::JournaldNotSupported),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LoggerFormat {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LoggerFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_text() {
        assert_eq!(LoggerFormat::default(), LoggerFormat::Text);
    }

    #[test]
    fn parses_case_insensitive() {
        for (input, want) in [
            ("text", LoggerFormat::Text),
            ("TEXT", LoggerFormat::Text),
            (" json ", LoggerFormat::Json),
            ("JsOn", LoggerFormat::Json),
        ] {
            assert_eq!(LoggerFormat::from_str(input).unwrap(), want, "{input:?}");
        }
    }

    #[test]
    fn journald_depends_on_platform() {
        let parsed = LoggerFormat::from_str("journald");

        #[cfg(target_os = "linux")]
        assert_eq!(parsed.unwrap(), LoggerFormat::Journald);

        #[cfg(not(target_os = "linux"))]
        assert!(matches!(parsed, Err(LoggerError::JournaldNotSupported)));
    }

    #[test]
    fn rejects_unknown_format() {
        for input in ["", "xml", "logfmt", "text-json"] {
            assert!(
                LoggerFormat::from_str(input).is_err(),
                "expected error for {input:?}"
            );
        }
    }

    #[test]
    fn serde_goes_through_canonical_names() {
        let json = serde_json::to_string(&LoggerFormat::Json).unwrap();
        assert_eq!(json, r#""json""#);

        let parsed: LoggerFormat = serde_json::from_str(r#""Text""#).unwrap();
        assert_eq!(parsed, LoggerFormat::Text);
    }
}
