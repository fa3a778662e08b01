use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, ModelResult};

/// Family of execution backends a task may be dispatched to.
///
/// The set is closed: every backend the runtime attribute table refers to is listed here,
/// so matches over it stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BackendKind {
    /// Local process execution.
    Local,
    /// Grid-engine submission.
    Sge,
    /// Cloud batch submission.
    Jes,
    /// Cluster scheduler submission.
    Lsf,
}

impl BackendKind {
    /// Every backend kind, in declaration order.
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Local,
        BackendKind::Sge,
        BackendKind::Jes,
        BackendKind::Lsf,
    ];

    /// Returns the canonical name as a static string.
    pub const fn as_str(self) -> &'static str {
        match self {
            BackendKind::Local => "local",
            BackendKind::Sge => "sge",
            BackendKind::Jes => "jes",
            BackendKind::Lsf => "lsf",
        }
    }
}

impl FromStr for BackendKind {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "local-process" => Ok(BackendKind::Local),
            "sge" | "grid-engine" => Ok(BackendKind::Sge),
            "jes" | "cloud-batch" => Ok(BackendKind::Jes),
            "lsf" | "cluster-scheduler" => Ok(BackendKind::Lsf),
            _ => Err(ModelError::UnknownBackend(s.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BackendKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BackendKind {
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
    fn parses_canonical_names_case_insensitive() {
        assert_eq!(BackendKind::from_str("local").unwrap(), BackendKind::Local);
        assert_eq!(BackendKind::from_str("SGE").unwrap(), BackendKind::Sge);
        assert_eq!(BackendKind::from_str("Jes").unwrap(), BackendKind::Jes);
        assert_eq!(BackendKind::from_str(" lsf ").unwrap(), BackendKind::Lsf);
    }

    #[test]
    fn parses_family_aliases() {
        assert_eq!(
            BackendKind::from_str("local-process").unwrap(),
            BackendKind::Local
        );
        assert_eq!(
            BackendKind::from_str("Grid-Engine").unwrap(),
            BackendKind::Sge
        );
        assert_eq!(
            BackendKind::from_str("cloud-batch").unwrap(),
            BackendKind::Jes
        );
        assert_eq!(
            BackendKind::from_str("CLUSTER-SCHEDULER").unwrap(),
            BackendKind::Lsf
        );
    }

    #[test]
    fn rejects_unknown_backend() {
        for input in ["", "  ", "slurm", "k8s", "local process"] {
            match BackendKind::from_str(input) {
                Err(ModelError::UnknownBackend(got)) => assert_eq!(got, input),
                other => panic!("expected UnknownBackend for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn display_matches_parse() {
        for kind in BackendKind::ALL {
            let name = kind.to_string();
            assert_eq!(BackendKind::from_str(&name).unwrap(), kind);
        }
    }

    #[test]
    fn serde_uses_canonical_name() {
        let json = serde_json::to_string(&BackendKind::Jes).unwrap();
        assert_eq!(json, r#""jes""#);

        let parsed: BackendKind = serde_json::from_str(r#""Cloud-Batch""#).unwrap();
        assert_eq!(parsed, BackendKind::Jes);

        assert!(serde_json::from_str::<BackendKind>(r#""mesos""#).is_err());
    }
}
