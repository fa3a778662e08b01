//! Runtime attribute keys and the backends known to support them.
//!
//! The table is compiled in: each [`RuntimeKey`] variant maps to its canonical external name,
//! the backends on which it is mandatory and the backends on which it is optional.
//! A backend appears in at most one of those two lists for a given key; this is checked at
//! compile time, so an edit that breaks it fails the build.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::{
    BackendKind::{self, Jes, Local, Lsf, Sge},
    Requirement,
    error::{ModelError, ModelResult},
};

/// Runtime attribute a workflow task may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuntimeKey {
    ContinueOnReturnCode,
    Cpu,
    Disks,
    Zones,
    Docker,
    FailOnStderr,
    Memory,
    Preemptible,
    BootDiskSizeGb,
}

const NONE: &[BackendKind] = &[];

impl RuntimeKey {
    /// Every key, in table order.
    pub const ALL: [RuntimeKey; 9] = [
        RuntimeKey::ContinueOnReturnCode,
        RuntimeKey::Cpu,
        RuntimeKey::Disks,
        RuntimeKey::Zones,
        RuntimeKey::Docker,
        RuntimeKey::FailOnStderr,
        RuntimeKey::Memory,
        RuntimeKey::Preemptible,
        RuntimeKey::BootDiskSizeGb,
    ];

    /// Canonical external name, as written in workflow definitions.
    pub const fn key(self) -> &'static str {
        match self {
            RuntimeKey::ContinueOnReturnCode => "continueOnReturnCode",
            RuntimeKey::Cpu => "cpu",
            RuntimeKey::Disks => "disks",
            RuntimeKey::Zones => "zones",
            RuntimeKey::Docker => "docker",
            RuntimeKey::FailOnStderr => "failOnStderr",
            RuntimeKey::Memory => "memory",
            RuntimeKey::Preemptible => "preemptible",
            RuntimeKey::BootDiskSizeGb => "bootDiskSizeGb",
        }
    }

    /// Backends on which this key must be present.
    pub const fn mandatory(self) -> &'static [BackendKind] {
        match self {
            RuntimeKey::Docker => &[Jes],
            _ => NONE,
        }
    }

    /// Backends on which this key may be present but is not required.
    pub const fn optional(self) -> &'static [BackendKind] {
        match self {
            RuntimeKey::ContinueOnReturnCode => &[Local, Sge, Jes, Lsf],
            RuntimeKey::Cpu
            | RuntimeKey::Disks
            | RuntimeKey::Zones
            | RuntimeKey::Memory
            | RuntimeKey::Preemptible
            | RuntimeKey::BootDiskSizeGb => &[Jes],
            RuntimeKey::Docker => &[Local],
            RuntimeKey::FailOnStderr => &[Jes, Local, Sge, Lsf],
        }
    }

    /// Resolves an external attribute name, ignoring case.
    ///
    /// Case is folded per character through both upper and lower case, so `"diſks"` resolves to
    /// [`RuntimeKey::Disks`].
    ///
    /// # Errors
    /// [`ModelError::UnrecognizedAttribute`] carrying `name` unchanged if no key matches.
    pub fn lookup(name: &str) -> ModelResult<Self> {
        Self::ALL
            .into_iter()
            .find(|k| eq_ignore_case(k.key(), name))
            .ok_or_else(|| ModelError::UnrecognizedAttribute(name.to_string()))
    }

    pub const fn is_mandatory(self, backend: BackendKind) -> bool {
        contains(self.mandatory(), backend)
    }

    pub const fn is_optional(self, backend: BackendKind) -> bool {
        contains(self.optional(), backend)
    }

    /// Returns `true` if the key is mandatory or optional on `backend`.
    pub const fn supports(self, backend: BackendKind) -> bool {
        self.is_optional(backend) || self.is_mandatory(backend)
    }

    /// How `backend` treats this key, or `None` if it does not recognize it at all.
    pub const fn requirement(self, backend: BackendKind) -> Option<Requirement> {
        if self.is_mandatory(backend) {
            Some(Requirement::Mandatory)
        } else if self.is_optional(backend) {
            Some(Requirement::Optional)
        } else {
            None
        }
    }

    /// Keys accepted by `backend`, in table order.
    pub fn supported_on(backend: BackendKind) -> impl Iterator<Item = RuntimeKey> {
        Self::ALL.into_iter().filter(move |k| k.supports(backend))
    }

    /// Keys required by `backend`, in table order.
    pub fn mandatory_on(backend: BackendKind) -> impl Iterator<Item = RuntimeKey> {
        Self::ALL.into_iter().filter(move |k| k.is_mandatory(backend))
    }
}

const fn contains(set: &[BackendKind], backend: BackendKind) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] as u8 == backend as u8 {
            return true;
        }
        i += 1;
    }
    false
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            x == y
                || x.to_uppercase().eq(y.to_uppercase())
                || x.to_uppercase()
                    .flat_map(char::to_lowercase)
                    .eq(y.to_uppercase().flat_map(char::to_lowercase))
        })
}

const fn table_is_disjoint() -> bool {
    let mut i = 0;
    while i < RuntimeKey::ALL.len() {
        let key = RuntimeKey::ALL[i];
        let mandatory = key.mandatory();
        let mut j = 0;
        while j < mandatory.len() {
            if contains(key.optional(), mandatory[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    table_is_disjoint(),
    "a backend is listed as both mandatory and optional for the same runtime key"
);

impl FromStr for RuntimeKey {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        Self::lookup(s)
    }
}

impl fmt::Display for RuntimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for RuntimeKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for RuntimeKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::lookup(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mandatory_and_optional_never_overlap() {
        assert!(table_is_disjoint());
        for key in RuntimeKey::ALL {
            for backend in key.mandatory() {
                assert!(
                    !key.optional().contains(backend),
                    "{key} lists {backend} as both mandatory and optional"
                );
            }
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let a = RuntimeKey::lookup("DOCKER").unwrap();
        let b = RuntimeKey::lookup("docker").unwrap();
        let c = RuntimeKey::lookup("Docker").unwrap();

        assert_eq!(a, RuntimeKey::Docker);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(
            RuntimeKey::lookup("BOOTDISKSIZEGB").unwrap(),
            RuntimeKey::BootDiskSizeGb
        );
    }

    #[test]
    fn lookup_folds_non_ascii_case() {
        assert_eq!(RuntimeKey::lookup("diſks").unwrap(), RuntimeKey::Disks);
        assert_eq!(RuntimeKey::lookup("DIS\u{212A}S").unwrap(), RuntimeKey::Disks);
        assert!(RuntimeKey::lookup("dissks").is_err());
        assert!(RuntimeKey::lookup("disk").is_err());
    }

    #[test]
    fn lookup_rejects_unknown_names_verbatim() {
        assert_eq!(
            RuntimeKey::lookup("bogusAttr"),
            Err(ModelError::UnrecognizedAttribute("bogusAttr".to_string()))
        );
        assert_eq!(
            RuntimeKey::lookup(" cpu"),
            Err(ModelError::UnrecognizedAttribute(" cpu".to_string()))
        );
        assert!(RuntimeKey::lookup("").is_err());
    }

    #[test]
    fn lookup_is_stable_across_calls() {
        for _ in 0..3 {
            assert_eq!(RuntimeKey::lookup("memory").unwrap(), RuntimeKey::Memory);
        }
    }

    #[test]
    fn every_key_roundtrips_through_its_name() {
        for key in RuntimeKey::ALL {
            assert_eq!(RuntimeKey::lookup(key.key()).unwrap(), key);
            assert_eq!(key.to_string().parse::<RuntimeKey>().unwrap(), key);
        }
    }

    #[test]
    fn docker_is_mandatory_on_jes_only() {
        let docker = RuntimeKey::Docker;

        assert!(docker.is_mandatory(BackendKind::Jes));
        assert!(!docker.is_optional(BackendKind::Jes));
        assert!(docker.is_optional(BackendKind::Local));
        assert!(!docker.supports(BackendKind::Sge));
        assert!(!docker.supports(BackendKind::Lsf));
    }

    #[test]
    fn cpu_is_a_jes_only_key() {
        assert!(!RuntimeKey::Cpu.supports(BackendKind::Local));
        assert!(RuntimeKey::Cpu.supports(BackendKind::Jes));
    }

    #[test]
    fn continue_on_return_code_is_optional_everywhere() {
        for backend in BackendKind::ALL {
            assert!(RuntimeKey::ContinueOnReturnCode.supports(backend));
            assert!(!RuntimeKey::ContinueOnReturnCode.is_mandatory(backend));
        }
    }

    #[test]
    fn table_matches_reference() {
        use BackendKind::*;

        let expected: [(&str, &[BackendKind], &[BackendKind]); 9] = [
            ("continueOnReturnCode", &[], &[Local, Sge, Jes, Lsf]),
            ("cpu", &[], &[Jes]),
            ("disks", &[], &[Jes]),
            ("zones", &[], &[Jes]),
            ("docker", &[Jes], &[Local]),
            ("failOnStderr", &[], &[Jes, Local, Sge, Lsf]),
            ("memory", &[], &[Jes]),
            ("preemptible", &[], &[Jes]),
            ("bootDiskSizeGb", &[], &[Jes]),
        ];

        for (key, (name, mandatory, optional)) in RuntimeKey::ALL.into_iter().zip(expected) {
            assert_eq!(key.key(), name);
            assert_eq!(key.mandatory(), mandatory, "mandatory set of {name}");
            assert_eq!(key.optional(), optional, "optional set of {name}");
        }
    }

    #[test]
    fn requirement_classifies_support() {
        assert_eq!(
            RuntimeKey::Docker.requirement(BackendKind::Jes),
            Some(Requirement::Mandatory)
        );
        assert_eq!(
            RuntimeKey::Docker.requirement(BackendKind::Local),
            Some(Requirement::Optional)
        );
        assert_eq!(RuntimeKey::Docker.requirement(BackendKind::Sge), None);
    }

    #[test]
    fn per_backend_views() {
        let local: Vec<_> = RuntimeKey::supported_on(BackendKind::Local).collect();
        assert_eq!(
            local,
            vec![
                RuntimeKey::ContinueOnReturnCode,
                RuntimeKey::Docker,
                RuntimeKey::FailOnStderr
            ]
        );

        assert_eq!(RuntimeKey::supported_on(BackendKind::Jes).count(), 9);

        let jes_mandatory: Vec<_> = RuntimeKey::mandatory_on(BackendKind::Jes).collect();
        assert_eq!(jes_mandatory, vec![RuntimeKey::Docker]);
        assert_eq!(RuntimeKey::mandatory_on(BackendKind::Sge).count(), 0);
    }

    #[test]
    fn serde_uses_canonical_name() {
        let json = serde_json::to_string(&RuntimeKey::FailOnStderr).unwrap();
        assert_eq!(json, r#""failOnStderr""#);

        let parsed: RuntimeKey = serde_json::from_str(r#""FAILONSTDERR""#).unwrap();
        assert_eq!(parsed, RuntimeKey::FailOnStderr);

        assert!(serde_json::from_str::<RuntimeKey>(r#""gpu""#).is_err());
    }
}
