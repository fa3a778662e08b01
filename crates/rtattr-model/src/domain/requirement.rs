use std::fmt;

use serde::{Deserialize, Serialize};

/// How a backend treats a runtime key it recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Requirement {
    /// The key must be present for a task to be valid on the backend.
    Mandatory,
    /// The key is accepted but not required.
    Optional,
}

impl Requirement {
    /// Returns `true` for [`Requirement::Mandatory`].
    pub const fn is_mandatory(&self) -> bool {
        matches!(self, Requirement::Mandatory)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Requirement::Mandatory => "mandatory",
            Requirement::Optional => "optional",
        };
        f.write_str(s)
    }
}
