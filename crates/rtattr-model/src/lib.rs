mod domain;
pub use domain::Requirement;

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::{BackendKind, RuntimeKey};
