use thiserror::Error;

use rtattr_model::{BackendKind, ModelError, RuntimeKey};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("runtime attributes not supported by backend {backend}: {}", join_keys(.keys))]
    Unsupported {
        backend: BackendKind,
        keys: Vec<RuntimeKey>,
    },

    #[error("missing mandatory runtime attributes for backend {backend}: {}", join_keys(.keys))]
    MissingMandatory {
        backend: BackendKind,
        keys: Vec<RuntimeKey>,
    },
}

pub type CoreResult<T> = Result<T, CoreError>;

fn join_keys(keys: &[RuntimeKey]) -> String {
    keys.iter()
        .map(|k| k.key())
        .collect::<Vec<_>>()
        .join(", ")
}
