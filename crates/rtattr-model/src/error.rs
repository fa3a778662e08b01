use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("runtime attribute {0} is not valid")]
    UnrecognizedAttribute(String),

    #[error("unknown backend kind: {0}")]
    UnknownBackend(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
