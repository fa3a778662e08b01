mod backend;
pub use backend::BackendKind;

mod runtime_key;
pub use runtime_key::RuntimeKey;
