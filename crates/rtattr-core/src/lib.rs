pub mod error;
pub mod validator;

pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::validator::{AttributeValidator, ValidatedAttributes};
}
