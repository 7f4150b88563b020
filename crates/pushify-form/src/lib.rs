#![doc = include_str!("../README.md")]

mod error;
pub use error::FormContextError;
mod field_state;
pub use field_state::{FieldError, FieldState, FormController};
mod form;
pub use form::{Form, FormFieldState, FormScope};
