use serde::{Deserialize, Serialize};

/// Access to the state kept by the host form library.
pub trait FormController {
    /// Current validation state of the field registered under `name`.
    fn field_state(&self, name: &str) -> FieldState;
}

impl<T: FormController + ?Sized> FormController for &T {
    fn field_state(&self, name: &str) -> FieldState {
        (**self).field_state(name)
    }
}

impl<T: FormController + ?Sized> FormController for std::sync::Arc<T> {
    fn field_state(&self, name: &str) -> FieldState {
        (**self).field_state(name)
    }
}

/// Validation state of a single field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldState {
    /// The field currently fails validation.
    pub invalid: bool,
    /// The value differs from the default value.
    pub is_dirty: bool,
    /// The field has been focused and blurred.
    pub is_touched: bool,
    /// Validation is running.
    pub is_validating: bool,
    /// The first validation error, if any.
    pub error: Option<FieldError>,
}

/// A validation failure reported for a field.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: Option<String>,
}
