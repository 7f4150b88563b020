use thiserror::Error;

#[allow(missing_docs)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormContextError {
    #[error("form_field should be used within a form field scope")]
    OutsideFormField,
    #[error("form_field should be used within a form item scope")]
    OutsideFormItem,
}
