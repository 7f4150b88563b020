use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::{FieldState, FormContextError, FormController};

/// Provides a [FormController] to every scope created from it.
pub struct Form<C> {
    controller: C,
    next_item_id: AtomicU64,
}

impl<C: FormController> Form<C> {
    #[allow(missing_docs)]
    pub fn new(controller: C) -> Self {
        Self {
            controller,
            next_item_id: AtomicU64::new(0),
        }
    }

    /// The root scope. It carries neither a field name nor an item id.
    pub fn scope(&self) -> FormScope<'_, C> {
        FormScope {
            form: self,
            name: None,
            item_id: None,
        }
    }

    fn generate_item_id(&self) -> String {
        let n = self.next_item_id.fetch_add(1, Ordering::Relaxed);
        format!("pf-{n}")
    }
}

/// A position in the component tree of a form.
///
/// Scopes are cheap values; nesting creates a new scope that inherits everything from its parent
/// and overrides the field name or item id.
pub struct FormScope<'a, C> {
    form: &'a Form<C>,
    name: Option<String>,
    item_id: Option<String>,
}

impl<C> Clone for FormScope<'_, C> {
    fn clone(&self) -> Self {
        Self {
            form: self.form,
            name: self.name.clone(),
            item_id: self.item_id.clone(),
        }
    }
}

impl<C: FormController> FormScope<'_, C> {
    /// Nested scope for the field registered under `name`.
    pub fn field(&self, name: impl Into<String>) -> Self {
        Self {
            form: self.form,
            name: Some(name.into()),
            item_id: self.item_id.clone(),
        }
    }

    /// Nested scope with a freshly generated item id, unique within the form.
    pub fn item(&self) -> Self {
        Self {
            form: self.form,
            name: self.name.clone(),
            item_id: Some(self.form.generate_item_id()),
        }
    }

    /// Field name and item id of this scope, with the field's current state and the derived
    /// accessibility identifiers.
    pub fn form_field(&self) -> Result<FormFieldState, FormContextError> {
        let name = self
            .name
            .as_ref()
            .ok_or(FormContextError::OutsideFormField)?;
        let id = self
            .item_id
            .as_ref()
            .ok_or(FormContextError::OutsideFormItem)?;

        Ok(FormFieldState {
            form_item_id: format!("{id}-form-item"),
            form_description_id: format!("{id}-form-item-description"),
            form_message_id: format!("{id}-form-item-message"),
            state: self.form.controller.field_state(name),
            id: id.clone(),
            name: name.clone(),
        })
    }
}

#[allow(missing_docs)]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldState {
    pub id: String,
    pub name: String,
    pub form_item_id: String,
    pub form_description_id: String,
    pub form_message_id: String,
    #[serde(flatten)]
    pub state: FieldState,
}
