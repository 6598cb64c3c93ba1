//! Authentication screen state

use academia_core::forms::{AuthForm, FieldId};

use super::{step, FormRow};

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub form: AuthForm,
    pub focus: usize,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            form: AuthForm::new(),
            focus: 0,
        }
    }

    /// Rows of the active view, in display order
    pub fn rows(&self) -> Vec<FormRow> {
        self.form
            .view()
            .fields()
            .iter()
            .map(|spec| match spec.id {
                FieldId::UserType => FormRow::UserType,
                id => FormRow::Text(id),
            })
            .collect()
    }

    pub fn focused_row(&self) -> Option<FormRow> {
        self.rows().get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        self.focus = step(self.focus, self.rows().len(), true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = step(self.focus, self.rows().len(), false);
    }

    /// Back to an empty login view
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
