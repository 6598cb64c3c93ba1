//! Admin "create user" page state

use academia_core::forms::{FieldId, UserCreateForm};

use super::{step, FormRow};

const ROWS: &[FormRow] = &[
    FormRow::Text(FieldId::FirstName),
    FormRow::Text(FieldId::LastName),
    FormRow::Text(FieldId::Username),
    FormRow::Text(FieldId::Email),
    FormRow::Text(FieldId::Password),
    FormRow::Text(FieldId::ConfirmPassword),
    FormRow::UserType,
    FormRow::State,
];

#[derive(Debug, Clone, Default)]
pub struct CreateUserState {
    pub form: UserCreateForm,
    pub focus: usize,
}

impl CreateUserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows() -> &'static [FormRow] {
        ROWS
    }

    pub fn focused_row(&self) -> Option<FormRow> {
        ROWS.get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        self.focus = step(self.focus, ROWS.len(), true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = step(self.focus, ROWS.len(), false);
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_cover_every_text_field() {
        let text: Vec<FieldId> = ROWS
            .iter()
            .filter_map(|row| match row {
                FormRow::Text(id) => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(text, UserCreateForm::text_fields().collect::<Vec<_>>());
    }
}
