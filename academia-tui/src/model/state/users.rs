//! "Manage users" page state: list step plus the edit detail step

use academia_core::forms::{FieldId, UserEditForm};
use academia_core::types::UserRecord;

use super::{step, FormRow};

const EDIT_ROWS: &[FormRow] = &[
    FormRow::Text(FieldId::Username),
    FormRow::Text(FieldId::Email),
    FormRow::Text(FieldId::Password),
    FormRow::Text(FieldId::FirstName),
    FormRow::Text(FieldId::LastName),
    FormRow::State,
    FormRow::Role,
];

/// Open edit form
#[derive(Debug, Clone)]
pub struct EditState {
    pub form: UserEditForm,
    pub focus: usize,
}

impl EditState {
    pub fn new(record: &UserRecord) -> Self {
        Self {
            form: UserEditForm::from_record(record),
            focus: 0,
        }
    }

    pub fn rows() -> &'static [FormRow] {
        EDIT_ROWS
    }

    pub fn focused_row(&self) -> Option<FormRow> {
        EDIT_ROWS.get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        self.focus = step(self.focus, EDIT_ROWS.len(), true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = step(self.focus, EDIT_ROWS.len(), false);
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsersState {
    pub users: Vec<UserRecord>,
    pub selected: usize,
    pub loading: bool,
    /// Detail step; `None` shows the list
    pub edit: Option<EditState>,
}

impl UsersState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection, keeping the selection in range
    pub fn set_users(&mut self, users: Vec<UserRecord>) {
        self.users = users;
        self.loading = false;
        self.selected = self.selected.min(self.users.len().saturating_sub(1));
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < self.users.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.users.len().saturating_sub(1);
    }

    pub fn selected_user(&self) -> Option<&UserRecord> {
        self.users.get(self.selected)
    }

    /// Seed the edit form from the picked record
    pub fn open_selected(&mut self) -> bool {
        match self.selected_user() {
            Some(record) => {
                self.edit = Some(EditState::new(record));
                true
            }
            None => false,
        }
    }

    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }
}
