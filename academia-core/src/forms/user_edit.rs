//! Admin edit form, seeded from a [`UserRecord`]

use crate::error::{CoreError, CoreResult};
use crate::forms::field::{FieldId, FieldSpec, Fields};
use crate::types::{Role, RoleMap, UpdateUserRequest, UserRecord, UserState};

pub const USERNAME_TOO_SHORT: &str = "El nombre de usuario debe tener al menos 3 caracteres";
pub const IDENTIFIER_REQUIRED: &str = "Debes ingresar username o email";

const EDIT_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional(FieldId::Username, |v, _| {
        let v = v.trim();
        (!v.is_empty() && v.chars().count() < 3).then_some(USERNAME_TOO_SHORT)
    }),
    FieldSpec::optional(FieldId::Email, |_, _| None),
    FieldSpec::optional(FieldId::Password, |_, _| None),
    FieldSpec::optional(FieldId::FirstName, |_, _| None),
    FieldSpec::optional(FieldId::LastName, |_, _| None),
];

/// Detail step of the list → edit flow
#[derive(Debug, Clone)]
pub struct UserEditForm {
    id: Option<i64>,
    fields: Fields,
    state: UserState,
    role_id: i64,
    /// Form-level rule: username or email must be present
    form_error: Option<&'static str>,
    submitting: bool,
}

impl Default for UserEditForm {
    fn default() -> Self {
        Self {
            id: None,
            fields: Fields::default(),
            state: UserState::default(),
            role_id: Role::Estudiante.id(),
            form_error: None,
            submitting: false,
        }
    }
}

impl UserEditForm {
    /// Text inputs in display order
    pub const TEXT_FIELDS: &'static [FieldId] = &[
        FieldId::Username,
        FieldId::Email,
        FieldId::Password,
        FieldId::FirstName,
        FieldId::LastName,
    ];

    /// Pre-fill from the picked record; the password always starts blank
    pub fn from_record(record: &UserRecord) -> Self {
        let mut form = Self {
            id: Some(record.id),
            state: record.state,
            role_id: record.role_id,
            ..Self::default()
        };
        let seed = [
            (FieldId::Username, Some(record.username.as_str())),
            (FieldId::Email, record.email.as_deref()),
            (FieldId::FirstName, record.firstname.as_deref()),
            (FieldId::LastName, record.lastname.as_deref()),
        ];
        for (id, value) in seed {
            form.fields
                .set_value(id, value.unwrap_or_default().to_string());
        }
        form.revalidate();
        form
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.fields.value(id)
    }

    pub fn error(&self, id: FieldId) -> Option<&'static str> {
        self.fields.error(id)
    }

    pub fn form_error(&self) -> Option<&'static str> {
        self.form_error
    }

    pub fn state(&self) -> UserState {
        self.state
    }

    pub fn role_id(&self) -> i64 {
        self.role_id
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        self.fields.set_value(id, value.into());
        self.revalidate();
    }

    pub fn push_char(&mut self, id: FieldId, c: char) {
        let mut value = self.fields.value(id).to_string();
        value.push(c);
        self.set(id, value);
    }

    pub fn pop_char(&mut self, id: FieldId) {
        let mut value = self.fields.value(id).to_string();
        value.pop();
        self.set(id, value);
    }

    pub fn cycle_state(&mut self, forward: bool) {
        self.state = if forward {
            self.state.next()
        } else {
            self.state.prev()
        };
    }

    /// Step through the role table; an unknown role id restarts at the first role
    pub fn cycle_role(&mut self, forward: bool) {
        let next = match Role::from_id(self.role_id) {
            Ok(role) if forward => role.next(),
            Ok(role) => role.prev(),
            Err(_) => Role::Estudiante,
        };
        self.role_id = next.id();
    }

    fn revalidate(&mut self) {
        self.fields.revalidate(EDIT_FIELDS);
        let has_identifier = !(self.fields.value(FieldId::Username).trim().is_empty()
            && self.fields.value(FieldId::Email).trim().is_empty());
        self.form_error = (!has_identifier).then_some(IDENTIFIER_REQUIRED);
    }

    pub fn is_valid(&self) -> bool {
        self.form_error.is_none() && self.fields.is_valid(EDIT_FIELDS)
    }

    /// Partial update scoped to the record id
    ///
    /// A blank password is left out ("keep current"); `roleId` becomes `roles: [name]`.
    pub fn build_update(&self) -> CoreResult<UpdateUserRequest> {
        let id = self.id.ok_or(CoreError::MissingUserId)?;
        if let Some(message) = self
            .form_error
            .or_else(|| self.fields.error(FieldId::Username))
        {
            return Err(CoreError::Validation(message.to_string()));
        }

        let password = self.fields.value(FieldId::Password);
        Ok(UpdateUserRequest {
            id,
            username: self.fields.trimmed(FieldId::Username),
            email: self.fields.trimmed(FieldId::Email),
            password: (!password.trim().is_empty()).then(|| password.to_string()),
            firstname: self.fields.trimmed(FieldId::FirstName),
            lastname: self.fields.trimmed(FieldId::LastName),
            state: Some(self.state),
            roles: RoleMap::roles_for(self.role_id)?,
        })
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
    }

    /// Edits are kept either way; the caller decides whether to close the form
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
