//! Admin "create user" form

use crate::error::{CoreError, CoreResult};
use crate::forms::field::{FieldId, FieldSpec, Fields};
use crate::types::{CreateUserRequest, Role, UserState};
use crate::validation;

const CREATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(FieldId::FirstName, |v, _| validation::validate_name(v)),
    FieldSpec::required(FieldId::LastName, |v, _| validation::validate_name(v)),
    FieldSpec::required(FieldId::Username, |v, _| validation::validate_username(v)),
    FieldSpec::required(FieldId::Email, |v, _| validation::validate_email(v)),
    FieldSpec::required(FieldId::Password, |v, _| validation::validate_password(v)),
    FieldSpec::required(FieldId::ConfirmPassword, |v, f| {
        validation::validate_confirm_password(v, f.value(FieldId::Password))
    }),
];

#[derive(Debug, Clone, Default)]
pub struct UserCreateForm {
    fields: Fields,
    user_type: Role,
    /// `None` lets the backend pick its default state
    state: Option<UserState>,
    submitting: bool,
}

impl UserCreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text inputs in display order
    pub fn text_fields() -> impl Iterator<Item = FieldId> {
        CREATE_FIELDS.iter().map(|spec| spec.id)
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.fields.value(id)
    }

    pub fn error(&self, id: FieldId) -> Option<&'static str> {
        self.fields.error(id)
    }

    pub fn user_type(&self) -> Role {
        self.user_type
    }

    pub fn state(&self) -> Option<UserState> {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Email is trimmed as it is typed
    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        let mut value = value.into();
        if id == FieldId::Email {
            value = value.trim().to_string();
        }
        self.fields.set_value(id, value);
        self.fields.revalidate(CREATE_FIELDS);
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

    pub fn cycle_user_type(&mut self, forward: bool) {
        self.user_type = if forward {
            self.user_type.next()
        } else {
            self.user_type.prev()
        };
    }

    /// Unset → Active → Inactive → Suspended → unset
    pub fn cycle_state(&mut self, forward: bool) {
        self.state = match (self.state, forward) {
            (None, true) => Some(UserState::Active),
            (None, false) => Some(UserState::Suspended),
            (Some(UserState::Suspended), true) | (Some(UserState::Active), false) => None,
            (Some(state), true) => Some(state.next()),
            (Some(state), false) => Some(state.prev()),
        };
    }

    pub fn is_valid(&self) -> bool {
        self.fields.is_valid(CREATE_FIELDS)
    }

    pub fn submit_disabled(&self) -> bool {
        !self.is_valid() || self.submitting
    }

    pub fn build_request(&self) -> CoreResult<CreateUserRequest> {
        if !self.is_valid() {
            let message = CREATE_FIELDS
                .iter()
                .find_map(|spec| self.fields.error(spec.id))
                .unwrap_or("Completa todos los campos obligatorios");
            return Err(CoreError::Validation(message.to_string()));
        }

        Ok(CreateUserRequest {
            username: self.fields.value(FieldId::Username).trim().to_string(),
            password: self.fields.value(FieldId::Password).to_string(),
            email: self.fields.trimmed(FieldId::Email),
            firstname: self.fields.trimmed(FieldId::FirstName),
            lastname: self.fields.trimmed(FieldId::LastName),
            role_id: self.user_type.id(),
            state: self.state,
        })
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
    }

    /// A successful create clears the form; a failed one keeps every value
    pub fn finish_submit(&mut self, created: bool) {
        self.submitting = false;
        if created {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.fields.clear();
        self.user_type = Role::default();
        self.state = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{EMAIL_INVALID, NAME_TOO_SHORT};

    fn filled() -> UserCreateForm {
        let mut form = UserCreateForm::new();
        form.set(FieldId::FirstName, "Ana");
        form.set(FieldId::LastName, "López");
        form.set(FieldId::Username, "alopez");
        form.set(FieldId::Email, "  ana@uni.edu ");
        form.set(FieldId::Password, "1234");
        form.set(FieldId::ConfirmPassword, "1234");
        form
    }

    #[test]
    fn complete_form_builds_request() {
        let mut form = filled();
        form.cycle_user_type(true);
        let request = form.build_request().unwrap();
        assert_eq!(request.email.as_deref(), Some("ana@uni.edu"));
        assert_eq!(request.role_id, 2);
        assert_eq!(request.state, None);
        assert_eq!(request.firstname.as_deref(), Some("Ana"));
    }

    #[test]
    fn defaults_to_student() {
        assert_eq!(UserCreateForm::new().user_type(), Role::Estudiante);
        assert_eq!(filled().build_request().unwrap().role_id, 1);
    }

    #[test]
    fn empty_required_field_blocks_submit() {
        let mut form = filled();
        form.set(FieldId::LastName, "");
        assert!(form.submit_disabled());
        assert!(matches!(form.build_request(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn field_errors_are_reported() {
        let mut form = filled();
        form.set(FieldId::FirstName, "A");
        form.set(FieldId::Email, "ana@uni");
        assert_eq!(form.error(FieldId::FirstName), Some(NAME_TOO_SHORT));
        assert_eq!(form.error(FieldId::Email), Some(EMAIL_INVALID));
        assert_eq!(
            form.build_request(),
            Err(CoreError::Validation(NAME_TOO_SHORT.to_string()))
        );
    }

    #[test]
    fn state_cycles_through_unset() {
        let mut form = UserCreateForm::new();
        form.cycle_state(true);
        assert_eq!(form.state(), Some(UserState::Active));
        form.cycle_state(false);
        assert_eq!(form.state(), None);
        form.cycle_state(false);
        assert_eq!(form.state(), Some(UserState::Suspended));
        form.cycle_state(true);
        assert_eq!(form.state(), None);
    }

    #[test]
    fn success_resets_failure_keeps() {
        let mut form = filled();
        form.begin_submit();
        form.finish_submit(false);
        assert_eq!(form.value(FieldId::Username), "alopez");
        form.begin_submit();
        form.finish_submit(true);
        assert_eq!(form.value(FieldId::Username), "");
        assert!(!form.is_submitting());
    }
}
