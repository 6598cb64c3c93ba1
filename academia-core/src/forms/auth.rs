//! Login / register / forgot-password view-state controller
//!
//! One parameterized form: each [`AuthView`] carries a static field table
//! (which inputs are shown, which are required, which validator runs), and
//! the submit action is chosen by the active view.

use crate::error::{CoreError, CoreResult};
use crate::forms::field::{FieldId, FieldSpec, Fields};
use crate::types::{CreateUserRequest, Role, RoleMap};
use crate::validation;

/// Authentication screen mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthView {
    #[default]
    Login,
    Register,
    Forgot,
}

const LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(FieldId::Username, |v, _| validation::validate_username(v)),
    FieldSpec::required(FieldId::Password, |v, _| validation::validate_password(v)),
];

const REGISTER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required(FieldId::FullName, |v, _| validation::validate_name(v)),
    FieldSpec::required(FieldId::Username, |v, _| validation::validate_username(v)),
    FieldSpec::required(FieldId::Password, |v, _| validation::validate_password(v)),
    FieldSpec::required(FieldId::ConfirmPassword, |v, f| {
        validation::validate_confirm_password(v, f.value(FieldId::Password))
    }),
    FieldSpec::required(FieldId::UserType, |v, _| validation::validate_user_type(v)),
];

const FORGOT_FIELDS: &[FieldSpec] = &[FieldSpec::required(FieldId::Username, |v, _| {
    validation::validate_username(v)
})];

impl AuthView {
    /// Active field set, in display order
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Login => LOGIN_FIELDS,
            Self::Register => REGISTER_FIELDS,
            Self::Forgot => FORGOT_FIELDS,
        }
    }
}

/// What the shell should do with a valid submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Enter the dashboard as `identifier`
    Login { identifier: String, password: String },
    /// `POST /users`
    Register(CreateUserRequest),
    /// Password-reset request (not wired to the API yet)
    RequestReset { identifier: String },
}

/// Form view-state controller for the authentication screen
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    view: AuthView,
    fields: Fields,
    submitting: bool,
    success: bool,
    submit_error: Option<String>,
}

impl AuthForm {
    pub fn new() -> Self {
        let mut form = Self::default();
        form.fields.revalidate(form.view.fields());
        form
    }

    pub fn view(&self) -> AuthView {
        self.view
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.fields.value(id)
    }

    pub fn error(&self, id: FieldId) -> Option<&'static str> {
        self.fields.error(id)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn succeeded(&self) -> bool {
        self.success
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    // ===== view transitions =====

    /// "Create account" link
    pub fn go_to_register(&mut self) {
        self.switch_view(AuthView::Register);
    }

    /// "Forgot password" link
    pub fn go_to_forgot(&mut self) {
        self.switch_view(AuthView::Forgot);
    }

    /// Back arrow
    pub fn back_to_login(&mut self) {
        self.switch_view(AuthView::Login);
    }

    fn switch_view(&mut self, view: AuthView) {
        self.view = view;
        self.success = false;
        self.submit_error = None;
        self.fields.revalidate(view.fields());
    }

    // ===== editing =====

    /// Replace a field value; all errors of the active view are recomputed
    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        self.fields.set_value(id, value.into());
        self.fields.revalidate(self.view.fields());
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

    /// Step the user-type selector through the role table
    pub fn cycle_user_type(&mut self, forward: bool) {
        let next = match Role::from_key(self.fields.value(FieldId::UserType)) {
            Ok(role) if forward => role.next(),
            Ok(role) => role.prev(),
            Err(_) => Role::Estudiante,
        };
        self.set(FieldId::UserType, next.key());
    }

    // ===== submission =====

    pub fn is_valid(&self) -> bool {
        self.fields.is_valid(self.view.fields())
    }

    pub fn submit_disabled(&self) -> bool {
        !self.is_valid() || self.submitting
    }

    /// Decide which action fires; nothing fires while the form is invalid or busy
    pub fn submit(&self) -> CoreResult<SubmitAction> {
        if self.submitting {
            return Err(CoreError::Validation(
                "A submission is already in progress".to_string(),
            ));
        }
        if !self.is_valid() {
            return Err(CoreError::Validation(
                "Form has empty required fields or errors".to_string(),
            ));
        }

        let identifier = self.fields.value(FieldId::Username).trim().to_string();
        match self.view {
            AuthView::Login => Ok(SubmitAction::Login {
                identifier,
                password: self.fields.value(FieldId::Password).to_string(),
            }),
            AuthView::Register => self.register_request(identifier).map(SubmitAction::Register),
            AuthView::Forgot => Ok(SubmitAction::RequestReset { identifier }),
        }
    }

    fn register_request(&self, username: String) -> CoreResult<CreateUserRequest> {
        let role_id = RoleMap::id_for(self.fields.value(FieldId::UserType))?;
        let (firstname, lastname) = split_full_name(self.fields.value(FieldId::FullName));
        let email = validation::is_valid_email(&username).then(|| username.clone());

        Ok(CreateUserRequest {
            username,
            password: self.fields.value(FieldId::Password).to_string(),
            email,
            firstname,
            lastname,
            role_id,
            state: None,
        })
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.success = false;
        self.submit_error = None;
    }

    /// Record the outcome of the in-flight request
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.submitting = false;
        match outcome {
            Ok(()) => self.success = true,
            Err(message) => self.submit_error = Some(message),
        }
    }

    /// Clear all values (used on logout)
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Split at the first whitespace: "Ana María López" → ("Ana", "María López")
fn split_full_name(full_name: &str) -> (Option<String>, Option<String>) {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return (None, None);
    }
    match full_name.split_once(char::is_whitespace) {
        Some((first, rest)) => {
            let rest = rest.trim();
            (
                Some(first.to_string()),
                (!rest.is_empty()).then(|| rest.to_string()),
            )
        }
        None => (Some(full_name.to_string()), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{PASSWORD_MISMATCH, USERNAME_TOO_SHORT, USER_TYPE_REQUIRED};

    fn filled_register() -> AuthForm {
        let mut form = AuthForm::new();
        form.go_to_register();
        form.set(FieldId::FullName, "Al");
        form.set(FieldId::Username, "alonso");
        form.set(FieldId::Password, "1234");
        form.set(FieldId::ConfirmPassword, "1234");
        form.set(FieldId::UserType, "estudiante");
        form
    }

    #[test]
    fn login_short_username_disables_submit() {
        let mut form = AuthForm::new();
        form.set(FieldId::Username, "ab");
        assert_eq!(form.error(FieldId::Username), Some(USERNAME_TOO_SHORT));
        assert!(form.submit_disabled());
        assert!(form.submit().is_err());
    }

    #[test]
    fn register_scenario_is_valid() {
        let form = filled_register();
        assert!(form.is_valid());
        assert!(!form.submit_disabled());
    }

    #[test]
    fn disabled_iff_required_empty_or_error() {
        let mut form = AuthForm::new();
        assert!(form.submit_disabled());
        form.set(FieldId::Username, "alonso");
        assert!(form.submit_disabled());
        form.set(FieldId::Password, "123");
        assert!(form.submit_disabled());
        form.set(FieldId::Password, "1234");
        assert!(!form.submit_disabled());
        form.set(FieldId::Username, "");
        assert!(form.submit_disabled());
    }

    #[test]
    fn whitespace_password_enables_login() {
        let mut form = AuthForm::new();
        form.set(FieldId::Username, "alonso");
        form.set(FieldId::Password, "    ");
        assert_eq!(form.error(FieldId::Password), None);
        assert!(!form.submit_disabled());
    }

    #[test]
    fn inactive_fields_do_not_gate_submission() {
        let mut form = AuthForm::new();
        form.set(FieldId::FullName, "A");
        form.set(FieldId::Username, "alonso");
        form.set(FieldId::Password, "1234");
        assert!(form.is_valid());

        form.go_to_forgot();
        form.set(FieldId::Password, "1");
        assert!(form.is_valid());
    }

    #[test]
    fn confirm_is_recomputed_when_password_changes() {
        let mut form = filled_register();
        form.set(FieldId::Password, "12345");
        assert_eq!(form.error(FieldId::ConfirmPassword), Some(PASSWORD_MISMATCH));
        form.set(FieldId::ConfirmPassword, "12345");
        assert_eq!(form.error(FieldId::ConfirmPassword), None);
    }

    #[test]
    fn user_type_must_be_selected() {
        let mut form = filled_register();
        form.set(FieldId::UserType, "");
        assert_eq!(form.error(FieldId::UserType), Some(USER_TYPE_REQUIRED));
        assert!(!form.is_valid());
        form.cycle_user_type(true);
        assert_eq!(form.value(FieldId::UserType), "estudiante");
        form.cycle_user_type(true);
        assert_eq!(form.value(FieldId::UserType), "admin");
    }

    #[test]
    fn transitions_are_explicit() {
        let mut form = AuthForm::new();
        assert_eq!(form.view(), AuthView::Login);
        form.go_to_register();
        assert_eq!(form.view(), AuthView::Register);
        form.back_to_login();
        assert_eq!(form.view(), AuthView::Login);
        form.go_to_forgot();
        assert_eq!(form.view(), AuthView::Forgot);
    }

    #[test]
    fn submit_routes_by_view() {
        let mut form = AuthForm::new();
        form.set(FieldId::Username, " alonso ");
        form.set(FieldId::Password, "1234");
        // whitespace fails the username rule before anything is sent
        assert!(form.submit().is_err());
        form.set(FieldId::Username, "alonso");
        assert_eq!(
            form.submit(),
            Ok(SubmitAction::Login {
                identifier: "alonso".to_string(),
                password: "1234".to_string()
            })
        );

        form.go_to_forgot();
        assert_eq!(
            form.submit(),
            Ok(SubmitAction::RequestReset {
                identifier: "alonso".to_string()
            })
        );
    }

    #[test]
    fn register_builds_create_request() {
        let mut form = filled_register();
        form.set(FieldId::FullName, "Ana María López");
        form.set(FieldId::UserType, "docente");
        let Ok(SubmitAction::Register(request)) = form.submit() else {
            panic!("expected a register action");
        };
        assert_eq!(request.username, "alonso");
        assert_eq!(request.firstname.as_deref(), Some("Ana"));
        assert_eq!(request.lastname.as_deref(), Some("María López"));
        assert_eq!(request.role_id, 3);
        assert_eq!(request.email, None);
    }

    #[test]
    fn register_with_email_identifier_sends_email() {
        let mut form = filled_register();
        form.set(FieldId::Username, "ana@uni.edu");
        let Ok(SubmitAction::Register(request)) = form.submit() else {
            panic!("expected a register action");
        };
        assert_eq!(request.email.as_deref(), Some("ana@uni.edu"));
        assert_eq!(request.lastname, None);
    }

    #[test]
    fn submitting_flag_blocks_resubmission() {
        let mut form = filled_register();
        form.begin_submit();
        assert!(form.submit_disabled());
        assert!(form.submit().is_err());
        form.finish_submit(Err("Usuario ya existe".to_string()));
        assert!(!form.submit_disabled());
        assert_eq!(form.submit_error(), Some("Usuario ya existe"));
        // values survive a failed request
        assert_eq!(form.value(FieldId::Username), "alonso");
    }
}
