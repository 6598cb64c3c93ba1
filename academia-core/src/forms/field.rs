//! Field values, their derived errors, and per-form field specs

use std::collections::BTreeMap;

/// Identifies an input across every form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    ConfirmPassword,
    UserType,
}

impl FieldId {
    /// Form key as used by the web payloads (`fullName`, `confirmPassword`, ...)
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::UserType => "userType",
        }
    }

    /// Masked when rendered
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// A single editable value plus its derived validation error
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    pub error: Option<&'static str>,
}

/// Validator over a field value; the whole field set is passed for cross-field rules
pub type Validator = fn(&str, &Fields) -> Option<&'static str>;

/// One entry of a form's configuration
#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub id: FieldId,
    pub required: bool,
    pub validate: Validator,
}

impl FieldSpec {
    pub const fn required(id: FieldId, validate: Validator) -> Self {
        Self {
            id,
            required: true,
            validate,
        }
    }

    pub const fn optional(id: FieldId, validate: Validator) -> Self {
        Self {
            id,
            required: false,
            validate,
        }
    }
}

impl std::fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSpec")
            .field("id", &self.id)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// Field storage shared by the form controllers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: BTreeMap<FieldId, FormField>,
}

impl Fields {
    /// Current value, or "" for a field that was never touched
    pub fn value(&self, id: FieldId) -> &str {
        self.entries.get(&id).map_or("", |f| f.value.as_str())
    }

    pub fn error(&self, id: FieldId) -> Option<&'static str> {
        self.entries.get(&id).and_then(|f| f.error)
    }

    pub(crate) fn set_value(&mut self, id: FieldId, value: String) {
        self.entries.entry(id).or_default().value = value;
    }

    pub(crate) fn set_error(&mut self, id: FieldId, error: Option<&'static str>) {
        self.entries.entry(id).or_default().error = error;
    }

    /// Recompute the error of every field in `specs` from its latest value
    pub(crate) fn revalidate(&mut self, specs: &[FieldSpec]) {
        for spec in specs {
            let error = (spec.validate)(self.value(spec.id), self);
            self.set_error(spec.id, error);
        }
    }

    /// Conjunction over `specs` only: required fields are non-empty and nothing reports an error
    pub fn is_valid(&self, specs: &[FieldSpec]) -> bool {
        specs
            .iter()
            .all(|spec| !(spec.required && self.is_missing(spec.id)) && self.error(spec.id).is_none())
    }

    /// Secrets are sent as typed, so only an empty string counts; other values are trimmed first
    fn is_missing(&self, id: FieldId) -> bool {
        let value = self.value(id);
        if id.is_secret() {
            value.is_empty()
        } else {
            value.trim().is_empty()
        }
    }

    /// Trimmed value, `None` when blank
    pub fn trimmed(&self, id: FieldId) -> Option<String> {
        let value = self.value(id).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
