//! Field validators
//!
//! Every validator is a pure function from the raw input to an optional error
//! message. An empty value never produces an error: required-ness is checked
//! separately by the form's validity check.

use std::sync::LazyLock;

use regex::Regex;

pub const USERNAME_SPACES: &str = "Este campo no puede contener espacios";
pub const USERNAME_TOO_SHORT: &str = "Este campo debe tener al menos 3 caracteres";
pub const PASSWORD_TOO_SHORT: &str = "Este campo debe tener al menos 4 caracteres";
pub const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden";
pub const NAME_TOO_SHORT: &str = "El nombre debe tener al menos 2 caracteres";
pub const NAME_TOO_LONG: &str = "El nombre no puede tener más de 50 caracteres";
pub const EMAIL_INVALID: &str = "Email inválido";
pub const USER_TYPE_REQUIRED: &str = "Selecciona un tipo de usuario";

const USERNAME_MIN: usize = 3;
const PASSWORD_MIN: usize = 4;
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_username(value: &str) -> Option<&'static str> {
    if value.chars().any(char::is_whitespace) {
        Some(USERNAME_SPACES)
    } else if !value.is_empty() && char_len(value) < USERNAME_MIN {
        Some(USERNAME_TOO_SHORT)
    } else {
        None
    }
}

pub fn validate_password(value: &str) -> Option<&'static str> {
    if !value.is_empty() && char_len(value) < PASSWORD_MIN {
        Some(PASSWORD_TOO_SHORT)
    } else {
        None
    }
}

/// Cross-field rule: re-run whenever either password field changes
pub fn validate_confirm_password(confirm: &str, password: &str) -> Option<&'static str> {
    if !confirm.is_empty() && confirm != password {
        Some(PASSWORD_MISMATCH)
    } else {
        None
    }
}

/// Shared by full name, first name and last name
pub fn validate_name(value: &str) -> Option<&'static str> {
    let len = char_len(value);
    if len > NAME_MAX {
        Some(NAME_TOO_LONG)
    } else if len > 0 && len < NAME_MIN {
        Some(NAME_TOO_SHORT)
    } else {
        None
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_email(value: &str) -> Option<&'static str> {
    if !value.is_empty() && !is_valid_email(value) {
        Some(EMAIL_INVALID)
    } else {
        None
    }
}

/// The only rule is that a type was chosen
pub fn validate_user_type(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(USER_TYPE_REQUIRED)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_with_whitespace_always_errors() {
        for value in [" ", "a b", "alonso ", "\tx", "long user name", "a\nb"] {
            assert_eq!(validate_username(value), Some(USERNAME_SPACES), "{value:?}");
        }
    }

    #[test]
    fn username_length_rules() {
        assert_eq!(validate_username(""), None);
        assert_eq!(validate_username("a"), Some(USERNAME_TOO_SHORT));
        assert_eq!(validate_username("ab"), Some(USERNAME_TOO_SHORT));
        assert_eq!(validate_username("abc"), None);
        assert_eq!(validate_username("alonso_garcia_1990"), None);
        // counted in characters, not bytes
        assert_eq!(validate_username("ñé"), Some(USERNAME_TOO_SHORT));
        assert_eq!(validate_username("ñéü"), None);
    }

    #[test]
    fn password_length_rules() {
        assert_eq!(validate_password(""), None);
        assert_eq!(validate_password("123"), Some(PASSWORD_TOO_SHORT));
        assert_eq!(validate_password("1234"), None);
    }

    #[test]
    fn confirm_password_rules() {
        for p in ["1234", "secret", "contraseña"] {
            assert_eq!(validate_confirm_password(p, p), None);
        }
        assert_eq!(validate_confirm_password("1235", "1234"), Some(PASSWORD_MISMATCH));
        assert_eq!(validate_confirm_password("x", ""), Some(PASSWORD_MISMATCH));
        assert_eq!(validate_confirm_password("", "1234"), None);
    }

    #[test]
    fn name_range() {
        assert_eq!(validate_name(""), None);
        assert_eq!(validate_name("A"), Some(NAME_TOO_SHORT));
        assert_eq!(validate_name("Al"), None);
        assert_eq!(validate_name(&"a".repeat(50)), None);
        assert_eq!(validate_name(&"a".repeat(51)), Some(NAME_TOO_LONG));
    }

    #[test]
    fn email_format() {
        assert_eq!(validate_email(""), None);
        assert_eq!(validate_email("ana@uni.edu"), None);
        assert_eq!(validate_email("ana@uni"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("ana uni@x.com"), Some(EMAIL_INVALID));
        assert_eq!(validate_email("@x.com"), Some(EMAIL_INVALID));
        assert!(is_valid_email("a.b@c.d"));
        assert!(!is_valid_email("alonso"));
    }

    #[test]
    fn user_type_must_be_chosen() {
        assert_eq!(validate_user_type(""), Some(USER_TYPE_REQUIRED));
        assert_eq!(validate_user_type("docente"), None);
    }
}
