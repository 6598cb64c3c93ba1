//! Per-screen state
//!
//! Each form keeps its own focus index over a fixed list of [`FormRow`]s;
//! the values and validation live in the `academia-core` form controllers.

mod auth;
mod create_user;
mod users;

use academia_core::forms::FieldId;

pub use auth::AuthState;
pub use create_user::CreateUserState;
pub use users::{EditState, UsersState};

/// One focusable line of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// Free text input
    Text(FieldId),
    /// Role selector keyed by form key (auth screen) or role (create form)
    UserType,
    /// `ACTIVE | INACTIVE | SUSPENDED`
    State,
    /// Role selector over role ids (edit form)
    Role,
}

/// Wrapping focus step over `len` rows
fn step(focus: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (focus + 1) % len
    } else {
        (focus + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::step;

    #[test]
    fn focus_wraps_both_ways() {
        assert_eq!(step(0, 3, false), 2);
        assert_eq!(step(2, 3, true), 0);
        assert_eq!(step(1, 3, true), 2);
        assert_eq!(step(0, 0, true), 0);
    }
}
