//! Translation keys
//!
//! Text is grouped by where it appears: `auth.*` for the login screen,
//! one struct per dashboard page, `fields.*` for input labels shared by
//! every form, and `hints.*` for the status bar.
//!
//! Validator messages are not here: they come from `academia-core` and
//! stay in Spanish.

/// Root of all translated text
pub struct Translations {
    pub common: CommonTexts,
    pub hints: HintTexts,
    pub nav: NavTexts,
    pub fields: FieldTexts,
    pub auth: AuthTexts,
    pub home: HomeTexts,
    pub users: UsersTexts,
    pub create_user: CreateUserTexts,
    pub user_menu: UserMenuTexts,
    pub status: StatusTexts,
}

// ============================================================================
// Common
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub none: &'static str,
    pub cycle_hint: &'static str,
}

// ============================================================================
// Keyboard hints
// ============================================================================

pub struct HintTexts {
    pub navigate: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub switch_panel: &'static str,
    pub next_field: &'static str,
    pub cycle: &'static str,
    pub submit: &'static str,
    pub back: &'static str,
    pub menu: &'static str,
    pub sidebar: &'static str,
    pub refresh: &'static str,
    pub register: &'static str,
    pub forgot: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// Sidebar
// ============================================================================

pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub admin_users: &'static str,
    pub manage_user: &'static str,
    pub create_user: &'static str,
}

// ============================================================================
// Form labels
// ============================================================================

pub struct FieldTexts {
    pub full_name: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub username: &'static str,
    pub identifier: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub new_password: &'static str,
    pub confirm_password: &'static str,
    pub user_type: &'static str,
    pub state: &'static str,
    pub role: &'static str,
}

// ============================================================================
// Auth screen
// ============================================================================

pub struct AuthTexts {
    pub login_title: &'static str,
    pub login_subtitle: &'static str,
    pub register_title: &'static str,
    pub register_subtitle: &'static str,
    pub forgot_title: &'static str,
    pub forgot_subtitle: &'static str,
    pub login_button: &'static str,
    pub register_button: &'static str,
    pub forgot_button: &'static str,
    pub submitting: &'static str,
    pub go_register: &'static str,
    pub go_forgot: &'static str,
    pub back_to_login: &'static str,
    pub choose_user_type: &'static str,
    pub reset_sent: &'static str,
    pub welcome: &'static str,
}

// ============================================================================
// Dashboard pages
// ============================================================================

pub struct HomeTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub session: &'static str,
    pub signed_in_as: &'static str,
    pub caller_id: &'static str,
    pub api: &'static str,
    pub language: &'static str,
    pub shortcuts: &'static str,
}

pub struct UsersTexts {
    pub col_id: &'static str,
    pub col_username: &'static str,
    pub col_email: &'static str,
    pub col_firstname: &'static str,
    pub col_lastname: &'static str,
    pub col_state: &'static str,
    pub col_role: &'static str,
    pub empty: &'static str,
    pub edit_title: &'static str,
    pub password_hint: &'static str,
    pub save: &'static str,
    pub saving: &'static str,
}

pub struct CreateUserTexts {
    pub title: &'static str,
    pub state_default: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
}

pub struct UserMenuTexts {
    pub title: &'static str,
    pub profile: &'static str,
    pub settings: &'static str,
    pub logout: &'static str,
}

// ============================================================================
// Status line
// ============================================================================

pub struct StatusTexts {
    pub logged_out: &'static str,
    pub refreshing: &'static str,
    pub profile: &'static str,
    pub settings: &'static str,
    pub guest: &'static str,
}
