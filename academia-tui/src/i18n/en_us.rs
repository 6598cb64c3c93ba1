//! English (en-US)

use super::keys::{
    AuthTexts, CommonTexts, CreateUserTexts, FieldTexts, HintTexts, HomeTexts, NavTexts,
    StatusTexts, Translations, UserMenuTexts, UsersTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Academic Platform",
        loading: "Loading...",
        no_data: "No data",
        none: "—",
        cycle_hint: "(←→ to change)",
    },

    hints: HintTexts {
        navigate: "Navigate",
        select: "Select",
        open: "Open",
        switch_panel: "Switch Panel",
        next_field: "Next Field",
        cycle: "Change Option",
        submit: "Submit",
        back: "Back",
        menu: "User Menu",
        sidebar: "Sidebar",
        refresh: "Reload",
        register: "Sign Up",
        forgot: "Forgot Password",
        quit: "Quit",
    },

    nav: NavTexts {
        title: "Menu",
        home: "My Home",
        admin_users: "Manage Users",
        manage_user: "Edit Users",
        create_user: "Create User",
    },

    fields: FieldTexts {
        full_name: "Full Name",
        first_name: "First Name",
        last_name: "Last Name",
        username: "Username",
        identifier: "Username or Email",
        email: "Email",
        password: "Password",
        new_password: "New Password",
        confirm_password: "Confirm Password",
        user_type: "User Type",
        state: "State",
        role: "Role",
    },

    auth: AuthTexts {
        login_title: "Sign In",
        login_subtitle: "Enter your credentials to continue",
        register_title: "Create Account",
        register_subtitle: "Fill in your details to sign up",
        forgot_title: "Reset Password",
        forgot_subtitle: "We will send you reset instructions",
        login_button: "Sign In",
        register_button: "Sign Up",
        forgot_button: "Send Instructions",
        submitting: "Sending...",
        go_register: "No account yet? Sign up",
        go_forgot: "Forgot your password?",
        back_to_login: "Back to sign in",
        choose_user_type: "Choose a type",
        reset_sent: "If the account exists, you will receive reset instructions.",
        welcome: "Welcome",
    },

    home: HomeTexts {
        title: "Workspace",
        subtitle: "Manage users and resources of the academic platform",
        session: "Session",
        signed_in_as: "User",
        caller_id: "User ID (x-user-id)",
        api: "API",
        language: "Language",
        shortcuts: "Shortcuts",
    },

    users: UsersTexts {
        col_id: "ID",
        col_username: "Username",
        col_email: "Email",
        col_firstname: "First Name",
        col_lastname: "Last Name",
        col_state: "State",
        col_role: "Role",
        empty: "No users yet",
        edit_title: "Edit User",
        password_hint: "Leave blank to keep the current one",
        save: "Save Changes",
        saving: "Saving...",
    },

    create_user: CreateUserTexts {
        title: "Register a New User",
        state_default: "Default",
        submit: "Create User",
        submitting: "Creating...",
    },

    user_menu: UserMenuTexts {
        title: "Account",
        profile: "My Profile",
        settings: "Settings",
        logout: "Sign Out",
    },

    status: StatusTexts {
        logged_out: "Signed out",
        refreshing: "Reloading...",
        profile: "Profile",
        settings: "Config file",
        guest: "guest",
    },
};
