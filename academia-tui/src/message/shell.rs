//! Dashboard shell messages

#[derive(Debug, Clone)]
pub enum ShellMessage {
    ToggleSidebar,
    OpenUserMenu,
    /// Esc or any key outside the menu
    CloseUserMenu,
    UserMenuPrevious,
    UserMenuNext,
    UserMenuConfirm,
}
