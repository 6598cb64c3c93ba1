//! Dashboard shell state
//!
//! The sidebar has two owners depending on the terminal width: a desktop
//! toggle (`sidebar_open`) and a mobile overlay (`mobile_menu_open`).
//! [`ShellState::visible_sidebar`] picks the one the current layout owns,
//! so the two are never shown at the same time.

/// Widths below this render the mobile layout
pub const MOBILE_BREAKPOINT: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

/// Entries of the user drop-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserMenuAction {
    Profile,
    Settings,
    Logout,
}

impl UserMenuAction {
    pub fn all() -> &'static [UserMenuAction] {
        &[
            UserMenuAction::Profile,
            UserMenuAction::Settings,
            UserMenuAction::Logout,
        ]
    }
}

/// User drop-down
#[derive(Debug, Clone, Default)]
pub struct UserMenuState {
    pub open: bool,
    pub selected: usize,
}

impl UserMenuState {
    pub fn open(&mut self) {
        self.open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < UserMenuAction::all().len() - 1 {
            self.selected += 1;
        }
    }

    pub fn current_action(&self) -> Option<UserMenuAction> {
        UserMenuAction::all().get(self.selected).copied()
    }
}

#[derive(Debug, Clone)]
pub struct ShellState {
    /// Desktop sidebar toggle
    pub sidebar_open: bool,
    /// Mobile overlay menu
    pub mobile_menu_open: bool,
    /// Terminal width in columns
    pub viewport_width: u16,
    pub user_menu: UserMenuState,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            sidebar_open: true,
            mobile_menu_open: false,
            viewport_width: MOBILE_BREAKPOINT,
            user_menu: UserMenuState::default(),
        }
    }

    pub fn layout(&self) -> LayoutMode {
        if self.viewport_width >= MOBILE_BREAKPOINT {
            LayoutMode::Desktop
        } else {
            LayoutMode::Mobile
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.layout() == LayoutMode::Mobile
    }

    /// Whether the sidebar is drawn at the current width
    pub fn visible_sidebar(&self) -> bool {
        match self.layout() {
            LayoutMode::Desktop => self.sidebar_open,
            LayoutMode::Mobile => self.mobile_menu_open,
        }
    }

    /// Flip the control owned by the current layout
    pub fn toggle_sidebar(&mut self) {
        match self.layout() {
            LayoutMode::Desktop => self.sidebar_open = !self.sidebar_open,
            LayoutMode::Mobile => self.mobile_menu_open = !self.mobile_menu_open,
        }
    }

    /// Moving to desktop closes the mobile menu
    pub fn set_viewport_width(&mut self, width: u16) {
        self.viewport_width = width;
        if self.layout() == LayoutMode::Desktop {
            self.mobile_menu_open = false;
        }
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}
