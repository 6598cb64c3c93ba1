//! Model layer
//!
//! Plain state, mutated only by the update layer and read by the view
//! layer. `App` is the root; the dashboard shell, the sidebar tree and the
//! per-screen form states hang off it.

mod app;
mod focus;
mod navigation;
mod page;
mod shell;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use navigation::{NavGroupId, NavItemId, NavRow, NavigationState};
pub use page::{Page, Screen};
pub use shell::{ShellState, UserMenuAction};
pub use state::{AuthState, CreateUserState, EditState, FormRow, UsersState};
