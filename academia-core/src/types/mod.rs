//! Type definitions module

mod notification;
mod role;
mod session;
mod user;

pub use notification::{Notification, NotificationLevel};
pub use role::{Role, RoleMap};
pub use session::SessionContext;
pub use user::{CreateUserRequest, UpdateUserRequest, UserRecord, UserState};
