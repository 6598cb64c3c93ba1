//! Form controllers
//!
//! Every form stores its inputs in a [`Fields`] set driven by a static
//! [`FieldSpec`] table, so required-ness and validators live in one place.

pub mod auth;
pub mod field;
pub mod user_create;
pub mod user_edit;

pub use auth::{AuthForm, AuthView, SubmitAction};
pub use field::{FieldId, FieldSpec, Fields, FormField, Validator};
pub use user_create::UserCreateForm;
pub use user_edit::UserEditForm;
