//! Auth screen messages

#[derive(Debug, Clone)]
pub enum AuthMessage {
    GoToRegister,
    GoToForgot,
    BackToLogin,
}
