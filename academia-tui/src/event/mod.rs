//! Event layer
//!
//! Polls crossterm and maps each key press or resize to an
//! [`AppMessage`](crate::message::AppMessage). Which keys mean what depends
//! on the screen, the focused panel, and whether the user menu is open.

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
