//! View layer
//!
//! Pure rendering: every function here reads `&App` and draws into the
//! frame. Nothing in this module mutates state.

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
