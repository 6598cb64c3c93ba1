//! Util layer
//!
//! Infrastructure with no business logic: terminal setup/teardown and the
//! file logger. `main` brings the terminal up, hands it to the loop in
//! `app.rs`, and restores it whether or not the loop returned an error.

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
