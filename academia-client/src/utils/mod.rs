//! Utility modules.

/// Log sanitization utilities to keep response bodies out of full-length logs.
pub mod log_sanitizer;
