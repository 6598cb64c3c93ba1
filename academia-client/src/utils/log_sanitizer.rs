//! Log sanitization utilities
//!
//! Keeps API responses (which may echo user data) from being dumped whole
//! into debug/error logs.

/// Maximum number of bytes of a body included in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary not after `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a string for logging, noting the original length when cut.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_unchanged() {
        let body = r#"{"message":"ok"}"#;
        assert_eq!(truncate_for_log(body), body);
    }

    #[test]
    fn long_body_truncated() {
        let body = "x".repeat(TRUNCATE_LIMIT * 2);
        let result = truncate_for_log(&body);
        assert!(result.ends_with(&format!("[truncated, total {} bytes]", TRUNCATE_LIMIT * 2)));
    }

    #[test]
    fn never_splits_a_character() {
        // 'ñ' is two bytes; an odd limit would land mid-character
        let body = format!("a{}", "ñ".repeat(TRUNCATE_LIMIT));
        let result = truncate_for_log(&body);
        assert!(result.contains("... [truncated"));
    }
}
