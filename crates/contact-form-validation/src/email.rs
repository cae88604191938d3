//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Email validation regex: local-part "@" domain "." tld
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validate email format
///
/// Requires a non-empty local part, an '@' separator, and a domain with at
/// least one dot and a two-letter-minimum TLD. `user@example` is rejected.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
