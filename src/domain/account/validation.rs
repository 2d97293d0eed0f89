//! Signup validation rules

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError};

/// ASCII letters and digits only
pub static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

/// Signup payload as checked before an account is created
///
/// Absent fields arrive as `None` so that `required` reports them, rather
/// than the body being rejected as malformed.
#[derive(Debug, Clone, Default, Validate)]
pub struct NewAccount {
    #[validate(
        required(message = "user_id is required"),
        length(
            min = 6,
            max = 20,
            message = "user_id must be between 6 and 20 characters"
        ),
        regex(path = *ALPHANUMERIC, message = "user_id must be alphanumeric")
    )]
    pub user_id: Option<String>,

    #[validate(
        required(message = "password is required"),
        length(
            min = 8,
            max = 20,
            message = "password must be between 8 and 20 characters"
        ),
        regex(path = *ALPHANUMERIC, message = "password must be alphanumeric"),
        custom(
            function = "validate_excluded_chars",
            message = "password must not contain whitespace or apostrophes"
        )
    )]
    pub password: Option<String>,

    #[validate(
        length(max = 29, message = "nickname must be less than 30 characters"),
        custom(
            function = "validate_excluded_chars",
            message = "nickname must not contain whitespace or apostrophes"
        )
    )]
    pub nickname: Option<String>,

    #[validate(length(max = 99, message = "comment must be less than 100 characters"))]
    pub comment: Option<String>,
}

/// Characters refused in passwords and nicknames
pub const EXCLUDED_CHARS: [char; 4] = ['\'', ' ', '\t', '\n'];

/// Reject apostrophes, spaces, tabs and newlines
pub fn validate_excluded_chars(value: &str) -> Result<(), ValidationError> {
    if value.contains(EXCLUDED_CHARS) {
        return Err(ValidationError::new("excluded_chars"));
    }

    Ok(())
}
