//! CLI input validation functions.
//!
//! These validators are used by clap's `value_parser` attribute to validate
//! user input at parse time, providing immediate feedback for invalid values.

/// Validate a user id given on the command line.
///
/// User ids are single whitespace-free tokens, the same shape the network
/// file loader produces. Surrounding whitespace is trimmed; case is kept.
///
/// # Errors
///
/// Returns a message if the id is empty or contains whitespace.
pub fn validate_user_id(s: &str) -> Result<String, String> {
    let s = s.trim();

    if s.is_empty() {
        return Err("User id cannot be empty".to_string());
    }

    if s.chars().any(char::is_whitespace) {
        return Err(format!(
            "Invalid user id: '{s}'. User ids cannot contain whitespace"
        ));
    }

    Ok(s.to_string())
}
