//! Todo constants and validation functions.
//!
//! Provides the title length rules, the priority vocabulary, and the
//! validation functions applied before any todo is written to the database.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length of a todo title in characters, after trimming.
pub const TITLE_MIN_LENGTH: usize = 3;

/// Maximum length of a todo title in characters, after trimming.
pub const TITLE_MAX_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Priorities
// ---------------------------------------------------------------------------

/// Priority levels a todo can carry.
pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";

/// All valid priority values.
pub const VALID_PRIORITIES: &[&str] = &[PRIORITY_LOW, PRIORITY_MEDIUM, PRIORITY_HIGH];

/// Priority assigned when a todo is created without one.
pub const DEFAULT_PRIORITY: &str = PRIORITY_MEDIUM;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a todo title and return the normalized (trimmed) form.
///
/// Leading and trailing whitespace never counts toward the length rules,
/// and the trimmed form is what gets stored.
pub fn validate_title(title: &str) -> Result<String, String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Title is required".to_string());
    }
    let length = trimmed.chars().count();
    if length < TITLE_MIN_LENGTH {
        return Err(format!(
            "Title must be at least {TITLE_MIN_LENGTH} characters"
        ));
    }
    if length > TITLE_MAX_LENGTH {
        return Err(format!("Title must be at most {TITLE_MAX_LENGTH} characters"));
    }
    Ok(trimmed.to_string())
}

/// Validate that the priority string is one of the accepted values.
pub fn validate_priority(priority: &str) -> Result<(), String> {
    if VALID_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(format!(
            "Priority must be one of: {}",
            VALID_PRIORITIES.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_title --------------------------------------------------

    #[test]
    fn valid_title_accepted() {
        assert_eq!(validate_title("Buy milk").unwrap(), "Buy milk");
    }

    #[test]
    fn title_at_min_length_accepted() {
        assert_eq!(validate_title("abc").unwrap(), "abc");
    }

    #[test]
    fn title_at_max_length_accepted() {
        let title = "a".repeat(TITLE_MAX_LENGTH);
        assert_eq!(validate_title(&title).unwrap(), title);
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(validate_title("  Trimmed  ").unwrap(), "Trimmed");
    }

    #[test]
    fn empty_title_rejected() {
        let result = validate_title("");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Title is required");
    }

    #[test]
    fn whitespace_only_title_rejected() {
        let result = validate_title("   ");
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Title is required");
    }

    #[test]
    fn short_title_rejected() {
        let result = validate_title("ab");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at least 3 characters"));
    }

    #[test]
    fn short_title_after_trim_rejected() {
        // Whitespace padding must not rescue a too-short title.
        assert!(validate_title("  ab  ").is_err());
    }

    #[test]
    fn long_title_rejected() {
        let title = "a".repeat(TITLE_MAX_LENGTH + 1);
        let result = validate_title(&title);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("at most 100 characters"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Three multibyte characters meet the minimum even though the
        // byte length is larger.
        assert!(validate_title("äöü").is_ok());
    }

    // -- validate_priority -----------------------------------------------

    #[test]
    fn valid_priorities_accepted() {
        assert!(validate_priority("low").is_ok());
        assert!(validate_priority("medium").is_ok());
        assert!(validate_priority("high").is_ok());
    }

    #[test]
    fn invalid_priority_rejected() {
        let result = validate_priority("urgent");
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            "Priority must be one of: low, medium, high"
        );
    }

    #[test]
    fn empty_priority_rejected() {
        assert!(validate_priority("").is_err());
    }

    #[test]
    fn case_sensitive_priority() {
        assert!(validate_priority("Low").is_err());
        assert!(validate_priority("HIGH").is_err());
    }

    #[test]
    fn default_priority_is_valid() {
        assert!(validate_priority(DEFAULT_PRIORITY).is_ok());
        assert_eq!(DEFAULT_PRIORITY, "medium");
    }
}
