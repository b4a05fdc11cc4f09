//! Validation of plan names and creation arguments.
//!
//! Valid plan names:
//! - Must be non-empty
//! - May contain only ASCII letters, digits, and hyphens
//! - Must have between 1 and 3 non-empty hyphen-separated words

use crate::error::{DocsError, DocsResult};

/// Maximum number of hyphen-separated words in a plan name.
pub const MAX_NAME_WORDS: usize = 3;

/// Minimum number of implementation steps a plan must declare.
pub const MIN_PLAN_STEPS: usize = 5;

/// Validate a plan name, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use planbook_docs::validate_plan_name;
///
/// assert!(validate_plan_name("user-auth").is_ok());
/// assert!(validate_plan_name("a-b-c-d").is_err());
/// assert!(validate_plan_name("has space").is_err());
/// ```
pub fn validate_plan_name(name: &str) -> DocsResult<()> {
    if name.is_empty() {
        return Err(DocsError::InvalidName {
            name: name.to_string(),
            reason: "name is required".into(),
        });
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(DocsError::InvalidName {
            name: name.to_string(),
            reason: "use only letters, numbers, and hyphens".into(),
        });
    }

    let words = name.split('-').filter(|w| !w.is_empty()).count();
    if words == 0 {
        return Err(DocsError::InvalidName {
            name: name.to_string(),
            reason: "name cannot be empty".into(),
        });
    }
    if words > MAX_NAME_WORDS {
        return Err(DocsError::InvalidName {
            name: name.to_string(),
            reason: format!("use max {MAX_NAME_WORDS} hyphen-separated words"),
        });
    }

    Ok(())
}

/// Validate a plan description: 3 to 10 whitespace-separated words.
pub fn validate_description(description: &str) -> DocsResult<()> {
    let words = description.split_whitespace().count();
    if !(3..=10).contains(&words) {
        return Err(DocsError::InvalidDescription {
            reason: "must be between 3 and 10 words".into(),
        });
    }
    Ok(())
}

/// Validate a plan's implementation steps: at least [`MIN_PLAN_STEPS`].
pub fn validate_steps(steps: &[String]) -> DocsResult<()> {
    if steps.len() < MIN_PLAN_STEPS {
        return Err(DocsError::NotEnoughSteps {
            given: steps.len(),
            required: MIN_PLAN_STEPS,
        });
    }
    Ok(())
}
