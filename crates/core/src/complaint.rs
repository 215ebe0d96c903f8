//! Complaint submission rules and status lifecycle.

use crate::error::CoreError;
use crate::validation::{blank_to_none, require_non_blank};

/// Initial status of every submitted complaint.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_PROCESSED: &str = "processed";
pub const STATUS_IGNORED: &str = "ignored";

pub const COMPLAINT_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_PROCESSED, STATUS_IGNORED];

/// Upper bound on complaint text, in characters.
pub const MAX_CONTENT_CHARS: usize = 5000;

/// A complaint that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComplaint {
    pub content: String,
    pub contact_info: Option<String>,
}

/// Normalize a visitor submission.
///
/// Content is trimmed and must be non-empty; a blank contact field is dropped.
pub fn prepare_submission(
    content: &str,
    contact_info: Option<&str>,
) -> Result<NewComplaint, CoreError> {
    let content = require_non_blank("content", content)?;
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(CoreError::Validation(format!(
            "content must be at most {MAX_CONTENT_CHARS} characters"
        )));
    }
    Ok(NewComplaint {
        content,
        contact_info: blank_to_none(contact_info),
    })
}

pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if COMPLAINT_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown complaint status '{status}'. Expected one of: {}",
            COMPLAINT_STATUSES.join(", ")
        )))
    }
}
