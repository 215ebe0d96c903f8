//! Click actions attached to action cards and navigation links.
//!
//! The front-end switches on these names, so the database only ever holds
//! one of [`ACTION_TYPES`].

use crate::error::CoreError;

/// Open a QQ add-friend prompt; the value is the QQ number.
pub const ACTION_QQ_FRIEND: &str = "qq_friend";
/// Open a QQ join-group prompt; the value is the group key.
pub const ACTION_QQ_GROUP: &str = "qq_group";
/// Open an external URL in a new tab.
pub const ACTION_LINK: &str = "link";
/// Navigate within the site.
pub const ACTION_PAGE: &str = "page";

pub const ACTION_TYPES: &[&str] = &[ACTION_QQ_FRIEND, ACTION_QQ_GROUP, ACTION_LINK, ACTION_PAGE];

/// Reject any action type the front-end does not know how to handle.
pub fn validate_action_type(action_type: &str) -> Result<(), CoreError> {
    if ACTION_TYPES.contains(&action_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown action_type '{action_type}'. Expected one of: {}",
            ACTION_TYPES.join(", ")
        )))
    }
}
