//! Rendering errors.

use thiserror::Error;

/// Errors raised while rendering configuration fragments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A compiled route references a group absent from the directory.
    #[error("group '{0}' has no entry in the group directory")]
    UnknownGroup(String),

    /// A directory entry needed for rendering has a blank field.
    #[error("group '{group}' has an empty {field}")]
    MissingField { group: String, field: &'static str },
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Fail with `MissingField` when `value` is blank.
pub(crate) fn require<'a>(group: &str, field: &'static str, value: &'a str) -> RenderResult<&'a str> {
    if value.trim().is_empty() {
        return Err(RenderError::MissingField {
            group: group.to_string(),
            field,
        });
    }
    Ok(value)
}
