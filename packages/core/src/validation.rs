// ABOUTME: Input validation for brand, category and link writes
// ABOUTME: Trims text fields, enforces size limits and normalizes empty descriptions

use thiserror::Error;

use crate::types::LinkInput;

/// Maximum length of a brand or category name
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a link title
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a link URL
pub const MAX_URL_LEN: usize = 2048;

/// Maximum length of a link description
pub const MAX_DESCRIPTION_LEN: usize = 1000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} contains invalid null bytes")]
    NullByte { field: &'static str },

    #[error("{field} must be a positive id (got {value})")]
    InvalidId { field: &'static str, value: i64 },
}

/// Trim a required text field and check it against `max` characters
fn validate_text(value: &str, field: &'static str, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }

    let actual = trimmed.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    if trimmed.contains('\0') {
        return Err(ValidationError::NullByte { field });
    }

    Ok(trimmed.to_string())
}

/// Validate a brand or category name
pub fn validate_name(name: &str, field: &'static str) -> Result<String, ValidationError> {
    validate_text(name, field, MAX_NAME_LEN)
}

/// Reject ids SQLite could never have assigned
pub fn validate_entity_id(id: i64, field: &'static str) -> Result<i64, ValidationError> {
    if id <= 0 {
        return Err(ValidationError::InvalidId { field, value: id });
    }
    Ok(id)
}

/// Validate a link create/update payload.
///
/// Title and URL are trimmed and required. A blank description becomes `None`
/// so it is stored as NULL.
pub fn validate_link_input(input: LinkInput) -> Result<LinkInput, ValidationError> {
    let brand_id = validate_entity_id(input.brand_id, "Brand id")?;
    let category_id = validate_entity_id(input.category_id, "Category id")?;
    let title = validate_text(&input.title, "Title", MAX_TITLE_LEN)?;
    let url = validate_text(&input.url, "URL", MAX_URL_LEN)?;

    let description = match input.description {
        Some(text) if !text.trim().is_empty() => {
            Some(validate_text(&text, "Description", MAX_DESCRIPTION_LEN)?)
        }
        _ => None,
    };

    Ok(LinkInput {
        brand_id,
        category_id,
        title,
        url,
        description,
    })
}
