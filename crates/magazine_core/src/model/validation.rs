//! Field validation shared by catalog entities.

use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Minimum magazine name length, in characters.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
/// Maximum magazine name length, in characters.
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;
/// Minimum article title length, in characters.
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum article title length, in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// Field-level validation failures for catalog entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Entity id is the nil UUID.
    NilId,
    /// Author name is the empty string.
    EmptyAuthorName,
    /// Magazine name is outside the allowed character range.
    MagazineNameLength { len: usize },
    /// Magazine category is the empty string.
    EmptyCategory,
    /// Article title is outside the allowed character range.
    TitleLength { len: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "entity id must not be nil"),
            Self::EmptyAuthorName => write!(f, "author name must be a non-empty string"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and \
                 {MAGAZINE_NAME_MAX_CHARS} characters, got {len}"
            ),
            Self::EmptyCategory => write!(f, "magazine category must be a non-empty string"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be between {TITLE_MIN_CHARS} and \
                 {TITLE_MAX_CHARS} characters, got {len}"
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_id(id: Uuid) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::NilId);
    }
    Ok(())
}

pub(crate) fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub(crate) fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&len) {
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}
