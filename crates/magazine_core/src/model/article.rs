//! Article domain model.
//!
//! An article is the join record between one author and one magazine.
//!
//! # Invariants
//! - `title` is 5..=50 characters and never changes after construction.
//! - `author_id`/`magazine_id` may be replaced, but only from a typed
//!   `Author`/`Magazine`; the repository checks they are registered.

use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::{validate_id, validate_title, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an article.
pub type ArticleId = Uuid;

/// A titled piece written by one author for one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArticleRecord")]
pub struct Article {
    id: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

impl Article {
    /// Creates a new article with a generated stable ID.
    ///
    /// The article is not visible to derived queries until it is appended
    /// to a repository.
    pub fn new(
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), author.id(), magazine.id(), title)
    }

    /// Creates an article from raw ids, e.g. when importing records.
    pub fn with_id(
        id: ArticleId,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_id(id)?;
        validate_title(&title)?;
        Ok(Self {
            id,
            author_id,
            magazine_id,
            title,
        })
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    /// Points this article at another author. The title is left untouched.
    pub fn set_author(&mut self, author: &Author) {
        self.author_id = author.id();
    }

    /// Points this article at another magazine. The title is left untouched.
    pub fn set_magazine(&mut self, magazine: &Magazine) {
        self.magazine_id = magazine.id();
    }

    /// Re-checks id and title; used before a record is stored.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id(self.id)?;
        validate_title(&self.title)
    }
}

#[derive(Deserialize)]
struct ArticleRecord {
    id: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = ValidationError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        Self::with_id(record.id, record.author_id, record.magazine_id, record.title)
    }
}
