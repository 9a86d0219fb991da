//! Article registry contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the ordered, append-only article registry.
//! - Own the authors and magazines that articles may reference.
//!
//! # Invariants
//! - The registry keeps creation order and never removes an article.
//! - An id is stored at most once per entity kind.
//! - A failed write leaves every collection unchanged.
//! - Article titles stored in the registry never change.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::ValidationError;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog writes and lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A field failed validation.
    Validation(ValidationError),
    /// Referenced author is not registered.
    UnknownAuthor(AuthorId),
    /// Referenced magazine is not registered.
    UnknownMagazine(MagazineId),
    /// Article id is not in the registry.
    ArticleNotFound(ArticleId),
    /// An entity with this id is already registered.
    DuplicateId(Uuid),
    /// Update attempted to change a stored article title.
    TitleImmutable(ArticleId),
}

impl RepoError {
    /// Returns whether this error is a field validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns whether this error is an invalid author/magazine reference.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::UnknownAuthor(_) | Self::UnknownMagazine(_))
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownAuthor(id) => write!(f, "author is not registered: {id}"),
            Self::UnknownMagazine(id) => write!(f, "magazine is not registered: {id}"),
            Self::ArticleNotFound(id) => write!(f, "article not found: {id}"),
            Self::DuplicateId(id) => write!(f, "id already registered: {id}"),
            Self::TitleImmutable(id) => write!(f, "article title cannot change: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Filter options for listing registry articles.
///
/// Results are always returned in registry (creation) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleListQuery {
    pub author_id: Option<AuthorId>,
    pub magazine_id: Option<MagazineId>,
}

impl ArticleListQuery {
    pub fn by_author(author_id: AuthorId) -> Self {
        Self {
            author_id: Some(author_id),
            ..Self::default()
        }
    }

    pub fn by_magazine(magazine_id: MagazineId) -> Self {
        Self {
            magazine_id: Some(magazine_id),
            ..Self::default()
        }
    }

    fn matches(&self, article: &Article) -> bool {
        self.author_id.map_or(true, |id| article.author_id() == id)
            && self.magazine_id.map_or(true, |id| article.magazine_id() == id)
    }
}

/// Repository interface for the catalog registry.
pub trait ArticleRepository {
    /// Registers one author and returns its stable id.
    fn insert_author(&mut self, author: &Author) -> RepoResult<AuthorId>;
    /// Registers one magazine and returns its stable id.
    fn insert_magazine(&mut self, magazine: &Magazine) -> RepoResult<MagazineId>;
    /// Replaces name/category of a registered magazine.
    fn update_magazine(&mut self, magazine: &Magazine) -> RepoResult<()>;
    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>>;
    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>>;
    /// Lists authors in registration order.
    fn list_authors(&self) -> RepoResult<Vec<Author>>;
    /// Lists magazines in registration order.
    fn list_magazines(&self) -> RepoResult<Vec<Magazine>>;
    /// Appends one article to the end of the registry.
    fn append_article(&mut self, article: &Article) -> RepoResult<ArticleId>;
    /// Replaces author/magazine references of a stored article.
    fn update_article(&mut self, article: &Article) -> RepoResult<()>;
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;
    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<Article>>;
    /// Returns the number of articles ever appended.
    fn article_count(&self) -> RepoResult<usize>;
}

/// Process-local registry backed by plain vectors.
///
/// Lookups are linear scans; catalogs are expected to stay small.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn has_author(&self, id: AuthorId) -> bool {
        self.authors.iter().any(|author| author.id() == id)
    }

    fn has_magazine(&self, id: MagazineId) -> bool {
        self.magazines.iter().any(|magazine| magazine.id() == id)
    }

    fn ensure_references(&self, article: &Article) -> RepoResult<()> {
        if !self.has_author(article.author_id()) {
            return Err(RepoError::UnknownAuthor(article.author_id()));
        }
        if !self.has_magazine(article.magazine_id()) {
            return Err(RepoError::UnknownMagazine(article.magazine_id()));
        }
        Ok(())
    }
}

impl ArticleRepository for InMemoryArticleRepository {
    fn insert_author(&mut self, author: &Author) -> RepoResult<AuthorId> {
        author.validate()?;
        if self.has_author(author.id()) {
            return Err(RepoError::DuplicateId(author.id()));
        }

        self.authors.push(author.clone());
        debug!(
            "event=author_insert module=repo status=ok author_id={}",
            author.id()
        );
        Ok(author.id())
    }

    fn insert_magazine(&mut self, magazine: &Magazine) -> RepoResult<MagazineId> {
        magazine.validate()?;
        if self.has_magazine(magazine.id()) {
            return Err(RepoError::DuplicateId(magazine.id()));
        }

        self.magazines.push(magazine.clone());
        debug!(
            "event=magazine_insert module=repo status=ok magazine_id={}",
            magazine.id()
        );
        Ok(magazine.id())
    }

    fn update_magazine(&mut self, magazine: &Magazine) -> RepoResult<()> {
        magazine.validate()?;
        let stored = self
            .magazines
            .iter_mut()
            .find(|stored| stored.id() == magazine.id())
            .ok_or(RepoError::UnknownMagazine(magazine.id()))?;

        *stored = magazine.clone();
        debug!(
            "event=magazine_update module=repo status=ok magazine_id={}",
            magazine.id()
        );
        Ok(())
    }

    fn get_author(&self, id: AuthorId) -> RepoResult<Option<Author>> {
        Ok(self.authors.iter().find(|author| author.id() == id).cloned())
    }

    fn get_magazine(&self, id: MagazineId) -> RepoResult<Option<Magazine>> {
        Ok(self
            .magazines
            .iter()
            .find(|magazine| magazine.id() == id)
            .cloned())
    }

    fn list_authors(&self) -> RepoResult<Vec<Author>> {
        Ok(self.authors.clone())
    }

    fn list_magazines(&self) -> RepoResult<Vec<Magazine>> {
        Ok(self.magazines.clone())
    }

    fn append_article(&mut self, article: &Article) -> RepoResult<ArticleId> {
        article.validate()?;
        self.ensure_references(article)?;
        if self.articles.iter().any(|stored| stored.id() == article.id()) {
            return Err(RepoError::DuplicateId(article.id()));
        }

        self.articles.push(article.clone());
        debug!(
            "event=article_append module=repo status=ok article_id={} registry_len={}",
            article.id(),
            self.articles.len()
        );
        Ok(article.id())
    }

    fn update_article(&mut self, article: &Article) -> RepoResult<()> {
        self.ensure_references(article)?;
        let stored = self
            .articles
            .iter_mut()
            .find(|stored| stored.id() == article.id())
            .ok_or(RepoError::ArticleNotFound(article.id()))?;
        if stored.title() != article.title() {
            return Err(RepoError::TitleImmutable(article.id()));
        }

        *stored = article.clone();
        debug!(
            "event=article_update module=repo status=ok article_id={}",
            article.id()
        );
        Ok(())
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        Ok(self
            .articles
            .iter()
            .find(|article| article.id() == id)
            .cloned())
    }

    fn list_articles(&self, query: &ArticleListQuery) -> RepoResult<Vec<Article>> {
        Ok(self
            .articles
            .iter()
            .filter(|article| query.matches(article))
            .cloned()
            .collect())
    }

    fn article_count(&self) -> RepoResult<usize> {
        Ok(self.articles.len())
    }
}
