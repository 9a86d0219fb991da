//! Catalog use-case service.
//!
//! # Responsibility
//! - Register authors, magazines and articles through one repository.
//! - Apply validated magazine edits and article reassignment.
//!
//! # Invariants
//! - Every write validates before touching the repository.
//! - Service layer remains storage-agnostic.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::repo::article_repo::{ArticleListQuery, ArticleRepository, RepoError, RepoResult};
use log::debug;

/// Use-case service wrapping the catalog registry.
///
/// Author and magazine queries live in `author_service` and
/// `magazine_service` as further `impl` blocks of this type.
pub struct CatalogService<R: ArticleRepository> {
    pub(crate) repo: R,
}

impl<R: ArticleRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Consumes the service and returns its repository.
    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Creates and registers a new author.
    pub fn create_author(&mut self, name: impl Into<String>) -> RepoResult<Author> {
        let author = Author::new(name)?;
        self.repo.insert_author(&author)?;
        Ok(author)
    }

    /// Creates and registers a new magazine.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let magazine = Magazine::new(name, category)?;
        self.repo.insert_magazine(&magazine)?;
        Ok(magazine)
    }

    /// Renames a registered magazine and returns the stored value.
    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let mut magazine = self.require_magazine(id)?;
        magazine.set_name(name)?;
        self.repo.update_magazine(&magazine)?;
        Ok(magazine)
    }

    /// Changes the category of a registered magazine.
    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let mut magazine = self.require_magazine(id)?;
        magazine.set_category(category)?;
        self.repo.update_magazine(&magazine)?;
        Ok(magazine)
    }

    /// Creates an article and appends it to the registry.
    ///
    /// # Errors
    /// - `RepoError::Validation` when the title is not 5..=50 chars.
    /// - `RepoError::UnknownAuthor`/`UnknownMagazine` when either side is
    ///   not registered in this catalog.
    pub fn create_article(
        &mut self,
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        let article = Article::new(author, magazine, title).inspect_err(|err| {
            debug!("event=article_create module=service status=rejected reason={err:?}");
        })?;
        self.repo.append_article(&article)?;
        Ok(article)
    }

    /// Points an existing article at another registered author.
    pub fn reassign_author(
        &mut self,
        article_id: ArticleId,
        author_id: AuthorId,
    ) -> RepoResult<Article> {
        let mut article = self.require_article(article_id)?;
        let author = self.require_author(author_id)?;
        article.set_author(&author);
        self.repo.update_article(&article)?;
        Ok(article)
    }

    /// Points an existing article at another registered magazine.
    pub fn reassign_magazine(
        &mut self,
        article_id: ArticleId,
        magazine_id: MagazineId,
    ) -> RepoResult<Article> {
        let mut article = self.require_article(article_id)?;
        let magazine = self.require_magazine(magazine_id)?;
        article.set_magazine(&magazine);
        self.repo.update_article(&article)?;
        Ok(article)
    }

    /// Returns every registered article in creation order.
    pub fn all_articles(&self) -> RepoResult<Vec<Article>> {
        self.repo.list_articles(&ArticleListQuery::default())
    }

    /// Returns the registry length.
    pub fn article_count(&self) -> RepoResult<usize> {
        self.repo.article_count()
    }

    pub(crate) fn require_magazine(&self, id: MagazineId) -> RepoResult<Magazine> {
        self.repo
            .get_magazine(id)?
            .ok_or(RepoError::UnknownMagazine(id))
    }

    pub(crate) fn require_author(&self, id: AuthorId) -> RepoResult<Author> {
        self.repo
            .get_author(id)?
            .ok_or(RepoError::UnknownAuthor(id))
    }

    fn require_article(&self, id: ArticleId) -> RepoResult<Article> {
        self.repo
            .get_article(id)?
            .ok_or(RepoError::ArticleNotFound(id))
    }
}
