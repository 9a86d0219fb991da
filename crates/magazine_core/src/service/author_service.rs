//! Author-side derived queries.
//!
//! # Invariants
//! - Every result reflects the registry at call time.
//! - Deduplicated results keep first-appearance order.

use crate::model::article::Article;
use crate::model::author::Author;
use crate::model::magazine::Magazine;
use crate::repo::article_repo::{ArticleListQuery, ArticleRepository, RepoResult};
use crate::service::catalog_service::CatalogService;
use std::collections::{BTreeSet, HashSet};

impl<R: ArticleRepository> CatalogService<R> {
    /// Returns this author's articles in registry order.
    pub fn author_articles(&self, author: &Author) -> RepoResult<Vec<Article>> {
        self.repo
            .list_articles(&ArticleListQuery::by_author(author.id()))
    }

    /// Returns the distinct magazines this author has written for.
    pub fn author_magazines(&self, author: &Author) -> RepoResult<Vec<Magazine>> {
        let mut seen = HashSet::new();
        let mut magazines = Vec::new();
        for article in self.author_articles(author)? {
            if seen.insert(article.magazine_id()) {
                magazines.push(self.require_magazine(article.magazine_id())?);
            }
        }
        Ok(magazines)
    }

    /// Creates a new article written by `author` for `magazine`.
    ///
    /// Title validation and reference errors from article creation are
    /// returned unchanged.
    pub fn add_article(
        &mut self,
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        self.create_article(author, magazine, title)
    }

    /// Returns the distinct current categories of this author's magazines.
    ///
    /// Returns `None` when the author has no articles.
    pub fn topic_areas(&self, author: &Author) -> RepoResult<Option<BTreeSet<String>>> {
        let magazines = self.author_magazines(author)?;
        if magazines.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            magazines
                .iter()
                .map(|magazine| magazine.category().to_string())
                .collect(),
        ))
    }
}
