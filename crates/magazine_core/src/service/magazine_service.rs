//! Magazine-side derived queries.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::Magazine;
use crate::repo::article_repo::{ArticleListQuery, ArticleRepository, RepoResult};
use crate::service::catalog_service::CatalogService;
use std::collections::{HashMap, HashSet};

/// An author needs at least this many articles in one magazine to count as
/// a contributing author of it.
pub const CONTRIBUTING_AUTHOR_MIN_ARTICLES: usize = 3;

impl<R: ArticleRepository> CatalogService<R> {
    /// Returns this magazine's articles in registry order.
    pub fn magazine_articles(&self, magazine: &Magazine) -> RepoResult<Vec<Article>> {
        self.repo
            .list_articles(&ArticleListQuery::by_magazine(magazine.id()))
    }

    /// Returns the distinct authors who wrote for this magazine, in order of
    /// their first article.
    pub fn contributors(&self, magazine: &Magazine) -> RepoResult<Vec<Author>> {
        let mut seen = HashSet::new();
        let mut authors = Vec::new();
        for article in self.magazine_articles(magazine)? {
            if seen.insert(article.author_id()) {
                authors.push(self.require_author(article.author_id())?);
            }
        }
        Ok(authors)
    }

    /// Returns article titles in registry order, or `None` when empty.
    pub fn article_titles(&self, magazine: &Magazine) -> RepoResult<Option<Vec<String>>> {
        let titles: Vec<String> = self
            .magazine_articles(magazine)?
            .iter()
            .map(|article| article.title().to_string())
            .collect();
        if titles.is_empty() {
            return Ok(None);
        }
        Ok(Some(titles))
    }

    /// Returns authors with more than two articles in this magazine.
    ///
    /// Returns `None` when no author reaches the threshold.
    pub fn contributing_authors(&self, magazine: &Magazine) -> RepoResult<Option<Vec<Author>>> {
        let articles = self.magazine_articles(magazine)?;
        let mut counts: HashMap<AuthorId, usize> = HashMap::new();
        let mut order = Vec::new();
        for article in &articles {
            let count = counts.entry(article.author_id()).or_insert(0);
            if *count == 0 {
                order.push(article.author_id());
            }
            *count += 1;
        }

        let mut authors = Vec::new();
        for author_id in order {
            if counts[&author_id] >= CONTRIBUTING_AUTHOR_MIN_ARTICLES {
                authors.push(self.require_author(author_id)?);
            }
        }
        if authors.is_empty() {
            return Ok(None);
        }
        Ok(Some(authors))
    }
}
