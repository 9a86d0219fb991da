//! Core domain logic for the magazine catalog.
//! Authors and magazines are linked through articles held in an explicit
//! registry; every relationship query is derived from that registry.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleId};
pub use model::author::{Author, AuthorId};
pub use model::magazine::{Magazine, MagazineId};
pub use model::validation::{
    ValidationError, MAGAZINE_NAME_MAX_CHARS, MAGAZINE_NAME_MIN_CHARS, TITLE_MAX_CHARS,
    TITLE_MIN_CHARS,
};
pub use repo::article_repo::{
    ArticleListQuery, ArticleRepository, InMemoryArticleRepository, RepoError, RepoResult,
};
pub use service::catalog_service::CatalogService;
pub use service::magazine_service::CONTRIBUTING_AUTHOR_MIN_ARTICLES;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
