//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `magazine_core` linkage with a small sample catalog.
//! - Keep output deterministic apart from generated ids, which are not printed.
//!
//! Logging is enabled when `MAGAZINE_LOG_DIR` is set; `MAGAZINE_LOG_LEVEL`
//! overrides the build-mode default level.

use magazine_core::{CatalogService, InMemoryArticleRepository, RepoError};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("MAGAZINE_LOG_DIR") {
        let level = std::env::var("MAGAZINE_LOG_LEVEL")
            .unwrap_or_else(|_| magazine_core::default_log_level().to_string());
        if let Err(err) = magazine_core::init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("magazine_core version={}", magazine_core::core_version());
    match run_sample() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=sample_run module=cli status=error");
            eprintln!("sample catalog failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_sample() -> Result<(), RepoError> {
    let mut catalog = CatalogService::new(InMemoryArticleRepository::new());
    let jane = catalog.create_author("Jane")?;
    let vogue = catalog.create_magazine("Vogue", "Fashion")?;
    for title in ["Winter Style Guide", "Spring Colors", "Summer Linen"] {
        catalog.add_article(&jane, &vogue, title)?;
    }

    let contributors = catalog.contributors(&vogue)?;
    let contributing = catalog.contributing_authors(&vogue)?.unwrap_or_default();
    let topics = catalog.topic_areas(&jane)?.unwrap_or_default();

    println!("registry articles={}", catalog.article_count()?);
    println!(
        "{} contributors={} contributing_authors={}",
        vogue.name(),
        contributors.len(),
        contributing.len()
    );
    println!(
        "{} topic_areas={}",
        jane.name(),
        topics.into_iter().collect::<Vec<_>>().join(",")
    );
    Ok(())
}
