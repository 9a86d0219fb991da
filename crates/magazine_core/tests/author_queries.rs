use magazine_core::{CatalogService, InMemoryArticleRepository, RepoError, ValidationError};
use std::collections::BTreeSet;

fn catalog() -> CatalogService<InMemoryArticleRepository> {
    CatalogService::new(InMemoryArticleRepository::new())
}

#[test]
fn add_article_links_author_and_magazine() {
    let mut catalog = catalog();
    let jane = catalog.create_author("Jane").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();

    catalog
        .add_article(&jane, &vogue, "Winter Style Guide")
        .unwrap();

    assert_eq!(catalog.author_articles(&jane).unwrap().len(), 1);
    assert!(catalog.contributors(&vogue).unwrap().contains(&jane));
    assert_eq!(
        catalog.topic_areas(&jane).unwrap(),
        Some(BTreeSet::from(["Fashion".to_string()]))
    );
}

#[test]
fn add_article_propagates_title_validation() {
    let mut catalog = catalog();
    let jane = catalog.create_author("Jane").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();

    let err = catalog.add_article(&jane, &vogue, "Tip").unwrap_err();

    assert_eq!(
        err,
        RepoError::Validation(ValidationError::TitleLength { len: 3 })
    );
    assert!(catalog.author_articles(&jane).unwrap().is_empty());
}

#[test]
fn articles_only_include_this_author_in_registry_order() {
    let mut catalog = catalog();
    let jane = catalog.create_author("Jane").unwrap();
    let john = catalog.create_author("John").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();

    catalog.add_article(&jane, &vogue, "First by Jane").unwrap();
    catalog.add_article(&john, &vogue, "First by John").unwrap();
    catalog.add_article(&jane, &vogue, "Second by Jane").unwrap();

    let titles: Vec<String> = catalog
        .author_articles(&jane)
        .unwrap()
        .iter()
        .map(|article| article.title().to_string())
        .collect();
    assert_eq!(titles, vec!["First by Jane", "Second by Jane"]);
}

#[test]
fn magazines_are_deduplicated() {
    let mut catalog = catalog();
    let jane = catalog.create_author("Jane").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let wired = catalog.create_magazine("Wired", "Technology").unwrap();

    catalog.add_article(&jane, &vogue, "Winter Style Guide").unwrap();
    catalog.add_article(&jane, &wired, "Gadgets of the Year").unwrap();
    catalog.add_article(&jane, &vogue, "Spring Colors").unwrap();

    assert_eq!(catalog.author_magazines(&jane).unwrap(), vec![vogue, wired]);
}

#[test]
fn topic_areas_is_none_without_articles() {
    let mut catalog = catalog();
    let jane = catalog.create_author("Jane").unwrap();

    assert_eq!(catalog.topic_areas(&jane).unwrap(), None);
    assert!(catalog.author_magazines(&jane).unwrap().is_empty());
}

#[test]
fn topic_areas_follow_current_magazine_category() {
    let mut catalog = catalog();
    let jane = catalog.create_author("Jane").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    let elle = catalog.create_magazine("Elle", "Fashion").unwrap();
    catalog.add_article(&jane, &vogue, "Winter Style Guide").unwrap();
    catalog.add_article(&jane, &elle, "Spring Colors").unwrap();

    assert_eq!(
        catalog.topic_areas(&jane).unwrap(),
        Some(BTreeSet::from(["Fashion".to_string()]))
    );

    catalog.recategorize_magazine(elle.id(), "Lifestyle").unwrap();

    assert_eq!(
        catalog.topic_areas(&jane).unwrap(),
        Some(BTreeSet::from([
            "Fashion".to_string(),
            "Lifestyle".to_string()
        ]))
    );
}

#[test]
fn derived_queries_are_idempotent() {
    let mut catalog = catalog();
    let jane = catalog.create_author("Jane").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    catalog.add_article(&jane, &vogue, "Winter Style Guide").unwrap();

    assert_eq!(
        catalog.author_articles(&jane).unwrap(),
        catalog.author_articles(&jane).unwrap()
    );
    assert_eq!(
        catalog.author_magazines(&jane).unwrap(),
        catalog.author_magazines(&jane).unwrap()
    );
    assert_eq!(
        catalog.topic_areas(&jane).unwrap(),
        catalog.topic_areas(&jane).unwrap()
    );
}
