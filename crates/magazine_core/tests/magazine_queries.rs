use magazine_core::{Author, CatalogService, InMemoryArticleRepository, Magazine};

fn setup() -> (CatalogService<InMemoryArticleRepository>, Magazine) {
    let mut catalog = CatalogService::new(InMemoryArticleRepository::new());
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    (catalog, vogue)
}

fn write_many(
    catalog: &mut CatalogService<InMemoryArticleRepository>,
    author: &Author,
    magazine: &Magazine,
    count: usize,
) {
    for index in 0..count {
        let title = format!("{} piece {index}", author.name());
        catalog.add_article(author, magazine, title).unwrap();
    }
}

#[test]
fn empty_magazine_queries() {
    let (catalog, vogue) = setup();

    assert!(catalog.magazine_articles(&vogue).unwrap().is_empty());
    assert!(catalog.contributors(&vogue).unwrap().is_empty());
    assert_eq!(catalog.article_titles(&vogue).unwrap(), None);
    assert_eq!(catalog.contributing_authors(&vogue).unwrap(), None);
}

#[test]
fn article_titles_keep_registry_order() {
    let (mut catalog, vogue) = setup();
    let jane = catalog.create_author("Jane").unwrap();
    let john = catalog.create_author("John").unwrap();

    catalog.add_article(&jane, &vogue, "Winter Style Guide").unwrap();
    catalog.add_article(&john, &vogue, "Spring Colors").unwrap();

    assert_eq!(
        catalog.article_titles(&vogue).unwrap(),
        Some(vec![
            "Winter Style Guide".to_string(),
            "Spring Colors".to_string()
        ])
    );
}

#[test]
fn contributors_are_distinct_authors() {
    let (mut catalog, vogue) = setup();
    let jane = catalog.create_author("Jane").unwrap();
    let john = catalog.create_author("John").unwrap();
    write_many(&mut catalog, &jane, &vogue, 2);
    write_many(&mut catalog, &john, &vogue, 1);

    assert_eq!(catalog.magazine_articles(&vogue).unwrap().len(), 3);
    assert_eq!(catalog.contributors(&vogue).unwrap(), vec![jane, john]);
}

#[test]
fn contributors_ignore_other_magazines() {
    let (mut catalog, vogue) = setup();
    let wired = catalog.create_magazine("Wired", "Technology").unwrap();
    let jane = catalog.create_author("Jane").unwrap();
    write_many(&mut catalog, &jane, &wired, 1);

    assert!(catalog.contributors(&vogue).unwrap().is_empty());
    assert_eq!(catalog.contributors(&wired).unwrap(), vec![jane]);
}

#[test]
fn three_articles_make_a_contributing_author() {
    let (mut catalog, vogue) = setup();
    let jane = catalog.create_author("Jane").unwrap();
    write_many(&mut catalog, &jane, &vogue, 3);

    assert_eq!(
        catalog.contributing_authors(&vogue).unwrap(),
        Some(vec![jane])
    );
}

#[test]
fn two_articles_are_not_enough() {
    let (mut catalog, vogue) = setup();
    let jane = catalog.create_author("Jane").unwrap();
    write_many(&mut catalog, &jane, &vogue, 2);

    assert_eq!(catalog.contributing_authors(&vogue).unwrap(), None);
}

#[test]
fn contributing_authors_only_lists_authors_over_threshold() {
    let (mut catalog, vogue) = setup();
    let jane = catalog.create_author("Jane").unwrap();
    let john = catalog.create_author("John").unwrap();
    let wired = catalog.create_magazine("Wired", "Technology").unwrap();
    write_many(&mut catalog, &jane, &vogue, 4);
    write_many(&mut catalog, &john, &vogue, 2);
    write_many(&mut catalog, &john, &wired, 3);

    assert_eq!(
        catalog.contributing_authors(&vogue).unwrap(),
        Some(vec![jane])
    );
    assert_eq!(
        catalog.contributing_authors(&wired).unwrap(),
        Some(vec![john])
    );
}

#[test]
fn renamed_magazine_keeps_its_articles() {
    let (mut catalog, vogue) = setup();
    let jane = catalog.create_author("Jane").unwrap();
    write_many(&mut catalog, &jane, &vogue, 1);

    let renamed = catalog.rename_magazine(vogue.id(), "Vogue UK").unwrap();

    assert_eq!(catalog.magazine_articles(&renamed).unwrap().len(), 1);
    assert_eq!(catalog.magazine_articles(&vogue).unwrap().len(), 1);
}
