// Integration tests for BM25 search over a seeded index

use crate::common::fixtures::{page_entity, snippet_entity};
use crate::common::helpers::seeded_backend;
use seekbase::core::search::SearchService;
use seekbase::SeekbaseError;

#[test]
fn test_search_basic_query() {
    let (backend, _dir) = seeded_backend(&[
        page_entity(1, "authentication", "<p>How to authenticate users safely</p>"),
        page_entity(2, "styling", "<p>Design tokens and color palettes</p>"),
    ]);

    let service = SearchService::new(&backend, 10, 100);
    let response = service.search("authenticate", None).unwrap();

    assert!(!response.hits.is_empty());
    assert_eq!(response.hits[0].document_id, "document_1");
    assert!(response.hits[0].score > 0.0);
    assert_eq!(response.count, response.hits.len());
}

#[test]
fn test_search_boolean_query() {
    let (backend, _dir) = seeded_backend(&[
        snippet_entity(3, "login-box", "login password validation"),
        snippet_entity(4, "footer", "contact address imprint"),
    ]);

    let service = SearchService::new(&backend, 10, 100);
    let response = service.search("login AND password", None).unwrap();

    assert_eq!(response.count, 1);
    assert_eq!(response.hits[0].document_id, "document_3");
}

#[test]
fn test_search_matches_flattened_properties() {
    let mut entity = page_entity(5, "home", "<p>Welcome</p>");
    entity.properties = vec![seekbase::core::entity::Property {
        name: "navigation".to_string(),
        data: seekbase::core::entity::PropertyValue::Text("mainmenu".to_string()),
        inherited: false,
    }];
    let (backend, _dir) = seeded_backend(&[entity]);

    let service = SearchService::new(&backend, 10, 100);
    let response = service.search("mainmenu", None).unwrap();

    assert_eq!(response.count, 1);
}

#[test]
fn test_search_k_is_clamped() {
    let entities: Vec<_> = (1..=20)
        .map(|i| page_entity(i, &format!("page-{i}"), "<p>shared topic keyword</p>"))
        .collect();
    let (backend, _dir) = seeded_backend(&entities);

    let service = SearchService::new(&backend, 10, 5);
    let response = service.search("keyword", Some(50)).unwrap();

    assert_eq!(response.count, 5);
}

#[test]
fn test_search_empty_query_rejected() {
    let (backend, _dir) = seeded_backend(&[page_entity(1, "only", "<p>text</p>")]);

    let service = SearchService::new(&backend, 10, 100);
    let err = service.search("   ", None).unwrap_err();
    assert!(matches!(err, SeekbaseError::InvalidQuery(_)));
}

#[test]
fn test_search_no_results() {
    let (backend, _dir) = seeded_backend(&[page_entity(1, "only", "<p>some text</p>")]);

    let service = SearchService::new(&backend, 10, 100);
    let response = service.search("zebra", None).unwrap();

    assert_eq!(response.count, 0);
    assert!(response.hits.is_empty());
}
