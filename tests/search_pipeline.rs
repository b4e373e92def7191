//! End-to-end checks over a fixture dataset: load, filter, sort, render.

use courser::catalog::{Catalog, CatalogError};
use courser::query::{self, CourseQuery, SortKey};
use courser::render;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture() -> Catalog {
    Catalog::load(&fixture_path("courses.csv")).expect("fixture dataset should load")
}

#[test]
fn test_fixture_parses_quoted_short_and_blank_rows() {
    let catalog = load_fixture();
    assert_eq!(catalog.len(), 12);

    let names: Vec<&str> = catalog
        .courses()
        .iter()
        .map(|c| c.course_name.as_str())
        .collect();
    assert!(names.contains(&"Biology, Ecology and Earth Sciences"));
    assert!(names.contains(&"Music Performance \"Jazz\""));

    let informatics = catalog
        .courses()
        .iter()
        .find(|c| c.course_name == "Informatics")
        .expect("short row should still parse");
    assert_eq!(informatics.course_area, "Engineering");
    assert_eq!(informatics.website, "");
}

#[test]
fn test_initial_state_previews_ten_of_twelve() {
    let catalog = load_fixture();
    let outcome = query::search(&catalog, &CourseQuery::default());
    assert_eq!(outcome.visible.len(), 10);
    assert_eq!(outcome.total, 12);

    let mut buf = Vec::new();
    render::render_text(&mut buf, &catalog, &outcome).expect("render to memory");
    let text = String::from_utf8(buf).expect("utf-8 output");
    assert!(text.contains("Found 12 course(s)"));
    assert_eq!(text.matches("Code: ").count(), 10);
}

#[test]
fn test_typo_tolerant_course_search() {
    let catalog = load_fixture();
    let query = CourseQuery {
        course_name: "softwre enginering".into(),
        ..CourseQuery::default()
    };
    let outcome = query::search(&catalog, &query);
    assert_eq!(outcome.visible, vec![1]);
}

#[test]
fn test_area_filter_spans_multiple_areas() {
    let catalog = load_fixture();
    let query = CourseQuery {
        area: "sciences".into(),
        ..CourseQuery::default()
    };
    // Natural Sciences and Social Sciences rows, insertion order.
    assert_eq!(query::search(&catalog, &query).visible, vec![3, 8, 11]);
}

#[test]
fn test_degree_filter_with_university_sort_is_stable() {
    let catalog = load_fixture();
    let query = CourseQuery {
        degree_type: "Master".into(),
        sort: Some(SortKey::University),
        ..CourseQuery::default()
    };
    let outcome = query::search(&catalog, &query);
    // Both Tartu State University rows keep insertion order at the tail.
    assert_eq!(outcome.visible, vec![10, 7, 9, 1, 8]);
    assert_eq!(outcome.total, 5);
}

#[test]
fn test_combined_filters_narrow_with_and() {
    let catalog = load_fixture();
    let query = CourseQuery {
        university: "tartu".into(),
        degree_type: "Master".into(),
        ..CourseQuery::default()
    };
    assert_eq!(query::search(&catalog, &query).visible, vec![1, 8]);
}

#[test]
fn test_no_match_renders_empty_state() {
    let catalog = load_fixture();
    let query = CourseQuery {
        degree_type: "Doctorate".into(),
        ..CourseQuery::default()
    };
    let outcome = query::search(&catalog, &query);
    assert_eq!(outcome.total, 0);

    let mut buf = Vec::new();
    render::render_text(&mut buf, &catalog, &outcome).expect("render to memory");
    let text = String::from_utf8(buf).expect("utf-8 output");
    assert!(text.contains("Found 0 course(s)"));
    assert!(text.contains("No courses match the current filters."));
}

#[test]
fn test_json_reports_full_count_over_capped_visible() {
    let catalog = load_fixture();
    let outcome = query::search(&catalog, &CourseQuery::default());

    let mut buf = Vec::new();
    render::render_json(&mut buf, &catalog, &outcome).expect("render to memory");
    let doc: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");
    assert_eq!(doc["count"], 12);
    assert_eq!(doc["courses"].as_array().map(Vec::len), Some(10));
}

#[test]
fn test_selection_helpers_list_distinct_values() {
    let catalog = load_fixture();
    assert_eq!(catalog.degree_types(), vec!["Bachelor", "Master"]);
    assert_eq!(catalog.university_names().len(), 8);
}

#[test]
fn test_missing_dataset_is_io_error() {
    let err = Catalog::load(&fixture_path("absent.csv")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn test_invalid_utf8_dataset_is_malformed() {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(b"Course Name,University\n\xff\xfe,broken\n")
        .expect("write temp dataset");
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Malformed(_)));
}
