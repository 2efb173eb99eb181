//! File round-trip and boundary validation.

use ordo::core::TaskTable;
use ordo::Error;

use crate::fixtures::{specs, table};

#[test]
fn roundtrip_preserves_names_and_dependencies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");

    let original = table(&[
        ("design", 2.0, 0.1, &[]),
        ("build", 5.0, 0.3, &["design"]),
        ("ship", 1.0, 0.05, &["build", "design"]),
    ]);
    original.save(&path).unwrap();

    let loaded = TaskTable::load(&path).unwrap();
    assert_eq!(loaded, original);
    assert_eq!(
        loaded.to_specs()[2].depends_on,
        vec!["build".to_string(), "design".to_string()]
    );
}

#[test]
fn dependencies_survive_row_reordering() {
    // The file keys dependencies by name, so a reordered file must
    // resolve to the same precedence relation.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");

    let mut rows = table(&[("first", 1.0, 0.2, &[]), ("second", 2.0, 0.3, &["first"])]).to_specs();
    rows.reverse();
    std::fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

    let loaded = TaskTable::load(&path).unwrap();
    let second = loaded.by_name("second").unwrap();
    let first = loaded.by_name("first").unwrap();
    assert_eq!(second.deps, vec![first.id]);
}

#[test]
fn certain_failure_probability_is_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");

    let rows = specs(&[("doomed", 1.0, 1.0, &[])]);
    std::fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

    let err = TaskTable::load(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidProbability { task, value } if task == "doomed" && value == 1.0
    ));
}

#[test]
fn unknown_dependency_is_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");

    let rows = specs(&[("a", 1.0, 0.5, &["phantom"])]);
    std::fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();

    let err = TaskTable::load(&path).unwrap_err();
    assert!(matches!(err, Error::UnknownDependency { .. }));
}

#[test]
fn malformed_json_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    std::fs::write(&path, "not json").unwrap();

    let err = TaskTable::load(&path).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = TaskTable::load(std::path::Path::new("/nonexistent/plan.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
