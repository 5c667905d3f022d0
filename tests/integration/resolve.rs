use jsrequire::{DependencyResult, JsRequireError, Resolver};
use std::path::PathBuf;

use crate::common::Fixtures;

fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .any(|cause| matches!(cause.downcast_ref::<JsRequireError>(), Some(JsRequireError::NotFound { .. })))
}

#[test]
fn test_empty_input_gives_empty_result() {
    let result = Resolver::new().resolve(Vec::<PathBuf>::new()).unwrap();
    assert_eq!(result, DependencyResult::default());
}

#[test]
fn test_file_without_requires() {
    let fx = Fixtures::new().unwrap();
    let result = Resolver::new().resolve([fx.js("norequire.js")]).unwrap();

    assert_eq!(result.javascripts, vec![fx.js("norequire.js")]);
    assert!(result.stylesheets.is_empty());
}

#[test]
fn test_recursive_dependencies_through_load_path() {
    let fx = Fixtures::new().unwrap();
    let resolver = Resolver::with_load_paths([fx.path("different-place")]);

    let result = resolver.resolve([fx.js("a.js")]).unwrap();
    assert_eq!(
        result.javascripts,
        vec![fx.js("norequire.js"), fx.path("different-place/b.js"), fx.js("a.js")]
    );
}

#[test]
fn test_multiple_entries_in_dependency_order() {
    let fx = Fixtures::new().unwrap();
    let resolver = Resolver::with_load_paths([fx.path("different-place")]);

    let result = resolver.resolve([fx.path("different-place/b.js"), fx.js("c.js")]).unwrap();
    assert_eq!(
        result.javascripts,
        vec![
            fx.js("norequire.js"),
            fx.path("different-place/b.js"),
            fx.js("a.js"),
            fx.js("c.js"),
        ]
    );
}

#[test]
fn test_requires_resolved_from_load_path() {
    let fx = Fixtures::new().unwrap();
    let resolver = Resolver::with_load_paths([fx.path("javascripts")]);

    let result = resolver.resolve([fx.path("different-place/b.js")]).unwrap();
    assert_eq!(result.javascripts, vec![fx.js("norequire.js"), fx.path("different-place/b.js")]);
}

#[test]
fn test_missing_load_path_fails() {
    let fx = Fixtures::new().unwrap();
    let err = Resolver::new().resolve([fx.path("different-place/b.js")]).unwrap_err();
    assert!(is_not_found(&err));
}

#[test]
fn test_non_existing_require_fails() {
    let fx = Fixtures::new().unwrap();
    let err = Resolver::new().resolve([fx.js("require_non_existing_file.js")]).unwrap_err();

    assert!(is_not_found(&err));
    assert!(format!("{err:#}").contains("File 'not_existing' not found in load paths"));
}

#[test]
fn test_namespaced_require() {
    let fx = Fixtures::new().unwrap();
    let result = Resolver::new().resolve([fx.js("require_namespaced_file.js")]).unwrap();
    assert_eq!(
        result.javascripts,
        vec![fx.js("namespace/a.js"), fx.js("require_namespaced_file.js")]
    );
}

#[test]
fn test_dotted_file_name() {
    let fx = Fixtures::new().unwrap();
    let result = Resolver::new().resolve([fx.js("require_filename_with_dot.js")]).unwrap();
    assert_eq!(
        result.javascripts,
        vec![fx.js("file.with.dot.js"), fx.js("require_filename_with_dot.js")]
    );
}

#[test]
fn test_namespaced_name_starting_with_js() {
    let fx = Fixtures::new().unwrap();
    let result = Resolver::new().resolve([fx.js("require_filename_with_js.js")]).unwrap();
    assert_eq!(
        result.javascripts,
        vec![fx.js("namespace/json_reader.js"), fx.js("require_filename_with_js.js")]
    );
}

#[test]
fn test_stylesheets() {
    let fx = Fixtures::new().unwrap();
    let result = Resolver::new().resolve([fx.js("requirecss.js")]).unwrap();
    assert_eq!(result.stylesheets, vec!["base.css", "style.css"]);
}

#[test]
fn test_search_path_order() {
    let fx = Fixtures::new().unwrap();
    let resolver = Resolver::with_load_paths([fx.path("different-place")]);

    let search_path = resolver.search_path_for([fx.js("norequire.js"), fx.js("requirecss.js")]);
    assert_eq!(search_path.dirs(), &[fx.path("javascripts"), fx.path("different-place")]);
    assert_eq!(resolver.load_paths(), &[fx.path("different-place")]);
}

#[test]
fn test_each_file_listed_once() {
    let fx = Fixtures::new().unwrap();
    let resolver = Resolver::with_load_paths([fx.path("different-place")]);

    let result = resolver
        .resolve([fx.js("c.js"), fx.js("a.js"), fx.path("different-place/b.js"), fx.js("c.js")])
        .unwrap();

    let mut unique = result.javascripts.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), result.javascripts.len());
    assert_eq!(result.javascripts.last(), Some(&fx.js("c.js")));
}

#[test]
fn test_result_serializes_to_json() {
    let fx = Fixtures::new().unwrap();
    let result = Resolver::new().resolve([fx.js("requirecss.js")]).unwrap();

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["stylesheets"], serde_json::json!(["base.css", "style.css"]));
    assert_eq!(json["javascripts"].as_array().map(Vec::len), Some(1));
}
