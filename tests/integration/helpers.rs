use jsrequire::{Resolver, WebRoots, derive_namespaces, rewrite_to_web_paths};

use crate::common::Fixtures;

fn resolve_b(fx: &Fixtures) -> Vec<std::path::PathBuf> {
    Resolver::with_load_paths([fx.path("javascripts")])
        .resolve([fx.path("different-place/b.js")])
        .unwrap()
        .javascripts
}

#[test]
fn test_web_paths_with_single_root() {
    let fx = Fixtures::new().unwrap();
    let files = resolve_b(&fx);
    let root = fx.root().to_string_lossy().into_owned();

    assert_eq!(
        rewrite_to_web_paths(&files, &WebRoots::from(root.as_str())),
        vec!["/javascripts/norequire.js", "/different-place/b.js"]
    );
    assert_eq!(
        rewrite_to_web_paths(&files, &WebRoots::from(vec![root])),
        vec!["/javascripts/norequire.js", "/different-place/b.js"]
    );
}

#[test]
fn test_web_paths_with_mapping() {
    let fx = Fixtures::new().unwrap();
    let files = resolve_b(&fx);

    let roots: WebRoots = [
        (fx.path("javascripts").to_string_lossy().into_owned(), "/bernd".to_string()),
        (fx.path("different-place").to_string_lossy().into_owned(), "/baerbel".to_string()),
    ]
    .into_iter()
    .collect();

    assert_eq!(rewrite_to_web_paths(&files, &roots), vec!["/bernd/norequire.js", "/baerbel/b.js"]);
}

#[test]
fn test_namespaces_of_resolved_files() {
    let fx = Fixtures::new().unwrap();
    let result = Resolver::new()
        .resolve([fx.js("require_namespaced_file.js"), fx.js("require_filename_with_js.js")])
        .unwrap();

    assert_eq!(derive_namespaces(&result.javascripts, "namespace"), vec!["namespace"]);
    assert_eq!(derive_namespaces(&result.javascripts, "javascripts"), vec!["javascripts", "javascripts.namespace"]);
}

#[test]
fn test_namespaces_of_plain_paths() {
    let js = [
        "/platform/public/javascripts/si/module/Hastenichtgesehen.js",
        "/platform/public/javascripts/si/desktop/Wurstwaren.js",
        "/platform/public/javascripts/si/applet/GeradNeu.js",
    ];
    assert_eq!(derive_namespaces(&js, "si"), vec!["si.applet", "si.desktop", "si.module"]);
}
