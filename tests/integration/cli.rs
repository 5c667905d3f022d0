use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::Fixtures;

fn jsrequire(fx: &Fixtures) -> Command {
    let mut cmd = Command::cargo_bin("jsrequire").unwrap();
    cmd.current_dir(fx.root()).env_remove("JSREQUIRE_CONFIG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_resolve_with_web_root() {
    let fx = Fixtures::new().unwrap();
    let root = fx.root();

    jsrequire(&fx)
        .arg("resolve")
        .arg("-I")
        .arg("javascripts")
        .arg("--web-root")
        .arg(&root)
        .arg("different-place/b.js")
        .assert()
        .success()
        .stdout("/javascripts/norequire.js\n/different-place/b.js\n");
}

#[test]
fn test_resolve_prints_absolute_paths_by_default() {
    let fx = Fixtures::new().unwrap();

    jsrequire(&fx)
        .args(["resolve", "javascripts/norequire.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains(fx.js("norequire.js").to_string_lossy().into_owned()));
}

#[test]
fn test_resolve_json() {
    let fx = Fixtures::new().unwrap();

    let output = jsrequire(&fx)
        .args(["resolve", "--format", "json", "javascripts/requirecss.js"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["stylesheets"], serde_json::json!(["base.css", "style.css"]));
    assert_eq!(
        json["javascripts"],
        serde_json::json!([fx.js("requirecss.js").to_string_lossy()])
    );
}

#[test]
fn test_resolve_missing_require_fails() {
    let fx = Fixtures::new().unwrap();

    jsrequire(&fx)
        .args(["resolve", "javascripts/require_non_existing_file.js"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File 'not_existing' not found in load paths"))
        .stderr(predicate::str::contains("--load-path"));
}

#[test]
fn test_resolve_invalid_web_root() {
    let fx = Fixtures::new().unwrap();

    jsrequire(&fx)
        .args(["resolve", "--web-root", "=/static", "javascripts/norequire.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid web root '=/static'"));
}

#[test]
fn test_tree() {
    let fx = Fixtures::new().unwrap();

    jsrequire(&fx)
        .args(["tree", "-I", "different-place", "javascripts/c.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("c.js\n"))
        .stdout(predicate::str::contains("└── "))
        .stdout(predicate::str::contains("different-place/b.js"))
        .stdout(predicate::str::contains("norequire.js"));
}

#[test]
fn test_tree_reports_cycles() {
    let fx = Fixtures::new().unwrap();
    fx.env
        .create_file("loop/x.js", "/* js y */\n")
        .and_then(|_| fx.env.create_file("loop/y.js", "/* js x */\n"))
        .unwrap();

    jsrequire(&fx)
        .args(["tree", "loop/x.js"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(circular require)"))
        .stderr(predicate::str::contains("Circular require between"));
}

#[test]
fn test_namespaces() {
    let fx = Fixtures::new().unwrap();

    jsrequire(&fx)
        .args(["namespaces", "--prefix", "javascripts", "javascripts/require_namespaced_file.js"])
        .assert()
        .success()
        .stdout("javascripts\njavascripts.namespace\n");
}

#[test]
fn test_namespaces_without_prefix_fails() {
    let fx = Fixtures::new().unwrap();

    jsrequire(&fx)
        .args(["namespaces", "javascripts/norequire.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--prefix"));
}

#[test]
fn test_missing_explicit_config() {
    let fx = Fixtures::new().unwrap();

    jsrequire(&fx)
        .args(["--config", "missing.toml", "resolve", "javascripts/norequire.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let fx = Fixtures::new().unwrap();
    fx.env.create_file("loop/x.js", "/* js x */\n").unwrap();

    jsrequire(&fx)
        .args(["--quiet", "tree", "loop/x.js"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
