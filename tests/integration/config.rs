use assert_cmd::Command;
use jsrequire::Resolver;
use jsrequire::config::Config;

use crate::common::Fixtures;

const PROJECT_CONFIG: &str = r#"
load_paths = ["different-place"]
namespace_prefix = "javascripts"

[[web_roots]]
prefix = "."
"#;

#[test]
fn test_resolver_from_config_file() {
    let fx = Fixtures::new().unwrap();
    let path = fx.env.create_file("jsrequire.toml", PROJECT_CONFIG).unwrap();

    let config = Config::load_from(&path).unwrap();
    let resolver = Resolver::from_config(&config).unwrap();

    assert_eq!(resolver.load_paths(), &[fx.path("different-place")]);
    let result = resolver.resolve([fx.js("a.js")]).unwrap();
    assert_eq!(result.javascripts.len(), 3);
}

#[test]
fn test_cli_discovers_config_in_parent() {
    let fx = Fixtures::new().unwrap();
    fx.env.create_file("jsrequire.toml", PROJECT_CONFIG).unwrap();

    Command::cargo_bin("jsrequire")
        .unwrap()
        .current_dir(fx.path("javascripts"))
        .env_remove("JSREQUIRE_CONFIG")
        .args(["resolve", "a.js"])
        .assert()
        .success()
        .stdout("/javascripts/norequire.js\n/different-place/b.js\n/javascripts/a.js\n");
}

#[test]
fn test_cli_uses_configured_namespace_prefix() {
    let fx = Fixtures::new().unwrap();
    let path = fx.env.create_file("settings/project.toml", "namespace_prefix = \"namespace\"\n").unwrap();

    Command::cargo_bin("jsrequire")
        .unwrap()
        .current_dir(fx.root())
        .env("JSREQUIRE_CONFIG", &path)
        .args(["namespaces", "javascripts/require_filename_with_js.js"])
        .assert()
        .success()
        .stdout("namespace\n");
}

#[test]
fn test_cli_reports_invalid_config() {
    let fx = Fixtures::new().unwrap();
    fx.env.create_file("jsrequire.toml", "load_paths = \n").unwrap();

    Command::cargo_bin("jsrequire")
        .unwrap()
        .current_dir(fx.root())
        .env_remove("JSREQUIRE_CONFIG")
        .args(["resolve", "javascripts/norequire.js"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid configuration file syntax"));
}
