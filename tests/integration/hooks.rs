use jsrequire::{Directive, HookOutcome, Resolver};
use std::sync::{Arc, Mutex};

use crate::common::Fixtures;

#[test]
fn test_wildcard_hook_sees_directive() {
    let fx = Fixtures::new().unwrap();
    let seen = Arc::new(Mutex::new(Vec::<Directive>::new()));

    let mut resolver = Resolver::new();
    let log = Arc::clone(&seen);
    resolver.on(None, move |directive| {
        log.lock().unwrap().push(directive.clone());
        Ok(HookOutcome::NoChange)
    });
    resolver.resolve([fx.js("hook.js")]).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![Directive::new("view", "hello world")]);
}

#[test]
fn test_specific_hook_runs_before_wildcard() {
    let fx = Fixtures::new().unwrap();
    let order = Arc::new(Mutex::new(Vec::new()));

    let mut resolver = Resolver::new();
    let log = Arc::clone(&order);
    resolver.on(None, move |_| {
        log.lock().unwrap().push("general");
        Ok(HookOutcome::NoChange)
    });
    let log = Arc::clone(&order);
    resolver.on(Some("view"), move |directive| {
        assert_eq!(directive.parameter, "hello world");
        log.lock().unwrap().push("specific");
        Ok(HookOutcome::NoChange)
    });
    resolver.resolve([fx.js("hook.js")]).unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["specific", "general"]);
}

#[test]
fn test_hook_rewrites_to_require() {
    let fx = Fixtures::new().unwrap();

    let mut resolver = Resolver::new();
    resolver.on(Some("view"), |_| Ok(HookOutcome::replace("js", "norequire")));
    let result = resolver.resolve([fx.js("hook.js")]).unwrap();

    assert_eq!(result.javascripts, vec![fx.js("norequire.js"), fx.js("hook.js")]);
}

#[test]
fn test_hook_drops_directive() {
    let fx = Fixtures::new().unwrap();
    let called = Arc::new(Mutex::new(false));

    let mut resolver = Resolver::new();
    let flag = Arc::clone(&called);
    resolver.on(Some("view"), move |_| {
        *flag.lock().unwrap() = true;
        Ok(HookOutcome::Drop)
    });
    let result = resolver.resolve([fx.js("hook.js")]).unwrap();

    assert!(*called.lock().unwrap());
    assert_eq!(result.javascripts, vec![fx.js("hook.js")]);
}

#[test]
fn test_dropped_directive_skips_wildcard_hooks() {
    let fx = Fixtures::new().unwrap();
    let general_calls = Arc::new(Mutex::new(0));

    let mut resolver = Resolver::new();
    resolver.on(Some("view"), |_| Ok(HookOutcome::Drop));
    let count = Arc::clone(&general_calls);
    resolver.on(None, move |_| {
        *count.lock().unwrap() += 1;
        Ok(HookOutcome::NoChange)
    });
    resolver.resolve([fx.js("hook.js")]).unwrap();

    assert_eq!(*general_calls.lock().unwrap(), 0);
}

#[test]
fn test_wildcard_drop_comes_after_builtin_css_hook() {
    let fx = Fixtures::new().unwrap();

    let mut resolver = Resolver::new();
    resolver.on(None, |directive| {
        Ok(if directive.action == "css" && directive.parameter == "base" {
            HookOutcome::Drop
        } else {
            HookOutcome::NoChange
        })
    });
    let result = resolver.resolve([fx.js("requirecss.js")]).unwrap();

    // the built-in css hook runs before wildcard hooks
    assert_eq!(result.stylesheets, vec!["base.css", "style.css"]);
}

#[test]
fn test_hook_registered_on_css_runs_after_builtin() {
    let fx = Fixtures::new().unwrap();

    let mut resolver = Resolver::new();
    resolver.on_with_context(Some("css"), |directive, ctx| {
        ctx.add_stylesheet(format!("{}.print.css", directive.parameter));
        Ok(HookOutcome::NoChange)
    });
    let result = resolver.resolve([fx.js("requirecss.js")]).unwrap();

    assert_eq!(
        result.stylesheets,
        vec!["base.css", "base.print.css", "style.css", "style.print.css"]
    );
}
