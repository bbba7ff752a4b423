use pixelforge_platform::{DocumentRoot, InMemoryDocument};
use pixelforge_theme::{
    try_use_theme, use_css_variables, use_theme, ColorScheme, ThemeHandles, ThemeMode,
    ThemeOptions, ThemeScope,
};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

// The current scope is process-wide state, so the whole lifecycle runs in
// a single test to keep it deterministic under the parallel test runner.
#[test]
fn scope_lifecycle_and_loud_failure_outside_a_scope() {
    assert!(try_use_theme().is_none());

    let panic = catch_unwind(AssertUnwindSafe(|| use_theme())).unwrap_err();
    let message = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_default();
    assert!(
        message.contains("no theme scope is mounted"),
        "unexpected panic message: {message}"
    );

    let document = Arc::new(InMemoryDocument::new());
    let document_dyn: Arc<dyn DocumentRoot> = document.clone();
    let scope = ThemeScope::mount(
        ThemeOptions {
            default_mode: ThemeMode::Light,
            ..ThemeOptions::default()
        },
        ThemeHandles {
            document: Some(document_dyn),
            ..ThemeHandles::default()
        },
    );

    let theme = use_theme();
    assert_eq!(theme.mode, ThemeMode::Light);
    assert_eq!(theme.resolved, ColorScheme::Light);
    assert!(theme.tokens.colors.contains_key("primary"));

    let vars = use_css_variables();
    assert_eq!(vars.get("--pf-color-primary-500"), Some(&"#6366f1".to_string()));

    scope.controller().set_mode(ThemeMode::Dark);
    assert_eq!(use_theme().resolved, ColorScheme::Dark);
    assert_eq!(document.attribute("data-theme"), Some("dark".to_string()));

    drop(scope);
    assert!(try_use_theme().is_none());
    assert!(document.is_pristine());
}
