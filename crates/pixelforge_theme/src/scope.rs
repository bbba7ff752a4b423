//! Theme scope and read accessors
//!
//! A [`ThemeScope`] installs a controller as the process-wide current
//! scope. Reading theme values requires a mounted scope; doing so without
//! one is a programming error and panics with a descriptive message.
//! Concurrent scopes are not supported: mounting a new scope replaces the
//! previous one.

use crate::state::{ThemeContextValue, ThemeController, ThemeHandles, ThemeOptions};
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

static CURRENT_SCOPE: RwLock<Option<Arc<ThemeController>>> = RwLock::new(None);

const NO_SCOPE: &str =
    "no theme scope is mounted. Create a ThemeScope before reading theme values.";

/// Guard representing a mounted theming scope.
///
/// Dropping the guard unmounts the scope and tears the controller down,
/// restoring the document root to the state it was found in.
pub struct ThemeScope {
    controller: Arc<ThemeController>,
}

impl ThemeScope {
    /// Mount a scope with the given configuration and platform handles.
    pub fn mount(options: ThemeOptions, handles: ThemeHandles) -> Self {
        let controller = ThemeController::new(options, handles);
        *CURRENT_SCOPE.write().unwrap() = Some(controller.clone());
        Self { controller }
    }

    /// The controller backing this scope, for mutations such as
    /// `set_mode` and `set_tokens`.
    pub fn controller(&self) -> &ThemeController {
        &self.controller
    }
}

impl Drop for ThemeScope {
    fn drop(&mut self) {
        {
            let mut current = CURRENT_SCOPE.write().unwrap();
            if let Some(mounted) = current.as_ref() {
                if Arc::ptr_eq(mounted, &self.controller) {
                    *current = None;
                }
            }
        }
        self.controller.teardown();
    }
}

/// Read the current theme context.
///
/// # Panics
///
/// Panics when no scope is mounted; consuming theme values outside a
/// scope is a misuse error, not a recoverable condition.
pub fn use_theme() -> ThemeContextValue {
    try_use_theme().expect(NO_SCOPE)
}

/// Read the current theme context if a scope is mounted.
pub fn try_use_theme() -> Option<ThemeContextValue> {
    CURRENT_SCOPE
        .read()
        .unwrap()
        .as_ref()
        .map(|controller| controller.context_value())
}

/// Read only the projected CSS variables of the current scope.
///
/// # Panics
///
/// Panics when no scope is mounted, like [`use_theme`].
pub fn use_css_variables() -> IndexMap<String, String> {
    let current = CURRENT_SCOPE.read().unwrap();
    current.as_ref().expect(NO_SCOPE).css_variables()
}
