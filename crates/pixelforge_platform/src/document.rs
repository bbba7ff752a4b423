//! Document root surface
//!
//! The theme controller writes one attribute plus a set of CSS custom
//! properties onto a document root. The root is an owned handle passed in
//! at construction, not an ambient global, so independent controllers can
//! target independent documents.

use indexmap::IndexMap;
use std::sync::Mutex;

/// Mutable attribute/style surface of a document root element.
pub trait DocumentRoot: Send + Sync {
    fn set_attribute(&self, name: &str, value: &str);

    fn remove_attribute(&self, name: &str);

    /// Set an inline CSS custom property, e.g. `--pf-color-primary`.
    fn set_css_property(&self, name: &str, value: &str);

    fn remove_css_property(&self, name: &str);
}

#[derive(Default)]
struct DocumentState {
    attributes: IndexMap<String, String>,
    properties: IndexMap<String, String>,
}

/// Document root held entirely in memory.
///
/// Serves headless environments and tests; web embedders implement
/// [`DocumentRoot`] over the real DOM instead.
#[derive(Default)]
pub struct InMemoryDocument {
    state: Mutex<DocumentState>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.state.lock().unwrap().attributes.get(name).cloned()
    }

    pub fn css_property(&self, name: &str) -> Option<String> {
        self.state.lock().unwrap().properties.get(name).cloned()
    }

    /// Names of all inline custom properties, in insertion order.
    pub fn css_property_names(&self) -> Vec<String> {
        self.state.lock().unwrap().properties.keys().cloned().collect()
    }

    /// True when no attributes and no custom properties are set.
    pub fn is_pristine(&self) -> bool {
        let state = self.state.lock().unwrap();
        state.attributes.is_empty() && state.properties.is_empty()
    }
}

impl DocumentRoot for InMemoryDocument {
    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.state.lock().unwrap().attributes.shift_remove(name);
    }

    fn set_css_property(&self, name: &str, value: &str) {
        self.state
            .lock()
            .unwrap()
            .properties
            .insert(name.to_string(), value.to_string());
    }

    fn remove_css_property(&self, name: &str) {
        self.state.lock().unwrap().properties.shift_remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_attributes_and_properties() {
        let document = InMemoryDocument::new();
        assert!(document.is_pristine());

        document.set_attribute("data-theme", "dark");
        document.set_css_property("--pf-color-primary", "#4f46e5");

        assert_eq!(document.attribute("data-theme"), Some("dark".to_string()));
        assert_eq!(
            document.css_property("--pf-color-primary"),
            Some("#4f46e5".to_string())
        );
        assert!(!document.is_pristine());
    }

    #[test]
    fn removal_restores_pristine_state() {
        let document = InMemoryDocument::new();
        document.set_attribute("data-theme", "light");
        document.set_css_property("--pf-spacing-md", "1rem");

        document.remove_attribute("data-theme");
        document.remove_css_property("--pf-spacing-md");
        assert!(document.is_pristine());
    }

    #[test]
    fn property_names_preserve_insertion_order() {
        let document = InMemoryDocument::new();
        document.set_css_property("--pf-color-primary", "#4f46e5");
        document.set_css_property("--pf-spacing-md", "1rem");
        document.set_css_property("--pf-z-index-modal", "1400");

        assert_eq!(
            document.css_property_names(),
            vec![
                "--pf-color-primary".to_string(),
                "--pf-spacing-md".to_string(),
                "--pf-z-index-modal".to_string(),
            ]
        );
    }
}
