//! Theme state controller
//!
//! [`ThemeController`] owns the live theme state for one document root: the
//! declared mode, the sampled system preference, and the cumulative custom
//! token overrides. Every state change re-resolves the active scheme and
//! reprojects CSS variables onto the document, removing exactly the
//! variables written by the previous application so no stale variable
//! survives a switch.
//!
//! All platform access goes through injected [`ThemeHandles`]; a missing
//! handle degrades that capability to in-memory-only operation.

use crate::css::css_variables;
use crate::merge::{merge, merge_overrides};
use crate::presets::{base_tokens, dark_overrides};
use crate::theme::{resolve, ColorScheme, ThemeMode};
use crate::tokens::{DesignTokens, TokenOverrides};
use indexmap::IndexMap;
use pixelforge_platform::{DocumentRoot, PreferenceStore, SchemePreference, SubscriptionId};
use std::sync::{Arc, RwLock};

/// Configuration for a theme controller or scope.
#[derive(Clone)]
pub struct ThemeOptions {
    /// Mode used when storage holds no recognizable value.
    pub default_mode: ThemeMode,
    /// Initial custom token overrides.
    pub custom_tokens: TokenOverrides,
    /// Storage key the declared mode is persisted under.
    pub storage_key: String,
    /// Document attribute carrying the resolved scheme.
    pub attribute: String,
    /// Whether to track OS preference changes.
    pub enable_system: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            default_mode: ThemeMode::System,
            custom_tokens: TokenOverrides::default(),
            storage_key: "pixelforge-theme".to_string(),
            attribute: "data-theme".to_string(),
            enable_system: true,
        }
    }
}

/// Injected platform resources.
///
/// Each absent handle switches the corresponding capability off: no
/// persistence, no system tracking, or no document side effects.
#[derive(Clone, Default)]
pub struct ThemeHandles {
    pub storage: Option<Arc<dyn PreferenceStore>>,
    pub scheme: Option<Arc<dyn SchemePreference>>,
    pub document: Option<Arc<dyn DocumentRoot>>,
}

/// Snapshot of the theme context handed to consumers.
#[derive(Clone, Debug)]
pub struct ThemeContextValue {
    /// Fully resolved token set: base, then dark overrides when the dark
    /// scheme is in effect, then custom overrides.
    pub tokens: DesignTokens,
    /// The declared preference.
    pub mode: ThemeMode,
    /// The scheme in effect.
    pub resolved: ColorScheme,
}

struct ControllerState {
    mode: ThemeMode,
    system_dark: bool,
    custom: TokenOverrides,
    attribute: String,
    applied_attribute: Option<String>,
    applied_vars: Vec<String>,
    subscription: Option<SubscriptionId>,
    torn_down: bool,
}

struct ControllerShared {
    storage: Option<Arc<dyn PreferenceStore>>,
    scheme: Option<Arc<dyn SchemePreference>>,
    document: Option<Arc<dyn DocumentRoot>>,
    storage_key: String,
    state: RwLock<ControllerState>,
}

/// Owner of the live theme state and the document side effects.
pub struct ThemeController {
    shared: Arc<ControllerShared>,
}

impl ThemeController {
    /// Create a controller: restore the persisted mode, sample the system
    /// preference, subscribe to preference changes, and apply the initial
    /// attribute and CSS variables.
    pub fn new(options: ThemeOptions, handles: ThemeHandles) -> Arc<Self> {
        let ThemeOptions {
            default_mode,
            custom_tokens,
            storage_key,
            attribute,
            enable_system,
        } = options;
        let ThemeHandles {
            storage,
            scheme,
            document,
        } = handles;

        let mode = match storage.as_deref().map(|store| store.read(&storage_key)) {
            // Unrecognized stored values are ignored, not errors.
            Some(Ok(Some(value))) => ThemeMode::parse(&value).unwrap_or(default_mode),
            Some(Ok(None)) | None => default_mode,
            Some(Err(err)) => {
                tracing::warn!("failed to read persisted theme mode: {err}");
                default_mode
            }
        };

        let system_dark = scheme
            .as_deref()
            .map(|scheme| scheme.prefers_dark())
            .unwrap_or(false);

        let shared = Arc::new(ControllerShared {
            storage,
            scheme,
            document,
            storage_key,
            state: RwLock::new(ControllerState {
                mode,
                system_dark,
                custom: custom_tokens,
                attribute,
                applied_attribute: None,
                applied_vars: Vec::new(),
                subscription: None,
                torn_down: false,
            }),
        });

        if enable_system {
            if let Some(scheme) = &shared.scheme {
                let weak = Arc::downgrade(&shared);
                let id = scheme.subscribe(Box::new(move |prefers_dark| {
                    if let Some(shared) = weak.upgrade() {
                        shared.on_system_change(prefers_dark);
                    }
                }));
                shared.state.write().unwrap().subscription = Some(id);
            }
        }

        shared.apply();
        Arc::new(Self { shared })
    }

    /// The declared preference.
    pub fn mode(&self) -> ThemeMode {
        self.shared.state.read().unwrap().mode
    }

    /// The scheme in effect after resolving `System` against the sampled
    /// OS preference.
    pub fn resolved(&self) -> ColorScheme {
        let state = self.shared.state.read().unwrap();
        resolve(state.mode, state.system_dark)
    }

    /// The fully resolved token set.
    pub fn tokens(&self) -> DesignTokens {
        let state = self.shared.state.read().unwrap();
        effective_tokens(resolve(state.mode, state.system_dark), &state.custom)
    }

    /// One consistent snapshot of tokens, mode, and resolved scheme.
    pub fn context_value(&self) -> ThemeContextValue {
        let state = self.shared.state.read().unwrap();
        let resolved = resolve(state.mode, state.system_dark);
        ThemeContextValue {
            tokens: effective_tokens(resolved, &state.custom),
            mode: state.mode,
            resolved,
        }
    }

    /// The projected CSS variables for the current effective tokens.
    pub fn css_variables(&self) -> IndexMap<String, String> {
        css_variables(&self.tokens())
    }

    /// Declare a new mode and persist it.
    ///
    /// A persistence failure is logged as a warning; the in-memory change
    /// still takes effect.
    pub fn set_mode(&self, mode: ThemeMode) {
        {
            let mut state = self.shared.state.write().unwrap();
            tracing::debug!(from = %state.mode, to = %mode, "switching theme mode");
            state.mode = mode;
        }
        if let Some(store) = &self.shared.storage {
            if let Err(err) = store.write(&self.shared.storage_key, mode.as_str()) {
                tracing::warn!("failed to persist theme mode: {err}");
            }
        }
        self.shared.apply();
    }

    /// Switch to the explicit opposite of the scheme currently in effect.
    pub fn toggle_mode(&self) {
        let next = match self.resolved() {
            ColorScheme::Dark => ThemeMode::Light,
            ColorScheme::Light => ThemeMode::Dark,
        };
        self.set_mode(next);
    }

    /// Layer additional overrides onto the custom token set.
    ///
    /// Calls accumulate: later overrides win key-by-key against earlier
    /// ones, under the same one-level merge rule as the base layering.
    pub fn set_tokens(&self, overrides: TokenOverrides) {
        {
            let mut state = self.shared.state.write().unwrap();
            state.custom = merge_overrides(&state.custom, &overrides);
        }
        self.shared.apply();
    }

    /// Retarget the document attribute carrying the resolved scheme. The
    /// previously used attribute name is removed from the document.
    pub fn set_attribute(&self, attribute: impl Into<String>) {
        self.shared.state.write().unwrap().attribute = attribute.into();
        self.shared.apply();
    }

    /// Unsubscribe from the system preference and remove everything this
    /// controller wrote onto the document root. Idempotent; also runs on
    /// drop.
    pub fn teardown(&self) {
        self.shared.teardown();
    }
}

impl Drop for ThemeController {
    fn drop(&mut self) {
        self.shared.teardown();
    }
}

impl ControllerShared {
    fn on_system_change(&self, prefers_dark: bool) {
        {
            let mut state = self.state.write().unwrap();
            if state.torn_down {
                return;
            }
            tracing::debug!(prefers_dark, "system color-scheme preference changed");
            state.system_dark = prefers_dark;
        }
        self.apply();
    }

    /// Recompute and reapply the document side effects: the scheme
    /// attribute, then removal of the previously written variables, then
    /// the fresh projection.
    fn apply(&self) {
        let mut state = self.state.write().unwrap();
        if state.torn_down {
            return;
        }
        let resolved = resolve(state.mode, state.system_dark);
        let Some(document) = &self.document else {
            return;
        };

        if let Some(previous) = state.applied_attribute.take() {
            if previous != state.attribute {
                document.remove_attribute(&previous);
            }
        }
        document.set_attribute(&state.attribute, resolved.as_str());
        state.applied_attribute = Some(state.attribute.clone());

        for name in state.applied_vars.drain(..) {
            document.remove_css_property(&name);
        }
        let vars = css_variables(&effective_tokens(resolved, &state.custom));
        for (name, value) in &vars {
            document.set_css_property(name, value);
        }
        state.applied_vars = vars.into_keys().collect();
    }

    fn teardown(&self) {
        let (subscription, applied_attribute, applied_vars) = {
            let mut state = self.state.write().unwrap();
            if state.torn_down {
                return;
            }
            state.torn_down = true;
            (
                state.subscription.take(),
                state.applied_attribute.take(),
                std::mem::take(&mut state.applied_vars),
            )
        };

        if let (Some(scheme), Some(id)) = (&self.scheme, subscription) {
            scheme.unsubscribe(id);
        }
        if let Some(document) = &self.document {
            if let Some(attribute) = applied_attribute {
                document.remove_attribute(&attribute);
            }
            for name in applied_vars {
                document.remove_css_property(&name);
            }
        }
    }
}

fn effective_tokens(resolved: ColorScheme, custom: &TokenOverrides) -> DesignTokens {
    let base = base_tokens();
    let themed = match resolved {
        ColorScheme::Dark => merge(&base, &dark_overrides()),
        ColorScheme::Light => base,
    };
    merge(&themed, custom)
}
