//! PixelForge Theme System
//!
//! Design tokens, CSS custom-property projection, and light/dark theme
//! state for PixelForge UI.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Design tokens**: Colors, spacing, typography, radii, shadows,
//!   motion, and z-index layers as open, order-preserving mappings
//! - **Token merging**: One-level-per-category layering of sparse
//!   overrides over the complete base set
//! - **CSS variable projection**: A flat `--pf-*` variable map plus a
//!   rule-block serializer and a static light/dark style-sheet generator
//! - **Theme state**: `light | dark | system` mode resolution against the
//!   OS preference, durable persistence, and live application onto a
//!   document root
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pixelforge_theme::{use_theme, ThemeHandles, ThemeOptions, ThemeScope};
//!
//! // Mount a theming scope at app startup
//! let scope = ThemeScope::mount(ThemeOptions::default(), ThemeHandles {
//!     storage: Some(store),
//!     scheme: Some(scheme),
//!     document: Some(document),
//! });
//!
//! // Read theme values in components
//! let theme = use_theme();
//! let mode = theme.mode;
//!
//! // Request changes through the controller
//! scope.controller().set_mode(pixelforge_theme::ThemeMode::Dark);
//! ```
//!
//! # Architecture
//!
//! Data flows one way: token store → merger (base, then dark overrides
//! when the dark scheme is in effect, then custom overrides) → projector
//! (flat variable map) → controller, which writes
//! the resolved scheme attribute and the variables onto the document root
//! and removes exactly what it wrote on the next change or at teardown.
//!
//! Platform access (storage, OS preference, document) goes through the
//! injected handles of [`pixelforge_platform`]; a missing handle degrades
//! that capability instead of failing.
//!
//! # Server-side rendering
//!
//! [`theme_style_sheet`] emits a `:root` block and a
//! `[data-theme="dark"]` block as plain CSS text for server-rendered or
//! no-JS contexts where no controller runs.

pub mod css;
pub mod error;
pub mod merge;
pub mod presets;
pub mod scope;
pub mod state;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use css::{
    css_variables, default_theme_style_sheet, serialize, theme_style_sheet, DARK_SELECTOR,
    ROOT_SELECTOR,
};
pub use error::ThemeError;
pub use merge::{merge, merge_overrides};
pub use presets::{base_tokens, dark_overrides};
pub use scope::{try_use_theme, use_css_variables, use_theme, ThemeScope};
pub use state::{ThemeContextValue, ThemeController, ThemeHandles, ThemeOptions};
pub use theme::{resolve, ColorScheme, ThemeMode};
pub use tokens::*;
