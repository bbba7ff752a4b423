//! PixelForge platform abstraction
//!
//! Resource handles the theming layer depends on, kept behind traits so the
//! same controller runs against a browser document, a native shell, or
//! plain memory in tests:
//!
//! - [`PreferenceStore`]: durable string key-value storage for the declared
//!   theme mode (`MemoryStore`, `FileStore`)
//! - [`SchemePreference`]: the OS dark-mode preference as a query plus a
//!   change subscription (`StaticScheme`, `SimulatedScheme`)
//! - [`DocumentRoot`]: the attribute/style surface of a document root
//!   element (`InMemoryDocument`)
//!
//! Every handle is owned and injected; nothing in this crate touches
//! process globals.

pub mod document;
pub mod error;
pub mod scheme;
pub mod storage;

// Re-export commonly used types
pub use document::{DocumentRoot, InMemoryDocument};
pub use error::{PlatformError, Result};
pub use scheme::{SchemeCallback, SchemePreference, SimulatedScheme, StaticScheme, SubscriptionId};
pub use storage::{FileStore, MemoryStore, PreferenceStore};
