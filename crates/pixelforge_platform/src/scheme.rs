//! System color-scheme preference
//!
//! Exposes the OS "prefers dark" answer as a one-shot query plus a change
//! subscription. Platform embedders bridge their native notification into
//! a [`SimulatedScheme`]; [`StaticScheme`] fixes the answer for headless
//! runs.

use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};

/// Callback invoked with the new "prefers dark" value on each change.
pub type SchemeCallback = Box<dyn Fn(bool) + Send + Sync>;

/// Identifier for an active scheme subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Source of the system dark-mode preference.
pub trait SchemePreference: Send + Sync {
    /// Whether the user currently prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// Register `callback` for change notifications.
    fn subscribe(&self, callback: SchemeCallback) -> SubscriptionId;

    /// Remove a previously registered callback. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Fixed preference that never changes or notifies.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticScheme {
    prefers_dark: bool,
}

impl StaticScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }

    pub fn light() -> Self {
        Self::new(false)
    }

    pub fn dark() -> Self {
        Self::new(true)
    }
}

impl SchemePreference for StaticScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }

    fn subscribe(&self, _callback: SchemeCallback) -> SubscriptionId {
        SubscriptionId(0)
    }

    fn unsubscribe(&self, _id: SubscriptionId) {}
}

struct SimulatedState {
    prefers_dark: bool,
    next_id: u64,
    subscribers: FxHashMap<u64, Arc<SchemeCallback>>,
}

/// Manually driven preference source.
///
/// Embedders feed native change notifications through
/// [`set_prefers_dark`](SimulatedScheme::set_prefers_dark); tests use it to
/// script preference flips. Subscribers are notified at most once per
/// actual change.
pub struct SimulatedScheme {
    state: Mutex<SimulatedState>,
}

impl SimulatedScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            state: Mutex::new(SimulatedState {
                prefers_dark,
                next_id: 1,
                subscribers: FxHashMap::default(),
            }),
        }
    }

    /// Update the preference, notifying subscribers when the value changed.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let callbacks: Vec<Arc<SchemeCallback>> = {
            let mut state = self.state.lock().unwrap();
            if state.prefers_dark == prefers_dark {
                return;
            }
            state.prefers_dark = prefers_dark;
            state.subscribers.values().cloned().collect()
        };
        // Callbacks run outside the lock so they may re-enter this source.
        for callback in callbacks {
            (*callback)(prefers_dark);
        }
    }
}

impl Default for SimulatedScheme {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SchemePreference for SimulatedScheme {
    fn prefers_dark(&self) -> bool {
        self.state.lock().unwrap().prefers_dark
    }

    fn subscribe(&self, callback: SchemeCallback) -> SubscriptionId {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.insert(id, Arc::new(callback));
        SubscriptionId(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.state.lock().unwrap().subscribers.remove(&id.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn notifies_once_per_actual_change() {
        let scheme = SimulatedScheme::new(false);
        let notified = Arc::new(AtomicUsize::new(0));

        let count = notified.clone();
        scheme.subscribe(Box::new(move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        }));

        scheme.set_prefers_dark(false); // unchanged, no notification
        assert_eq!(notified.load(Ordering::SeqCst), 0);

        scheme.set_prefers_dark(true);
        scheme.set_prefers_dark(true); // unchanged again
        assert_eq!(notified.load(Ordering::SeqCst), 1);

        scheme.set_prefers_dark(false);
        assert_eq!(notified.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let scheme = SimulatedScheme::new(false);
        let notified = Arc::new(AtomicUsize::new(0));

        let count = notified.clone();
        let id = scheme.subscribe(Box::new(move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        }));

        scheme.unsubscribe(id);
        scheme.set_prefers_dark(true);
        assert_eq!(notified.load(Ordering::SeqCst), 0);
        assert!(scheme.prefers_dark());
    }

    #[test]
    fn callback_receives_new_value() {
        let scheme = SimulatedScheme::new(false);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let values = seen.clone();
        scheme.subscribe(Box::new(move |dark| {
            values.lock().unwrap().push(dark);
        }));

        scheme.set_prefers_dark(true);
        scheme.set_prefers_dark(false);
        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }
}
