//! One-shot animation trigger registry
//!
//! Entrance animations should play once per host lifetime, no matter how
//! many times the component that owns them is rebuilt. The registry keeps
//! the set of animation keys that have already fired and answers the
//! "should this play now?" question with a check-then-record step.
//!
//! The registry is an owned service, not a hidden global: callers decide
//! where it lives and how long. For hosts with a teardown event, use
//! [`TriggerRegistry::shared_with_unload`] to get a shared handle whose
//! state is cleared when the host goes away — the subscription happens
//! exactly once, at construction.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::host::UnloadSignal;

/// De-duplication store for one-shot animation keys.
///
/// Single-threaded callers use it directly; `&mut self` on
/// [`should_trigger`](Self::should_trigger) makes check-and-record
/// atomic by ownership. Cross-thread callers go through
/// [`SharedTriggerRegistry`], where the mutex provides the same
/// exactly-once guarantee.
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    fired: HashSet<String>,
}

/// Shared handle to a registry, for hosts where several owners need the
/// same one-shot state.
pub type SharedTriggerRegistry = Arc<Mutex<TriggerRegistry>>;

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared registry wired to the host teardown signal.
    ///
    /// The returned handle clears itself when `unload` fires, matching
    /// the lifetime of one host session.
    pub fn shared_with_unload(unload: &mut UnloadSignal) -> SharedTriggerRegistry {
        let registry: SharedTriggerRegistry = Arc::new(Mutex::new(Self::new()));
        let weak = Arc::downgrade(&registry);
        unload.subscribe(move || {
            if let Some(registry) = weak.upgrade() {
                if let Ok(mut registry) = registry.lock() {
                    registry.reset();
                }
            }
        });
        registry
    }

    /// Answer whether the animation for `key` should play now.
    ///
    /// Returns true exactly once per key per registry lifetime; the key
    /// is recorded as fired on that first call. Every later call returns
    /// false until [`reset`](Self::reset).
    pub fn should_trigger(&mut self, key: &str) -> bool {
        if self.fired.contains(key) {
            tracing::trace!(key, "animation already fired, suppressing");
            return false;
        }
        self.fired.insert(key.to_string());
        true
    }

    /// Pure membership query, no side effect
    pub fn has_triggered(&self, key: &str) -> bool {
        self.fired.contains(key)
    }

    /// Force-insert a key without going through `should_trigger`,
    /// for pre-seeding or tests
    pub fn mark_triggered(&mut self, key: impl Into<String>) {
        self.fired.insert(key.into());
    }

    /// Clear all recorded keys
    pub fn reset(&mut self) {
        self.fired.clear();
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}
