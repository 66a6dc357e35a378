//! Single-slot observation of the current device class.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::viewport::provider::{Subscription, ViewportProvider};
use crate::viewport::{classify, DeviceClass};

/// Holds the latest device classification for one consumer.
///
/// `activate()` classifies immediately from the current width and then
/// follows the provider's resize notifications, overwriting the slot on each
/// one. The listener registration is released by `deactivate()` or on drop.
/// Independent watchers share nothing.
pub struct DeviceWatcher {
    provider: Arc<dyn ViewportProvider>,
    current: Arc<RwLock<DeviceClass>>,
    on_change: Option<Arc<dyn Fn(DeviceClass) + Send + Sync>>,
    subscription: Option<Subscription>,
}

impl DeviceWatcher {
    pub fn new(provider: Arc<dyn ViewportProvider>) -> Self {
        let current = Arc::new(RwLock::new(classify(provider.current_width())));
        Self {
            provider,
            current,
            on_change: None,
            subscription: None,
        }
    }

    /// Register a callback fired when the classification changes.
    ///
    /// Notifications that re-classify to the same value do not fire it.
    pub fn with_on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(DeviceClass) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    /// Classify from the current width, then subscribe to resize
    /// notifications. Idempotent while active.
    pub fn activate(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let slot = Arc::clone(&self.current);
        *slot.write() = classify(self.provider.current_width());

        let provider = Arc::clone(&self.provider);
        let on_change = self.on_change.clone();
        self.subscription = Some(self.provider.on_resize(Box::new(move || {
            let next = classify(provider.current_width());
            let prev = std::mem::replace(&mut *slot.write(), next);
            if prev != next {
                debug!(from = %prev, to = %next, "device class changed");
                if let Some(on_change) = &on_change {
                    on_change(next);
                }
            }
        })));
    }

    /// The most recent classification.
    pub fn current(&self) -> DeviceClass {
        *self.current.read()
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Unregister the resize listener. Safe to call more than once;
    /// re-activation afterwards starts a fresh cycle.
    pub fn deactivate(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}

impl Drop for DeviceWatcher {
    fn drop(&mut self) {
        self.deactivate();
    }
}
