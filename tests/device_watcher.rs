use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use minbar::viewport::{
    DeviceClass, DeviceWatcher, ResizeListener, Subscription, ViewportProvider,
};

/// Test double: settable width plus manually synthesized notifications.
struct FakeViewport {
    width: AtomicU32,
    listeners: Arc<Mutex<HashMap<u64, Arc<dyn Fn() + Send + Sync>>>>,
    next_id: AtomicU64,
}

impl FakeViewport {
    fn new(width: u32) -> Arc<Self> {
        Arc::new(Self {
            width: AtomicU32::new(width),
            listeners: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(0),
        })
    }

    fn resize_to(&self, width: u32) {
        self.width.store(width, Ordering::SeqCst);
        self.fire();
    }

    /// Deliver a resize notification without changing the width.
    ///
    /// Invokes a snapshot of the listeners outside the map lock, so a
    /// listener may cancel its own registration mid-notification.
    fn fire(&self) {
        let snapshot: Vec<_> = self.listeners.lock().values().cloned().collect();
        for listener in snapshot {
            listener();
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl ViewportProvider for FakeViewport {
    fn current_width(&self) -> u32 {
        self.width.load(Ordering::SeqCst)
    }

    fn on_resize(&self, listener: ResizeListener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners.lock().insert(id, Arc::from(listener));
        let listeners = Arc::clone(&self.listeners);
        Subscription::new(move || {
            listeners.lock().remove(&id);
        })
    }
}

#[test]
fn activation_classifies_immediately() {
    let viewport = FakeViewport::new(500);
    let mut watcher = DeviceWatcher::new(viewport.clone());
    watcher.activate();

    // No notification was delivered; the value comes from the synchronous
    // read at activation.
    assert!(watcher.is_active());
    assert_eq!(watcher.current(), DeviceClass::Mobile);
    assert_eq!(viewport.listener_count(), 1);
}

#[test]
fn notifications_update_in_delivery_order() {
    let viewport = FakeViewport::new(500);
    let mut watcher = DeviceWatcher::new(viewport.clone());
    watcher.activate();
    assert_eq!(watcher.current(), DeviceClass::Mobile);

    viewport.resize_to(900);
    assert_eq!(watcher.current(), DeviceClass::Tablet);

    viewport.resize_to(1200);
    assert_eq!(watcher.current(), DeviceClass::Desktop);
}

#[test]
fn change_callback_fires_only_on_transitions() {
    let viewport = FakeViewport::new(500);
    let changes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&changes);

    let mut watcher = DeviceWatcher::new(viewport.clone()).with_on_change(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    watcher.activate();

    viewport.resize_to(900);
    viewport.resize_to(1200);
    // Same width again: value must stay put and the callback must not fire.
    viewport.fire();
    viewport.resize_to(1100);

    assert_eq!(watcher.current(), DeviceClass::Desktop);
    assert_eq!(changes.load(Ordering::SeqCst), 2);
}

#[test]
fn deactivate_unregisters_the_listener() {
    let viewport = FakeViewport::new(500);
    let mut watcher = DeviceWatcher::new(viewport.clone());
    watcher.activate();
    assert_eq!(viewport.listener_count(), 1);

    watcher.deactivate();
    assert!(!watcher.is_active());
    assert_eq!(viewport.listener_count(), 0);

    // Further notifications produce no updates.
    viewport.resize_to(1200);
    assert_eq!(watcher.current(), DeviceClass::Mobile);

    // Idempotent.
    watcher.deactivate();
}

#[test]
fn drop_unregisters_the_listener() {
    let viewport = FakeViewport::new(500);
    {
        let mut watcher = DeviceWatcher::new(viewport.clone());
        watcher.activate();
        assert_eq!(viewport.listener_count(), 1);
    }
    assert_eq!(viewport.listener_count(), 0);
}

#[test]
fn independent_watchers_do_not_interfere() {
    let phone = FakeViewport::new(400);
    let desk = FakeViewport::new(1600);

    let mut first = DeviceWatcher::new(phone.clone());
    let mut second = DeviceWatcher::new(desk.clone());
    first.activate();
    second.activate();

    assert_eq!(first.current(), DeviceClass::Mobile);
    assert_eq!(second.current(), DeviceClass::Desktop);

    phone.resize_to(800);
    assert_eq!(first.current(), DeviceClass::Tablet);
    assert_eq!(second.current(), DeviceClass::Desktop);
}

#[test]
fn listener_may_cancel_itself_during_notification() {
    let viewport = FakeViewport::new(500);

    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let inner = Arc::clone(&slot);
    let subscription = viewport.on_resize(Box::new(move || {
        if let Some(mut subscription) = inner.lock().take() {
            subscription.cancel();
        }
    }));
    *slot.lock() = Some(subscription);
    assert_eq!(viewport.listener_count(), 1);

    // Must not deadlock on the listener map.
    viewport.fire();
    assert_eq!(viewport.listener_count(), 0);
}

#[test]
fn reactivation_is_a_fresh_cycle() {
    let viewport = FakeViewport::new(500);
    let mut watcher = DeviceWatcher::new(viewport.clone());
    watcher.activate();
    assert_eq!(watcher.current(), DeviceClass::Mobile);
    watcher.deactivate();

    // Width changed while inactive; activation must re-read it.
    viewport.width.store(1200, Ordering::SeqCst);
    watcher.activate();
    assert_eq!(watcher.current(), DeviceClass::Desktop);
    assert_eq!(viewport.listener_count(), 1);
}
