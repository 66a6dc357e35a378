//! The seam between viewport consumers and the display environment.

/// Listener invoked on every viewport resize notification.
///
/// Notifications carry no payload; consumers re-read the width from the
/// provider after each one.
pub type ResizeListener = Box<dyn Fn() + Send + Sync + 'static>;

/// Source of viewport geometry and resize notifications.
///
/// Production uses [`super::TerminalViewport`]; tests supply a fake that
/// synthesizes notifications without a real display environment.
pub trait ViewportProvider: Send + Sync {
    /// Synchronous read of the current viewport width in pixels.
    fn current_width(&self) -> u32;

    /// Register `listener` for resize notifications.
    ///
    /// The registration lives until the returned handle is cancelled or
    /// dropped.
    fn on_resize(&self, listener: ResizeListener) -> Subscription;
}

/// Unsubscribe handle for a resize-listener registration.
///
/// Cancellation runs at most once; dropping the handle cancels too, so the
/// registration is released on every exit path.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + 'static>>,
}

impl Subscription {
    pub fn new<F: FnOnce() + Send + 'static>(cancel: F) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Unregister the listener. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
