//! Terminal-backed viewport provider.
//!
//! Width comes from the hosting terminal; resize notifications come from
//! SIGWINCH, observed by a background thread that fans out to registered
//! listeners.

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::viewport::provider::{ResizeListener, Subscription, ViewportProvider};

/// Assumed glyph advance when the terminal reports no pixel geometry.
const FALLBACK_CELL_PX: u32 = 8;
/// Assumed column count when the terminal cannot be queried at all.
const FALLBACK_COLUMNS: u32 = 80;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

type SharedListener = Arc<dyn Fn() + Send + Sync + 'static>;
type ListenerMap = Arc<Mutex<HashMap<u64, SharedListener>>>;

pub struct TerminalViewport {
    listeners: ListenerMap,
    next_id: AtomicU64,
    stop: Arc<AtomicBool>,
}

impl TerminalViewport {
    /// Register the SIGWINCH handler, start the watcher thread, and return
    /// the provider. The thread stops when the provider is dropped.
    pub fn spawn() -> io::Result<Arc<Self>> {
        let listeners: ListenerMap = Arc::new(Mutex::new(HashMap::new()));
        let stop = Arc::new(AtomicBool::new(false));

        let sigwinch = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(libc::SIGWINCH, Arc::clone(&sigwinch))?;

        let thread_listeners = Arc::clone(&listeners);
        let thread_stop = Arc::clone(&stop);
        thread::spawn(move || loop {
            if thread_stop.load(Ordering::Relaxed) {
                break;
            }
            if sigwinch.swap(false, Ordering::Relaxed) {
                debug!("terminal resize observed");
                // Snapshot first: the map lock must not be held while
                // invoking, or a listener cancelling its own registration
                // would deadlock.
                let snapshot: Vec<SharedListener> =
                    thread_listeners.lock().values().cloned().collect();
                for listener in snapshot {
                    listener();
                }
            }
            thread::sleep(POLL_INTERVAL);
        });

        Ok(Arc::new(Self {
            listeners,
            next_id: AtomicU64::new(0),
            stop,
        }))
    }
}

impl ViewportProvider for TerminalViewport {
    fn current_width(&self) -> u32 {
        match query_window_size() {
            Some(ws) if ws.x_pixels > 0 => ws.x_pixels,
            Some(ws) => u32::from(ws.columns) * FALLBACK_CELL_PX,
            None => FALLBACK_COLUMNS * FALLBACK_CELL_PX,
        }
    }

    fn on_resize(&self, listener: ResizeListener) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().insert(id, Arc::from(listener));
        let listeners = Arc::clone(&self.listeners);
        Subscription::new(move || {
            listeners.lock().remove(&id);
        })
    }
}

impl Drop for TerminalViewport {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

struct WindowSize {
    columns: u16,
    x_pixels: u32,
}

/// Query terminal geometry using ioctl TIOCGWINSZ.
fn query_window_size() -> Option<WindowSize> {
    unsafe {
        let mut ws: libc::winsize = std::mem::zeroed();
        if libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) == 0 && ws.ws_col > 0 {
            Some(WindowSize {
                columns: ws.ws_col,
                x_pixels: u32::from(ws.ws_xpixel),
            })
        } else {
            None
        }
    }
}
