//! Popup visibility and the scoped outside-click listener.
//!
//! While the popup is open it owns a [`ListenerGuard`]; the guard is the
//! only record of the document-level listener, so dropping it (on close,
//! on picker drop, on any other path) detaches the listener.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, trace};

/// Handle for an attached outside-click listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The environment that delivers document-level clicks.
///
/// A web host would add and remove a `click` listener on the document; a
/// terminal host might route mouse events. The picker only requires that
/// every id handed out by `attach_outside_click` is eventually passed back
/// to `detach_outside_click` exactly once.
pub trait ListenerHost {
    /// Starts delivering outside clicks and returns a handle for them.
    fn attach_outside_click(&self) -> ListenerId;

    /// Stops delivering outside clicks for `id`.
    fn detach_outside_click(&self, id: ListenerId);
}

/// A host with no real document: hands out ids and counts live listeners.
#[derive(Debug, Default)]
pub struct DetachedHost {
    next_id: Cell<u64>,
    live: Cell<usize>,
}

impl DetachedHost {
    /// Returns the number of listeners currently attached.
    pub fn live_listeners(&self) -> usize {
        self.live.get()
    }
}

impl ListenerHost for DetachedHost {
    fn attach_outside_click(&self) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.live.set(self.live.get() + 1);
        id
    }

    fn detach_outside_click(&self, _id: ListenerId) {
        self.live.set(self.live.get().saturating_sub(1));
    }
}

/// Detaches its listener when dropped.
pub struct ListenerGuard {
    host: Rc<dyn ListenerHost>,
    id: ListenerId,
}

impl ListenerGuard {
    /// Attaches a listener on `host`.
    pub fn attach(host: Rc<dyn ListenerHost>) -> Self {
        let id = host.attach_outside_click();
        trace!(id = id.0, "outside-click listener attached");
        Self { host, id }
    }

    /// Returns the listener handle.
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.host.detach_outside_click(self.id);
        trace!(id = self.id.0, "outside-click listener detached");
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

/// Open/closed state of the picker popup.
pub struct Popup {
    host: Rc<dyn ListenerHost>,
    listener: Option<ListenerGuard>,
    pending_close: Option<Duration>,
}

impl Popup {
    /// Creates a closed popup that attaches listeners on `host`.
    pub fn new(host: Rc<dyn ListenerHost>) -> Self {
        Self {
            host,
            listener: None,
            pending_close: None,
        }
    }

    /// Returns `true` while the popup is visible.
    pub fn is_open(&self) -> bool {
        self.listener.is_some()
    }

    /// Returns the time left before a scheduled close.
    pub fn pending_close(&self) -> Option<Duration> {
        self.pending_close
    }

    /// Opens the popup. Returns `true` if it was closed.
    ///
    /// Opening cancels any scheduled close.
    pub fn open(&mut self) -> bool {
        self.pending_close = None;
        if self.is_open() {
            return false;
        }
        self.listener = Some(ListenerGuard::attach(Rc::clone(&self.host)));
        debug!("popup opened");
        true
    }

    /// Closes the popup. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        self.pending_close = None;
        match self.listener.take() {
            Some(guard) => {
                drop(guard);
                debug!("popup closed");
                true
            }
            None => false,
        }
    }

    /// Schedules a close after `delay`. A zero delay closes immediately.
    /// Returns `true` if the popup closed now.
    pub fn schedule_close(&mut self, delay: Duration) -> bool {
        if !self.is_open() {
            return false;
        }
        if delay.is_zero() {
            return self.close();
        }
        trace!(?delay, "close scheduled");
        self.pending_close = Some(delay);
        false
    }

    /// Advances the scheduled close by `elapsed`. Returns `true` if the
    /// popup closed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(remaining) = self.pending_close else {
            return false;
        };
        match remaining.checked_sub(elapsed) {
            Some(left) if !left.is_zero() => {
                self.pending_close = Some(left);
                false
            }
            _ => self.close(),
        }
    }

    /// Handles a click delivered by the outside-click listener. Returns
    /// `true` if the popup closed.
    ///
    /// Clicks are ignored while closed, since no listener is attached then.
    pub fn outside_click(&mut self, inside_root: bool) -> bool {
        if inside_root || !self.is_open() {
            return false;
        }
        self.close()
    }
}

impl fmt::Debug for Popup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Popup")
            .field("listener", &self.listener)
            .field("pending_close", &self.pending_close)
            .finish()
    }
}
