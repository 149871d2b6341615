//! In-process scheme source with live change dispatch.

use std::sync::{Arc, Mutex};

use super::{SchemeListener, SchemeSignal, SignalError, WatchId};
use crate::mode::ColorMode;

/// A scheme source driven by explicit [`ManualScheme::set`] calls.
///
/// Cloning yields a handle onto the same underlying signal, so one clone can
/// be handed to a store while another drives it. Hosts use this to bridge
/// scheme-change events from a windowing toolkit; tests use it to simulate
/// the OS flipping between light and dark.
///
/// # Example
///
/// ```rust
/// use duotone::{ColorMode, ManualScheme, MemoryStorage, ThemeStore};
///
/// let scheme = ManualScheme::new(ColorMode::Light);
/// let store = ThemeStore::initialize(MemoryStorage::new(), scheme.clone());
/// assert_eq!(store.mode(), ColorMode::Light);
///
/// scheme.set(ColorMode::Dark);
/// assert_eq!(store.mode(), ColorMode::Dark);
/// ```
#[derive(Clone)]
pub struct ManualScheme {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    mode: ColorMode,
    next_id: u64,
    listeners: Vec<(WatchId, SchemeListener)>,
}

impl ManualScheme {
    /// Creates a source reporting `mode`.
    pub fn new(mode: ColorMode) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                mode,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Updates the reported scheme, dispatching to listeners on change.
    ///
    /// Setting the value already reported is a no-op, matching platform
    /// change feeds that only fire on transitions. Listeners are invoked
    /// synchronously and must not call back into this source.
    pub fn set(&self, mode: ColorMode) {
        let mut inner = self.inner.lock().unwrap();
        if inner.mode == mode {
            return;
        }
        inner.mode = mode;
        for (_, listener) in &mut inner.listeners {
            listener(mode);
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.lock().unwrap().listeners.len()
    }
}

impl std::fmt::Debug for ManualScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap();
        f.debug_struct("ManualScheme")
            .field("mode", &inner.mode)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl SchemeSignal for ManualScheme {
    fn current(&self) -> ColorMode {
        self.inner.lock().unwrap().mode
    }

    fn watch(&self, listener: SchemeListener) -> Result<WatchId, SignalError> {
        let mut inner = self.inner.lock().unwrap();
        let id = WatchId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        Ok(id)
    }

    fn unwatch(&self, id: WatchId) {
        self.inner
            .lock()
            .unwrap()
            .listeners
            .retain(|(watch_id, _)| *watch_id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_current_reflects_set() {
        let scheme = ManualScheme::new(ColorMode::Light);
        assert_eq!(scheme.current(), ColorMode::Light);
        scheme.set(ColorMode::Dark);
        assert_eq!(scheme.current(), ColorMode::Dark);
    }

    #[test]
    fn test_set_dispatches_on_change_only() {
        let scheme = ManualScheme::new(ColorMode::Light);
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        scheme
            .watch(Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        scheme.set(ColorMode::Light);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        scheme.set(ColorMode::Dark);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unwatch_removes_listener() {
        let scheme = ManualScheme::new(ColorMode::Light);
        let id = scheme.watch(Box::new(|_| {})).unwrap();
        assert_eq!(scheme.listener_count(), 1);

        scheme.unwatch(id);
        assert_eq!(scheme.listener_count(), 0);

        // Unknown id after removal is ignored.
        scheme.unwatch(id);
    }

    #[test]
    fn test_clones_share_the_signal() {
        let scheme = ManualScheme::new(ColorMode::Light);
        let driver = scheme.clone();
        driver.set(ColorMode::Dark);
        assert_eq!(scheme.current(), ColorMode::Dark);
    }
}
