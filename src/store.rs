//! The theme preference store.

use std::sync::{Arc, Mutex, Weak};

use log::{debug, warn};

use crate::mode::ColorMode;
use crate::preference::{self, StoredPreference, PREFERENCE_KEY};
use crate::signal::{SchemeSignal, SignalError, WatchId};
use crate::storage::PreferenceStorage;

/// Single source of truth for the effective color mode.
///
/// The store reconciles three competing inputs: an explicit user override
/// persisted in storage, the prior persisted choice read at initialization,
/// and the live OS scheme. While no override exists the effective mode
/// tracks the OS signal; the first [`ThemeStore::toggle`] freezes it to the
/// user's choice until [`ThemeStore::follow_system`] clears the override.
///
/// Both the persistence backend and the scheme source are injected, so the
/// store can run against the real platform or against in-process fakes in
/// tests.
///
/// # Example
///
/// ```rust
/// use duotone::{ColorMode, ManualScheme, MemoryStorage, ThemeStore};
///
/// let scheme = ManualScheme::new(ColorMode::Dark);
/// let mut store = ThemeStore::initialize(MemoryStorage::new(), scheme.clone());
/// assert_eq!(store.mode(), ColorMode::Dark);
///
/// let sub = store.subscribe(|mode| println!("now {mode:?}"));
/// assert_eq!(store.toggle(), ColorMode::Light);
///
/// // The override is persisted; the OS flipping back is now ignored.
/// scheme.set(ColorMode::Light);
/// scheme.set(ColorMode::Dark);
/// assert_eq!(store.mode(), ColorMode::Light);
/// sub.cancel();
/// ```
pub struct ThemeStore {
    state: Arc<Mutex<StoreState>>,
    subscribers: Arc<Mutex<SubscriberSet>>,
    signal: Arc<dyn SchemeSignal + Send + Sync>,
    watch: Option<WatchId>,
}

struct StoreState {
    mode: ColorMode,
    overridden: bool,
    storage: Box<dyn PreferenceStorage + Send>,
}

type BoxedSubscriber = Box<dyn FnMut(ColorMode) + Send>;

#[derive(Default)]
struct SubscriberSet {
    next_id: u64,
    entries: Vec<(u64, BoxedSubscriber)>,
}

impl ThemeStore {
    /// Resolves the initial mode and constructs the store.
    ///
    /// A valid persisted override wins outright and the OS scheme is not
    /// consulted; otherwise the scheme source is queried and the store keeps
    /// tracking it live. A read failure or a corrupted slot is treated as
    /// "no override" and never surfaced.
    ///
    /// A change listener is registered with the scheme source regardless of
    /// override state; the handler itself decides whether an event applies.
    /// Sources without a notification channel are tolerated, the store then
    /// keeps the mode resolved here.
    pub fn initialize<S, G>(storage: S, signal: G) -> Self
    where
        S: PreferenceStorage + Send + 'static,
        G: SchemeSignal + Send + Sync + 'static,
    {
        let raw = match storage.read(PREFERENCE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!("theme preference read failed, falling back to OS scheme: {err}");
                None
            }
        };
        let preference = StoredPreference::parse(raw.as_deref()).normalized();

        let (mode, overridden) = match preference.override_mode() {
            Some(mode) => (mode, true),
            None => (signal.current(), false),
        };

        let state = Arc::new(Mutex::new(StoreState {
            mode,
            overridden,
            storage: Box::new(storage),
        }));
        let subscribers = Arc::new(Mutex::new(SubscriberSet::default()));
        let signal: Arc<dyn SchemeSignal + Send + Sync> = Arc::new(signal);

        // The listener holds only weak references, so a dropped store never
        // keeps a callback alive in the scheme source.
        let weak_state = Arc::downgrade(&state);
        let weak_subscribers = Arc::downgrade(&subscribers);
        let watch = match signal.watch(Box::new(move |os_mode| {
            if let (Some(state), Some(subscribers)) =
                (weak_state.upgrade(), weak_subscribers.upgrade())
            {
                Self::apply_scheme_change(&state, &subscribers, os_mode);
            }
        })) {
            Ok(id) => Some(id),
            Err(SignalError::Unavailable) => {
                debug!("scheme source has no change feed, OS changes will not be observed");
                None
            }
        };

        Self {
            state,
            subscribers,
            signal,
            watch,
        }
    }

    /// The effective color mode.
    pub fn mode(&self) -> ColorMode {
        self.state.lock().unwrap().mode
    }

    /// Whether an explicit override is in effect.
    pub fn is_overridden(&self) -> bool {
        self.state.lock().unwrap().overridden
    }

    /// Flips the effective mode and persists it as an explicit override.
    ///
    /// From this point OS scheme changes are ignored until
    /// [`ThemeStore::follow_system`]. A failed write is logged and swallowed;
    /// the in-memory mode still flips so the UI stays responsive, and the
    /// next successful write repairs persistence.
    pub fn toggle(&mut self) -> ColorMode {
        let next = {
            let mut state = self.state.lock().unwrap();
            let next = state.mode.toggled();
            state.mode = next;
            state.overridden = true;
            if let Err(err) = state.storage.write(PREFERENCE_KEY, &preference::encode(next)) {
                warn!("theme preference write failed, keeping in-memory mode: {err}");
            }
            next
        };
        Self::notify(&self.subscribers, next);
        next
    }

    /// Removes the persisted override and resumes following the OS scheme.
    ///
    /// Returns the effective mode after re-resolving against the scheme
    /// source, notifying subscribers if it changed.
    pub fn follow_system(&mut self) -> ColorMode {
        let os_mode = self.signal.current();
        let changed = {
            let mut state = self.state.lock().unwrap();
            if let Err(err) = state.storage.remove(PREFERENCE_KEY) {
                warn!("theme preference removal failed: {err}");
            }
            state.overridden = false;
            let changed = state.mode != os_mode;
            state.mode = os_mode;
            changed
        };
        if changed {
            Self::notify(&self.subscribers, os_mode);
        }
        os_mode
    }

    /// Registers a callback invoked with the new mode on every effective
    /// change, whether from [`ThemeStore::toggle`] or from an OS scheme
    /// change while unoverridden.
    ///
    /// No ordering is guaranteed between subscribers. A callback must not
    /// subscribe or cancel from within a notification.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(ColorMode) + Send + 'static,
    {
        let mut subscribers = self.subscribers.lock().unwrap();
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.entries.push((id, Box::new(callback)));
        Subscription {
            id,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Deregisters the scheme-change listener. Idempotent; also runs on
    /// drop.
    pub fn teardown(&mut self) {
        if let Some(id) = self.watch.take() {
            self.signal.unwatch(id);
        }
    }

    fn apply_scheme_change(
        state: &Mutex<StoreState>,
        subscribers: &Mutex<SubscriberSet>,
        os_mode: ColorMode,
    ) {
        let changed = {
            let mut state = state.lock().unwrap();
            if state.overridden || Self::persisted_override_exists(&*state.storage) {
                // Another handle on the same storage may have written an
                // override since initialization; it wins just like our own.
                false
            } else if state.mode == os_mode {
                false
            } else {
                state.mode = os_mode;
                true
            }
        };
        if changed {
            Self::notify(subscribers, os_mode);
        }
    }

    fn persisted_override_exists(storage: &(dyn PreferenceStorage + Send)) -> bool {
        let raw = storage.read(PREFERENCE_KEY).unwrap_or_default();
        StoredPreference::parse(raw.as_deref())
            .normalized()
            .override_mode()
            .is_some()
    }

    fn notify(subscribers: &Mutex<SubscriberSet>, mode: ColorMode) {
        let mut subscribers = subscribers.lock().unwrap();
        for (_, callback) in &mut subscribers.entries {
            callback(mode);
        }
    }
}

impl Drop for ThemeStore {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock().unwrap();
        f.debug_struct("ThemeStore")
            .field("mode", &state.mode)
            .field("overridden", &state.overridden)
            .field("watching", &self.watch.is_some())
            .finish()
    }
}

/// Handle deregistering a subscriber, returned by [`ThemeStore::subscribe`].
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Mutex<SubscriberSet>>,
}

impl Subscription {
    /// Removes the callback. Calling after the store is gone is a no-op.
    pub fn cancel(self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers
                .lock()
                .unwrap()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}
