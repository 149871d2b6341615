//! OS color-scheme signal sources.
//!
//! This module provides:
//!
//! - [`SchemeSignal`]: the source trait the store resolves against
//! - [`OsScheme`]: the platform scheme via OS detection
//! - [`ManualScheme`]: an in-process source with settable value and live
//!   change dispatch
//! - [`SignalError`]: failures from listener registration
//!
//! A source answers two questions: what is the scheme right now, and can it
//! push change notifications. Sources without a live notification channel
//! fail [`SchemeSignal::watch`] with [`SignalError::Unavailable`]; the store
//! treats that as non-fatal and simply stops observing later system-level
//! changes.

mod manual;
mod os;

pub use manual::ManualScheme;
pub use os::OsScheme;

use thiserror::Error;

use crate::mode::ColorMode;

/// Callback invoked with the new scheme when the source reports a change.
pub type SchemeListener = Box<dyn FnMut(ColorMode) + Send>;

/// Handle identifying a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub(crate) u64);

/// Error returned when a listener cannot be registered.
#[derive(Debug, Error)]
pub enum SignalError {
    /// The source cannot deliver change notifications on this platform.
    #[error("scheme source does not deliver change notifications")]
    Unavailable,
}

/// A source of the system-wide light/dark scheme.
pub trait SchemeSignal {
    /// The scheme reported right now.
    fn current(&self) -> ColorMode;

    /// Registers a change listener, invoked with each new scheme value.
    ///
    /// # Errors
    ///
    /// Returns [`SignalError::Unavailable`] when the source has no live
    /// notification channel; callers fall back to the value last returned
    /// by [`SchemeSignal::current`].
    fn watch(&self, listener: SchemeListener) -> Result<WatchId, SignalError>;

    /// Deregisters a listener. Unknown or already-removed ids are ignored.
    fn unwatch(&self, id: WatchId);
}
