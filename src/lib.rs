//! Light/dark theme preference resolution with persistence and OS detection.
//!
//! `duotone` reconciles the three competing answers to "should the UI be
//! dark right now": an explicit user override, the persisted prior choice,
//! and the live OS color scheme. The rules:
//!
//! - A valid persisted override always wins; the OS scheme is only consulted
//!   when no override exists.
//! - While no override exists, the effective mode tracks OS scheme changes
//!   live; the first [`ThemeStore::toggle`] freezes it.
//! - A corrupted persisted value behaves exactly like an absent one.
//! - Storage failures never surface: reads fall back to the OS scheme,
//!   failed writes leave the in-memory mode authoritative.
//!
//! Main types:
//!
//! - [`ThemeStore`]: the single source of truth, with subscriptions
//! - [`ColorMode`]: the effective light/dark mode
//! - [`StoredPreference`]: strict parse of the persisted slot
//! - [`PreferenceStorage`] / [`SchemeSignal`]: injectable backends
//! - [`Palette`] / [`AdaptivePalette`]: the styles components select by mode
//!
//! # Example
//!
//! ```rust
//! use duotone::{AdaptivePalette, ColorMode, ManualScheme, MemoryStorage, ThemeStore};
//!
//! let scheme = ManualScheme::new(ColorMode::Light);
//! let mut store = ThemeStore::initialize(MemoryStorage::new(), scheme.clone());
//!
//! let palette = AdaptivePalette::builtin();
//! let sub = store.subscribe(move |mode| {
//!     let _active = palette.select(mode);
//!     // restyle components here
//! });
//!
//! // No override yet: the store follows the OS scheme live.
//! scheme.set(ColorMode::Dark);
//! assert_eq!(store.mode(), ColorMode::Dark);
//!
//! // An explicit toggle persists an override and detaches from the OS.
//! assert_eq!(store.toggle(), ColorMode::Light);
//! scheme.set(ColorMode::Dark);
//! assert_eq!(store.mode(), ColorMode::Light);
//! sub.cancel();
//! ```

mod mode;
mod palette;
mod preference;
mod signal;
mod storage;
mod store;

pub use mode::ColorMode;
pub use palette::{AdaptivePalette, Palette};
pub use preference::{encode as encode_preference, StoredPreference, PREFERENCE_KEY};
pub use signal::{ManualScheme, OsScheme, SchemeListener, SchemeSignal, SignalError, WatchId};
pub use storage::{JsonFileStorage, MemoryStorage, PreferenceStorage, StorageError};
pub use store::{Subscription, ThemeStore};
