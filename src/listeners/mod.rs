//! # Listeners: receivers of broadcast items.
//!
//! This module provides the [`Listener`] trait and built-in implementations.
//!
//! ## Architecture
//! ```text
//! Switchboard::speak(item)
//!     │  matches = senders.get(sender) ∩ types.get(type)
//!     │
//!     ├──► spawn ──► FuncListener::hear     ──► callback(item)
//!     ├──► spawn ──► ChannelListener::hear  ──► try_send ──► [queue] ──► consumer
//!     └──► spawn ──► CustomListener::hear   ──► ...
//! ```
//!
//! ## Listener types
//! - [`FuncListener`] — wraps a callback; `hear` calls it directly.
//! - [`ChannelListener`] — wraps a bounded queue; drops on full.
//! - `LogListener` — logs each item (feature `logging`).

mod channel;
mod func;
mod listener;
#[cfg(feature = "logging")]
mod log;

pub use channel::ChannelListener;
pub use func::FuncListener;
pub use listener::{Listener, ListenerRef};
#[cfg(feature = "logging")]
pub use log::LogListener;
