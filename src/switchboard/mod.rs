//! Dispatch core: dual index, registration and broadcast.
//!
//! ## Contents
//! - [`ListenerSet`] one axis of the index (key → listeners, plus wildcard set)
//! - [`Switchboard`] the engine owning both axes behind one `RwLock`
//! - [`Registration`] handle returned by registration, used to unregister
//! - [`ListeningQueue`] pull-based wrapper over a channel-backed registration
//! - [`Config`], [`SwitchboardBuilder`] construction
//!
//! ## Wiring
//! ```text
//! register(sender, type, listener)
//!     └─► write lock ─► senders.add(sender) + types.add(type)
//!
//! speak(item)
//!     └─► read lock ─► senders.get(item.sender) ∩ types.get(item.type)
//!                          └─► spawn hear() per match
//! ```

mod board;
mod builder;
mod config;
mod key;
mod queue;
mod registration;
mod set;

pub use board::Switchboard;
pub use builder::SwitchboardBuilder;
pub use config::Config;
pub use key::Key;
pub use queue::ListeningQueue;
pub use registration::Registration;
pub use set::ListenerSet;
