//! # switchboard
//!
//! **Switchboard** is an in-process publish/subscribe dispatcher keyed jointly
//! by sender identity and message type, plus a few small primitives shared by
//! messaging services (identities, a ring buffer).
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   register(sender, type, listener)           speak(item)
//!             │                                     │
//!             ▼                                     ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Switchboard                      RwLock<Indices>                 │
//! │  ┌──────────────────────────┐     ┌──────────────────────────┐    │
//! │  │ ListenerSet<Id>          │     │ ListenerSet<MessageType> │    │
//! │  │  user42 ─► {B}           │     │  69 ─► {B}               │    │
//! │  │  generic ─► {A}          │     │  generic ─► {A}          │    │
//! │  └────────────┬─────────────┘     └────────────┬─────────────┘    │
//! │               └────── (key ∪ generic) ∩ (key ∪ generic) ──┐       │
//! └───────────────────────────────────────────────────────────┼───────┘
//!                                          ┌──────────────────┼─────────┐
//!                                          ▼                  ▼         ▼
//!                                     spawn hear()      spawn hear()   ...
//!                                     FuncListener      ChannelListener
//!                                      callback(item)    try_send → [queue]
//! ```
//!
//! ### Matching
//! A registration matches an item iff
//! `(reg.sender == item.sender || reg.sender is wildcard)` **and**
//! `(reg.type == item.type || reg.type == ANY_TYPE)`.
//! [`Id::ZERO`] and [`Id::ANY`] are aliases of the same sender wildcard.
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits                        |
//! |-------------------|----------------------------------------------------------|-------------------------------------------|
//! | **Dispatch**      | Register listeners, broadcast items, unregister.         | [`Switchboard`], [`Registration`]         |
//! | **Listeners**     | Callback-, channel- and custom listeners.                | [`Listener`], [`FuncListener`], [`ChannelListener`] |
//! | **Queues**        | Pull-based consumption of matching items.                | [`ListeningQueue`]                        |
//! | **Identities**    | Opaque 33-byte sender ids with wildcard aliases.         | [`Id`], [`IdType`]                        |
//! | **Ring buffer**   | Fixed-capacity circular buffer with checked access.      | [`RingBuffer`]                            |
//! | **Errors**        | Typed validation and range errors.                       | [`SwitchboardError`], [`RingError`]       |
//! | **Configuration** | Default queue size, panic isolation.                     | [`Config`]                                |
//!
//! ## Optional features
//! - `logging`: exports [`LogListener`], which logs every heard item via `tracing`.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use switchboard::{Id, Item, MessageType, Switchboard, ANY_TYPE};
//!
//! struct Chat {
//!     from: Id,
//!     kind: MessageType,
//! }
//!
//! impl Item for Chat {
//!     fn sender(&self) -> &Id { &self.from }
//!     fn message_type(&self) -> MessageType { self.kind }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sb = Switchboard::<Chat>::new();
//!     let user42 = Id::user(42);
//!
//!     // Everything, from everyone.
//!     let _all = sb.register_func("audit", Id::ANY, ANY_TYPE, |c: Arc<Chat>| {
//!         println!("{} sent type {}", c.sender(), c.message_type());
//!     }).await?;
//!
//!     // Only type 69 from user42, pulled from a queue.
//!     let (reg, mut rx) = sb.listen_channel(69, user42, 16).await?;
//!
//!     assert_eq!(sb.speak(Chat { from: user42, kind: 69 }).await, 2);
//!     assert_eq!(rx.recv().await.map(|c| c.message_type()), Some(69));
//!
//!     sb.unregister(&reg).await;
//!     assert_eq!(sb.speak(Chat { from: user42, kind: 69 }).await, 1);
//!     Ok(())
//! }
//! ```
mod error;
mod id;
mod item;
mod listeners;
mod ring;
mod switchboard;

// ---- Public re-exports ----

pub use error::{RingError, SwitchboardError};
pub use id::{Id, IdType, ID_DATA_LEN, ID_LEN};
pub use item::{Item, MessageType, ANY_TYPE};
pub use listeners::{ChannelListener, FuncListener, Listener, ListenerRef};
pub use ring::RingBuffer;
pub use switchboard::{
    Config, Key, ListenerSet, ListeningQueue, Registration, Switchboard, SwitchboardBuilder,
};

// Optional: expose a simple built-in logging listener.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogListener;
