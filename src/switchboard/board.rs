//! # Switchboard: the dispatch engine.
//!
//! Owns two [`ListenerSet`]s (by sender, by message type) behind one
//! reader/writer lock and fans each broadcast out to the listeners that
//! match on **both** axes.
//!
//! ## Matching
//! ```text
//! speak(item)
//!     │
//!     ├─ read lock
//!     │    by_sender = senders.get(item.sender)        (key ∪ generic)
//!     │    by_type   = types.get(item.message_type)    (key ∪ generic)
//!     │    matches   = by_sender ∩ by_type
//!     ├─ unlock
//!     │
//!     ├──► spawn ──► listener1.hear(item)
//!     ├──► spawn ──► listener2.hear(item)
//!     └──► spawn ──► listenerN.hear(item)
//! ```
//!
//! ## Rules
//! - **Non-blocking**: `speak()` only waits for the read lock; delivery runs on spawned tasks.
//! - **Isolation**: a slow or panicking listener does not affect others.
//! - **No ordering** across listeners, or across concurrent `speak` calls.
//! - `unregister` prevents future matches; deliveries already spawned still run.

use std::borrow::Cow;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, error, trace};

use crate::error::SwitchboardError;
use crate::id::Id;
use crate::item::{Item, MessageType};
use crate::listeners::{ChannelListener, FuncListener, Listener, ListenerRef};

use super::builder::SwitchboardBuilder;
use super::config::Config;
use super::registration::Registration;
use super::set::ListenerSet;

/// Both halves of the dual index; always mutated together.
pub(crate) struct Indices<I: Item> {
    pub(crate) senders: ListenerSet<Id, I>,
    pub(crate) types: ListenerSet<MessageType, I>,
}

impl<I: Item> Indices<I> {
    pub(crate) fn new() -> Self {
        Self {
            senders: ListenerSet::new(),
            types: ListenerSet::new(),
        }
    }

    pub(crate) fn insert(&mut self, sender: Id, message_type: MessageType, l: &ListenerRef<I>) {
        self.senders.add(sender, l.clone());
        self.types.add(message_type, l.clone());
    }
}

/// Listener registry and broadcast dispatcher.
///
/// Safe to share across tasks (`Arc<Switchboard<I>>`); every method takes `&self`.
pub struct Switchboard<I: Item> {
    cfg: Config,
    indices: RwLock<Indices<I>>,
}

impl<I: Item> Switchboard<I> {
    /// Creates an empty switchboard with the default [`Config`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty switchboard with the given configuration.
    #[must_use]
    pub fn with_config(cfg: Config) -> Self {
        Self::from_parts(cfg, Indices::new())
    }

    /// Returns a builder that can pre-register permanent listeners.
    #[must_use]
    pub fn builder(cfg: Config) -> SwitchboardBuilder<I> {
        SwitchboardBuilder::new(cfg)
    }

    pub(crate) fn from_parts(cfg: Config, indices: Indices<I>) -> Self {
        Self {
            cfg,
            indices: RwLock::new(indices),
        }
    }

    /// Configuration this switchboard was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Registers `listener` for items from `sender` with `message_type`.
    ///
    /// `Id::ZERO` / `Id::ANY` as sender, or `ANY_TYPE` as message type,
    /// match anything on that axis.
    ///
    /// Index entries are per listener and key, not per registration. If the
    /// same `Arc` is registered twice sharing a key (e.g. `(u, 5)` and `(u, 6)`),
    /// unregistering either handle removes it from the shared `u` entry and the
    /// other registration stops matching. Use one listener allocation per
    /// registration when they must be removable independently.
    pub async fn register_listener(
        &self,
        sender: Id,
        message_type: MessageType,
        listener: Arc<dyn Listener<I>>,
    ) -> Result<Registration<I>, SwitchboardError> {
        let listener = ListenerRef::new(listener);

        self.indices
            .write()
            .await
            .insert(sender, message_type, &listener);

        trace!(
            listener = %listener.name(),
            %sender,
            message_type,
            "listener registered"
        );
        Ok(Registration {
            sender,
            message_type,
            listener,
        })
    }

    /// Registers a callback, wrapped in a [`FuncListener`] named `name`.
    pub async fn register_func<F>(
        &self,
        name: impl Into<Cow<'static, str>>,
        sender: Id,
        message_type: MessageType,
        callback: F,
    ) -> Result<Registration<I>, SwitchboardError>
    where
        F: Fn(Arc<I>) + Send + Sync + 'static,
    {
        self.register_listener(sender, message_type, FuncListener::arc(name, callback))
            .await
    }

    /// Registers a bounded queue, wrapped in a [`ChannelListener`] named `name`.
    ///
    /// Items that do not fit in the queue are dropped for this listener only.
    ///
    /// # Errors
    /// [`SwitchboardError::InvalidArgument`] if the queue's receiver is already gone.
    pub async fn register_channel(
        &self,
        name: impl Into<Cow<'static, str>>,
        sender: Id,
        message_type: MessageType,
        queue: mpsc::Sender<Arc<I>>,
    ) -> Result<Registration<I>, SwitchboardError> {
        if queue.is_closed() {
            return Err(SwitchboardError::invalid("queue", "receiver dropped"));
        }
        self.register_listener(sender, message_type, ChannelListener::arc(name, queue))
            .await
    }

    /// Removes a registration from both indices.
    ///
    /// Unknown or already removed handles are ignored.
    pub async fn unregister(&self, registration: &Registration<I>) {
        let mut idx = self.indices.write().await;
        let by_sender = idx
            .senders
            .remove(&registration.sender, &registration.listener);
        let by_type = idx
            .types
            .remove(&registration.message_type, &registration.listener);
        drop(idx);

        trace!(
            listener = %registration.listener.name(),
            sender = %registration.sender,
            message_type = registration.message_type,
            removed = by_sender || by_type,
            "listener unregistered"
        );
    }

    /// Broadcasts `item` to every matching listener.
    ///
    /// Returns the number of listeners the item was dispatched to. Never fails;
    /// an unmatched item is logged at `debug`.
    ///
    /// Delivery tasks are spawned on the current tokio runtime. When polled
    /// outside one, nothing is delivered, an `error` is logged and 0 is returned.
    pub async fn speak(&self, item: I) -> usize {
        self.speak_arc(Arc::new(item)).await
    }

    /// Broadcasts a pre-allocated `Arc<I>` (no extra allocation).
    pub async fn speak_arc(&self, item: Arc<I>) -> usize {
        let matches = self.matches(item.sender(), item.message_type()).await;

        if matches.is_empty() {
            debug!(
                sender = %item.sender(),
                message_type = item.message_type(),
                "unmatched item"
            );
            return 0;
        }

        let Ok(rt) = Handle::try_current() else {
            error!(
                sender = %item.sender(),
                message_type = item.message_type(),
                matched = matches.len(),
                "no tokio runtime; item not delivered"
            );
            return 0;
        };

        let n = matches.len();
        for listener in matches {
            self.deliver(&rt, listener, Arc::clone(&item));
        }
        n
    }

    /// Number of distinct registered listeners.
    pub async fn listener_count(&self) -> usize {
        self.indices.read().await.senders.listeners().len()
    }

    /// True if `sender` currently has its own entry in the sender index.
    pub async fn has_sender(&self, sender: &Id) -> bool {
        self.indices.read().await.senders.contains_key(sender)
    }

    /// True if `message_type` currently has its own entry in the type index.
    pub async fn has_message_type(&self, message_type: MessageType) -> bool {
        self.indices.read().await.types.contains_key(&message_type)
    }

    /// Computes `senders.get(sender) ∩ types.get(message_type)` under the read lock.
    async fn matches(&self, sender: &Id, message_type: MessageType) -> Vec<ListenerRef<I>> {
        let idx = self.indices.read().await;
        let by_sender = idx.senders.get(sender);
        let by_type = idx.types.get(&message_type);
        drop(idx);

        let (small, large) = if by_sender.len() <= by_type.len() {
            (by_sender, by_type)
        } else {
            (by_type, by_sender)
        };
        small.into_iter().filter(|l| large.contains(l)).collect()
    }

    /// Spawns one `hear` call; the broadcaster never awaits it.
    fn deliver(&self, rt: &Handle, listener: ListenerRef<I>, item: Arc<I>) {
        if !self.cfg.catch_panics {
            rt.spawn(async move { listener.hear(item).await });
            return;
        }

        rt.spawn(async move {
            let fut = listener.hear(item);
            if let Err(panic_err) = AssertUnwindSafe(fut).catch_unwind().await {
                let any = &*panic_err;
                let info = if let Some(msg) = any.downcast_ref::<&'static str>() {
                    (*msg).to_string()
                } else if let Some(msg) = any.downcast_ref::<String>() {
                    msg.clone()
                } else {
                    "unknown panic".to_string()
                };
                error!(listener = %listener.name(), panic = %info, "listener panicked");
            }
        });
    }
}

impl<I: Item> Default for Switchboard<I> {
    fn default() -> Self {
        Self::new()
    }
}
