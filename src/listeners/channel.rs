//! # Channel-backed listener (`ChannelListener`)
//!
//! Forwards every heard item into a bounded [`mpsc`] queue owned by the caller.
//!
//! ## Rules
//! - **Non-blocking**: `hear()` uses `try_send` and returns immediately.
//! - **Overflow**: on a full queue the item is dropped for this listener only,
//!   a `warn` line is logged and [`ChannelListener::dropped`] is incremented.
//! - **Closed**: if the receiver is gone the item is dropped the same way.
//!
//! ```text
//! hear(item) ──try_send──► [bounded queue] ──► consumer.recv()
//!                 └─ full/closed → drop + warn
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::warn;

use crate::item::Item;
use crate::listeners::Listener;

/// Listener that pushes items into a bounded channel.
pub struct ChannelListener<I: Item> {
    name: Cow<'static, str>,
    sender: mpsc::Sender<Arc<I>>,
    dropped: AtomicU64,
}

impl<I: Item> ChannelListener<I> {
    /// Creates a new channel-backed listener.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, sender: mpsc::Sender<Arc<I>>) -> Self {
        Self {
            name: name.into(),
            sender,
            dropped: AtomicU64::new(0),
        }
    }

    /// Creates the listener and returns it as a shared handle.
    #[must_use]
    pub fn arc(name: impl Into<Cow<'static, str>>, sender: mpsc::Sender<Arc<I>>) -> Arc<Self> {
        Arc::new(Self::new(name, sender))
    }

    /// Number of items dropped because the queue was full or closed.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// True if the consumer side of the queue has been dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<I: Item> fmt::Debug for ChannelListener<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelListener")
            .field("name", &self.name)
            .field("capacity", &self.sender.max_capacity())
            .field("dropped", &self.dropped())
            .finish()
    }
}

#[async_trait]
impl<I: Item> Listener<I> for ChannelListener<I> {
    async fn hear(&self, item: Arc<I>) {
        let reason = match self.sender.try_send(item) {
            Ok(()) => return,
            Err(mpsc::error::TrySendError::Full(_)) => "full",
            Err(mpsc::error::TrySendError::Closed(_)) => "closed",
        };
        self.dropped.fetch_add(1, Ordering::Relaxed);
        warn!(
            listener = %self.name,
            reason,
            capacity = self.sender.max_capacity(),
            "listener dropped item"
        );
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::Id;
    use crate::item::MessageType;

    struct Msg(u32);
    impl Item for Msg {
        fn sender(&self) -> &Id {
            &Id::ZERO
        }
        fn message_type(&self) -> MessageType {
            1
        }
    }

    #[tokio::test]
    async fn test_full_queue_drops_without_blocking() {
        let (tx, mut rx) = mpsc::channel(1);
        let l = ChannelListener::new("one", tx);

        l.hear(Arc::new(Msg(1))).await;
        l.hear(Arc::new(Msg(2))).await;

        assert_eq!(rx.recv().await.map(|m| m.0), Some(1));
        assert!(rx.try_recv().is_err());
        assert_eq!(l.dropped(), 1);
    }

    #[tokio::test]
    async fn test_closed_queue_counts_drop() {
        let (tx, rx) = mpsc::channel(4);
        drop(rx);
        let l = ChannelListener::new("gone", tx);
        assert!(l.is_closed());

        l.hear(Arc::new(Msg(1))).await;
        assert_eq!(l.dropped(), 1);
    }
}
