//! # Listening queue: pull-based consumption.
//!
//! Pairs a bounded channel with a channel-backed registration so a consumer
//! can `recv()` matching items instead of providing a callback.
//!
//! ```text
//! speak(item) ──► ChannelListener ──try_send──► [bounded queue] ──► ListeningQueue::recv()
//!                                    └─ full → dropped (counted)
//! ```

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::SwitchboardError;
use crate::id::Id;
use crate::item::{Item, MessageType};
use crate::listeners::ChannelListener;

use super::board::Switchboard;
use super::registration::Registration;

impl<I: Item> Switchboard<I> {
    /// Registers a fresh queue of `buffer_size` for `(sender, message_type)`.
    ///
    /// Returns the registration handle and the receiving end.
    ///
    /// # Errors
    /// [`SwitchboardError::InvalidArgument`] if `buffer_size` is 0.
    pub async fn listen_channel(
        &self,
        message_type: MessageType,
        sender: Id,
        buffer_size: usize,
    ) -> Result<(Registration<I>, mpsc::Receiver<Arc<I>>), SwitchboardError> {
        let queue = ListeningQueue::open(self, message_type, sender, buffer_size).await?;
        Ok((queue.registration, queue.rx))
    }

    /// Like [`listen_channel`](Self::listen_channel), sized by
    /// [`Config::queue_capacity`](crate::Config::queue_capacity).
    pub async fn listen(
        &self,
        message_type: MessageType,
        sender: Id,
    ) -> Result<ListeningQueue<I>, SwitchboardError> {
        let cap = self.config().queue_capacity_clamped();
        ListeningQueue::open(self, message_type, sender, cap).await
    }
}

/// Registered bounded queue of matching items.
pub struct ListeningQueue<I: Item> {
    registration: Registration<I>,
    rx: mpsc::Receiver<Arc<I>>,
    listener: Arc<ChannelListener<I>>,
}

impl<I: Item> ListeningQueue<I> {
    /// Creates a queue of `buffer_size` and registers it on `switchboard`.
    ///
    /// # Errors
    /// [`SwitchboardError::InvalidArgument`] if `buffer_size` is 0.
    pub async fn open(
        switchboard: &Switchboard<I>,
        message_type: MessageType,
        sender: Id,
        buffer_size: usize,
    ) -> Result<Self, SwitchboardError> {
        if buffer_size == 0 {
            return Err(SwitchboardError::invalid("buffer_size", "must be at least 1"));
        }

        let (tx, rx) = mpsc::channel(buffer_size);
        let listener = ChannelListener::arc(format!("listen:{sender}:{message_type}"), tx);
        let registration = switchboard
            .register_listener(sender, message_type, listener.clone())
            .await?;

        Ok(Self {
            registration,
            rx,
            listener,
        })
    }

    /// Waits for the next matching item. `None` once unregistered and drained.
    pub async fn recv(&mut self) -> Option<Arc<I>> {
        self.rx.recv().await
    }

    /// Takes the next item if one is buffered.
    pub fn try_recv(&mut self) -> Option<Arc<I>> {
        self.rx.try_recv().ok()
    }

    /// Number of items dropped because the queue was full.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.listener.dropped()
    }

    /// The registration backing this queue.
    #[must_use]
    pub fn registration(&self) -> &Registration<I> {
        &self.registration
    }

    /// Unregisters the queue; items already buffered are discarded.
    pub async fn close(self, switchboard: &Switchboard<I>) {
        switchboard.unregister(&self.registration).await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::*;
    use crate::item::ANY_TYPE;

    struct Msg(Id, MessageType, u32);
    impl Item for Msg {
        fn sender(&self) -> &Id {
            &self.0
        }
        fn message_type(&self) -> MessageType {
            self.1
        }
    }

    const WAIT: Duration = Duration::from_secs(2);

    #[tokio::test]
    async fn test_listen_channel_receives_matches() {
        let sb = Switchboard::<Msg>::new();
        let user = Id::user(42);
        let (_reg, mut rx) = sb.listen_channel(69, user, 4).await.unwrap();

        sb.speak(Msg(user, 69, 1)).await;
        sb.speak(Msg(user, 70, 2)).await;
        sb.speak(Msg(Id::user(1), 69, 3)).await;

        let got = timeout(WAIT, rx.recv()).await.unwrap().unwrap();
        assert_eq!(got.2, 1);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_listen_channel_rejects_zero_buffer() {
        let sb = Switchboard::<Msg>::new();
        let err = sb.listen_channel(1, Id::ANY, 0).await.unwrap_err();
        assert!(matches!(
            err,
            SwitchboardError::InvalidArgument { argument: "buffer_size", .. }
        ));
    }

    #[tokio::test]
    async fn test_overflow_drops_newest() {
        let sb = Switchboard::<Msg>::new();
        let mut q = ListeningQueue::open(&sb, ANY_TYPE, Id::ANY, 1).await.unwrap();

        sb.speak(Msg(Id::user(1), 1, 1)).await;
        sb.speak(Msg(Id::user(1), 1, 2)).await;

        timeout(WAIT, async {
            while q.dropped() < 1 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap();

        assert!(q.try_recv().is_some());
        assert!(q.try_recv().is_none());
        assert_eq!(q.dropped(), 1);
    }

    #[tokio::test]
    async fn test_close_unregisters() {
        let sb = Switchboard::<Msg>::new();
        let q = sb.listen(5, Id::user(9)).await.unwrap();
        assert_eq!(q.registration().message_type(), 5);
        assert!(q.registration().listener_name().starts_with("listen:"));
        assert_eq!(sb.listener_count().await, 1);

        q.close(&sb).await;
        assert_eq!(sb.listener_count().await, 0);
        assert_eq!(sb.speak(Msg(Id::user(9), 5, 0)).await, 0);
    }
}
