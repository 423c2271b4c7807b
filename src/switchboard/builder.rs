use std::sync::Arc;

use crate::id::Id;
use crate::item::{Item, MessageType};
use crate::listeners::{Listener, ListenerRef};

use super::board::{Indices, Switchboard};
use super::config::Config;

/// Builder for constructing a [`Switchboard`] with permanent listeners.
///
/// Listeners added here have no [`Registration`](super::Registration) handle
/// and stay registered for the lifetime of the switchboard (e.g. audit or
/// logging listeners).
pub struct SwitchboardBuilder<I: Item> {
    cfg: Config,
    listeners: Vec<(Id, MessageType, Arc<dyn Listener<I>>)>,
}

impl<I: Item> SwitchboardBuilder<I> {
    /// Creates a new builder with the given configuration.
    #[must_use]
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            listeners: Vec::new(),
        }
    }

    /// Adds a permanent listener for `(sender, message_type)`.
    #[must_use]
    pub fn with_listener(
        mut self,
        sender: Id,
        message_type: MessageType,
        listener: Arc<dyn Listener<I>>,
    ) -> Self {
        self.listeners.push((sender, message_type, listener));
        self
    }

    /// Builds the switchboard and registers all permanent listeners.
    #[must_use]
    pub fn build(self) -> Arc<Switchboard<I>> {
        let mut indices = Indices::new();
        for (sender, message_type, listener) in self.listeners {
            indices.insert(sender, message_type, &ListenerRef::new(listener));
        }
        Arc::new(Switchboard::from_parts(self.cfg, indices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ANY_TYPE;
    use crate::listeners::FuncListener;

    struct Msg(Id);
    impl Item for Msg {
        fn sender(&self) -> &Id {
            &self.0
        }
        fn message_type(&self) -> MessageType {
            1
        }
    }

    #[tokio::test]
    async fn test_build_registers_permanent_listeners() {
        let sb = Switchboard::<Msg>::builder(Config::default())
            .with_listener(Id::ANY, ANY_TYPE, FuncListener::arc("all", |_m: Arc<Msg>| {}))
            .with_listener(Id::user(1), 1, FuncListener::arc("one", |_m: Arc<Msg>| {}))
            .build();

        assert_eq!(sb.listener_count().await, 2);
        assert_eq!(sb.speak(Msg(Id::user(1))).await, 2);
        assert_eq!(sb.speak(Msg(Id::user(2))).await, 1);
    }

    #[tokio::test]
    async fn test_build_accepts_unnamed_listener() {
        let sb = Switchboard::<Msg>::builder(Config::default())
            .with_listener(Id::ANY, ANY_TYPE, FuncListener::arc("", |_m: Arc<Msg>| {}))
            .build();
        assert_eq!(sb.listener_count().await, 1);
        assert_eq!(sb.speak(Msg(Id::user(5))).await, 1);
    }
}
