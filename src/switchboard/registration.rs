use std::fmt;

use crate::id::Id;
use crate::item::{Item, MessageType};
use crate::listeners::ListenerRef;

/// Handle returned by a successful registration.
///
/// Captures the keys the listener was stored under so that
/// [`Switchboard::unregister`](crate::Switchboard::unregister) can reverse it.
/// Deliberately not `Clone`: the caller owns the only handle.
///
/// Removal is per listener and key: handles of one shared listener that
/// share a sender or type key remove each other's entry for that key.
pub struct Registration<I: Item> {
    pub(crate) sender: Id,
    pub(crate) message_type: MessageType,
    pub(crate) listener: ListenerRef<I>,
}

impl<I: Item> Registration<I> {
    /// Sender key the listener was registered under.
    #[must_use]
    pub fn sender(&self) -> &Id {
        &self.sender
    }

    /// Message type key the listener was registered under.
    #[must_use]
    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    /// Debug name of the registered listener.
    #[must_use]
    pub fn listener_name(&self) -> &str {
        self.listener.name()
    }
}

impl<I: Item> fmt::Debug for Registration<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("sender", &self.sender)
            .field("message_type", &self.message_type)
            .field("listener", &self.listener.name())
            .finish()
    }
}
