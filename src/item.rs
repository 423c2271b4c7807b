//! # Broadcast items and message types.
//!
//! The switchboard never looks inside an item; it only reads the two
//! routing accessors of [`Item`].

use crate::id::Id;

/// Message type key. `0` ([`ANY_TYPE`]) is the wildcard.
pub type MessageType = i32;

/// Wildcard message type: a registration under it matches every type.
pub const ANY_TYPE: MessageType = 0;

/// Anything that can be broadcast through a [`Switchboard`](crate::Switchboard).
///
/// # Example
/// ```
/// use switchboard::{Id, Item, MessageType};
///
/// struct Chat {
///     from: Id,
///     body: String,
/// }
///
/// impl Item for Chat {
///     fn sender(&self) -> &Id { &self.from }
///     fn message_type(&self) -> MessageType { 2 }
/// }
/// ```
pub trait Item: Send + Sync + 'static {
    /// Identity the item was sent by.
    fn sender(&self) -> &Id;

    /// Message type of the item.
    fn message_type(&self) -> MessageType;
}
