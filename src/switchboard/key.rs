use std::hash::Hash;

use crate::id::Id;
use crate::item::{MessageType, ANY_TYPE};

/// Index key: a sender identity or a message type.
///
/// Keys for which [`Key::is_wildcard`] is true all resolve to the single
/// generic set of a [`ListenerSet`](super::ListenerSet).
pub trait Key: Eq + Hash + Clone + Send + Sync + 'static {
    /// True for the reserved "any" value(s) of this axis.
    fn is_wildcard(&self) -> bool;
}

impl Key for Id {
    #[inline]
    fn is_wildcard(&self) -> bool {
        Id::is_wildcard(self)
    }
}

impl Key for MessageType {
    #[inline]
    fn is_wildcard(&self) -> bool {
        *self == ANY_TYPE
    }
}
