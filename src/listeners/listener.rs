//! # Listener trait.
//!
//! Provides [`Listener`], the capability the switchboard delivers matching
//! items to, and [`ListenerRef`], the shared handle stored in the indices.
//!
//! ## Rules
//! - Each `hear` call runs on its own spawned task, never in the broadcaster.
//! - No ordering between listeners for one broadcast.
//! - A slow or panicking listener does not affect other listeners.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use switchboard::{Id, Item, Listener, MessageType};
//!
//! struct Ping(Id);
//! impl Item for Ping {
//!     fn sender(&self) -> &Id { &self.0 }
//!     fn message_type(&self) -> MessageType { 1 }
//! }
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Listener<Ping> for Audit {
//!     async fn hear(&self, item: Arc<Ping>) {
//!         let _ = item.sender();
//!     }
//!
//!     fn name(&self) -> &str { "audit" }
//! }
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use async_trait::async_trait;

use crate::item::Item;

/// Something that can receive a delivered item.
///
/// ### Implementation requirements
/// - Prefer async I/O; a blocking `hear` occupies a runtime worker thread.
/// - Handle errors internally; panics are caught and logged when
///   [`Config::catch_panics`](crate::Config::catch_panics) is enabled.
#[async_trait]
pub trait Listener<I: Item>: Send + Sync + 'static {
    /// Receives one matching item.
    async fn hear(&self, item: Arc<I>);

    /// Debug label used in logs. Not required to be unique.
    fn name(&self) -> &str;
}

/// Shared listener handle with reference identity.
///
/// Two handles are equal iff they point at the same allocation, so
/// registering one `Arc` twice under the same key stores it once.
pub struct ListenerRef<I: Item>(Arc<dyn Listener<I>>);

impl<I: Item> ListenerRef<I> {
    /// Wraps a shared listener.
    #[must_use]
    pub fn new(listener: Arc<dyn Listener<I>>) -> Self {
        Self(listener)
    }

    /// Returns the underlying shared listener.
    #[must_use]
    pub fn as_arc(&self) -> &Arc<dyn Listener<I>> {
        &self.0
    }

    #[inline]
    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.0).cast::<()>()
    }
}

impl<I: Item> From<Arc<dyn Listener<I>>> for ListenerRef<I> {
    fn from(listener: Arc<dyn Listener<I>>) -> Self {
        Self(listener)
    }
}

impl<I: Item> Clone for ListenerRef<I> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<I: Item> PartialEq for ListenerRef<I> {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<I: Item> Eq for ListenerRef<I> {}

impl<I: Item> Hash for ListenerRef<I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<I: Item> Deref for ListenerRef<I> {
    type Target = dyn Listener<I>;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl<I: Item> fmt::Debug for ListenerRef<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRef")
            .field("name", &self.0.name())
            .field("addr", &self.addr())
            .finish()
    }
}
