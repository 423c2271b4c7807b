//! # Function-backed listener (`FuncListener`)
//!
//! [`FuncListener`] wraps a callback `F: Fn(Arc<I>)` and invokes it directly
//! from `hear`. The switchboard does not impose a timeout: if the callback
//! blocks, only its own delivery task is held up.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use switchboard::{FuncListener, Id, Item, Listener, MessageType};
//!
//! struct Ping(Id);
//! impl Item for Ping {
//!     fn sender(&self) -> &Id { &self.0 }
//!     fn message_type(&self) -> MessageType { 1 }
//! }
//!
//! let l: Arc<dyn Listener<Ping>> = FuncListener::arc("printer", |p: Arc<Ping>| {
//!     println!("ping from {}", p.sender());
//! });
//! assert_eq!(l.name(), "printer");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::item::Item;
use crate::listeners::Listener;

/// Callback-backed listener.
pub struct FuncListener<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> FuncListener<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`FuncListener::arc`] when you immediately register it.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the listener and returns it as a shared handle.
    #[must_use]
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for FuncListener<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncListener")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<I, F> Listener<I> for FuncListener<F>
where
    I: Item,
    F: Fn(Arc<I>) + Send + Sync + 'static,
{
    async fn hear(&self, item: Arc<I>) {
        (self.f)(item);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::id::Id;
    use crate::item::MessageType;

    struct Msg(Id);
    impl Item for Msg {
        fn sender(&self) -> &Id {
            &self.0
        }
        fn message_type(&self) -> MessageType {
            3
        }
    }

    #[tokio::test]
    async fn test_hear_invokes_callback() {
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        let l = FuncListener::new("count", move |m: Arc<Msg>| {
            assert_eq!(m.message_type(), 3);
            h.fetch_add(1, Ordering::SeqCst);
        });

        l.hear(Arc::new(Msg(Id::user(1)))).await;
        l.hear(Arc::new(Msg(Id::user(2)))).await;

        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(Listener::<Msg>::name(&l), "count");
    }
}
