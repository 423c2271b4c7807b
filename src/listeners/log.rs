//! # LogListener — simple item logger
//!
//! A minimal listener that logs every heard item through `tracing`.
//! Use it for debugging or demos; register it at `(Id::ANY, ANY_TYPE)` to
//! trace every broadcast.
//!
//! ## Example output
//! ```text
//! INFO switchboard::listeners::log: heard item listener="log" sender=00..0103 message_type=69
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::item::Item;
use crate::listeners::Listener;

/// Item logging listener.
#[derive(Debug, Default)]
pub struct LogListener;

impl LogListener {
    /// Construct a new [`LogListener`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl<I: Item> Listener<I> for LogListener {
    async fn hear(&self, item: Arc<I>) {
        info!(
            listener = "log",
            sender = %item.sender(),
            message_type = item.message_type(),
            "heard item"
        );
    }

    fn name(&self) -> &str {
        "log"
    }
}
