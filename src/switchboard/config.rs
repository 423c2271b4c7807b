//! # Switchboard configuration.
//!
//! Provides [`Config`], the settings a [`Switchboard`](crate::Switchboard) is built with.
//!
//! ## Sentinel values
//! - `queue_capacity = 0` → clamped to 1 by [`Config::queue_capacity_clamped`]

/// Configuration for a switchboard instance.
///
/// ## Field semantics
/// - `queue_capacity`: buffer size used by [`Switchboard::listen`](crate::Switchboard::listen)
/// - `catch_panics`: isolate and log panics raised inside `Listener::hear`
#[derive(Clone, Debug)]
pub struct Config {
    /// Default capacity of queues created by `Switchboard::listen`.
    ///
    /// Callers that need a specific size use `Switchboard::listen_channel`.
    pub queue_capacity: usize,

    /// Catch panics raised while a listener hears an item.
    ///
    /// When enabled the panic is logged at `error` with the listener name.
    /// When disabled it unwinds the delivery task only (tokio still contains it),
    /// without a log line.
    pub catch_panics: bool,
}

impl Config {
    /// Returns the default queue capacity clamped to a minimum of 1.
    #[inline]
    #[must_use]
    pub fn queue_capacity_clamped(&self) -> usize {
        self.queue_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `queue_capacity = 1024`
    /// - `catch_panics = true`
    fn default() -> Self {
        Self {
            queue_capacity: 1024,
            catch_panics: true,
        }
    }
}
