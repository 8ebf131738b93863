//! Listener contract for the event relay.
//!
//! ## Delivery semantics
//!
//! - **Synchronous**: `publish` runs every listener before it returns
//! - **Ordered**: listeners run in the order they subscribed
//! - **Snapshot**: the listener list is captured when `publish` starts; a
//!   listener added or removed during a publish takes effect on the next one
//! - **Isolated**: a listener that panics is logged and skipped; the rest still run
//! - **No persistence**: an event published with nobody listening is dropped

use std::sync::Arc;

use serde_json::Value;

/// A subscriber callback.
///
/// Listeners are compared by identity (`Arc` address), never by behaviour, so
/// keep the `Arc` you subscribed with if you intend to unsubscribe later.
pub type Listener = Arc<dyn Fn(Option<&Value>) + Send + Sync>;

/// Wrap a closure as a [`Listener`].
pub fn listener<F>(f: F) -> Listener
where
    F: Fn(Option<&Value>) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Identity comparison that ignores vtable metadata.
pub(crate) fn same_listener(a: &Listener, b: &Listener) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
