//! In-memory event relay.

use std::collections::HashMap;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{PoisonError, RwLock};

use serde_json::Value;

use crate::bus::{Listener, same_listener};

/// Named-event publish/subscribe.
///
/// - No IO / no async
/// - One relay per running client; share it as `Arc<EventRelay>`
/// - The lock is never held while listeners run, so listeners may
///   subscribe/unsubscribe/publish re-entrantly
#[derive(Default)]
pub struct EventRelay {
    listeners: RwLock<HashMap<String, Vec<Listener>>>,
}

impl EventRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` under `event`.
    ///
    /// Registering the same listener twice keeps both entries; it will then
    /// run twice per publish.
    pub fn subscribe(&self, event: &str, listener: Listener) {
        let mut map = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        map.entry(event.to_string()).or_default().push(listener);
        tracing::debug!(event, "listener subscribed");
    }

    /// Remove every registration of `listener` under `event`.
    ///
    /// Unknown events and unregistered listeners are ignored.
    pub fn unsubscribe(&self, event: &str, listener: &Listener) {
        let mut map = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let Some(list) = map.get_mut(event) else {
            return;
        };

        let before = list.len();
        list.retain(|registered| !same_listener(registered, listener));
        let removed = before - list.len();

        if list.is_empty() {
            map.remove(event);
        }

        if removed > 0 {
            tracing::debug!(event, removed, "listener unsubscribed");
        }
    }

    /// Invoke every listener registered for `event`, in subscription order.
    ///
    /// Returns how many listeners completed without panicking.
    pub fn publish(&self, event: &str, payload: Option<&Value>) -> usize {
        let snapshot: Vec<Listener> = {
            let map = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
            match map.get(event) {
                Some(list) => list.clone(),
                None => return 0,
            }
        };

        let mut delivered = 0;
        for (position, listener) in snapshot.iter().enumerate() {
            match catch_unwind(AssertUnwindSafe(|| listener(payload))) {
                Ok(()) => delivered += 1,
                Err(_) => {
                    tracing::error!(event, position, "event listener panicked; continuing");
                }
            }
        }

        tracing::debug!(event, delivered, total = snapshot.len(), "event published");
        delivered
    }

    /// Number of registrations currently held for `event`.
    pub fn subscriber_count(&self, event: &str) -> usize {
        let map = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
        map.get(event).map_or(0, Vec::len)
    }
}

impl core::fmt::Debug for EventRelay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let map = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
        let counts: HashMap<&str, usize> =
            map.iter().map(|(event, list)| (event.as_str(), list.len())).collect();
        f.debug_struct("EventRelay").field("listeners", &counts).finish()
    }
}
