//! In-process named-event relay.
//!
//! Lets a layer with no view access (the HTTP client) notify the layers that
//! own view state (the admin shell) without either knowing about the other.

pub mod bus;
pub mod in_memory_bus;

pub use bus::{Listener, listener};
pub use in_memory_bus::EventRelay;

/// Published by the HTTP client when the backend rejects the session token.
///
/// Carries no payload.
pub const SESSION_EXPIRED: &str = "auth:session-expired";
