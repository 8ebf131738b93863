//! Admin shell: the frame around every admin screen.
//!
//! The shell is the only view-side subscriber to session expiry. It listens
//! for as long as it lives and shows a blocking notice when the backend
//! rejects the token.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use folio_auth::AuthSession;
use folio_core::AdminProfile;
use folio_events::{EventRelay, Listener, SESSION_EXPIRED, listener};

use crate::context::AppContext;
use crate::router::{HOME_PATH, Navigator, Route};

pub const SESSION_EXPIRED_TITLE: &str = "Session Expired";
pub const SESSION_EXPIRED_MESSAGE: &str =
    "Your session has expired. Please log in again to continue.";

/// One entry of the admin side menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub path: String,
    pub active: bool,
}

pub struct AdminShell {
    session: AuthSession,
    relay: Arc<EventRelay>,
    navigator: Navigator,
    expired: Arc<AtomicBool>,
    listener: Listener,
}

impl AdminShell {
    /// Mount the shell and start listening for session expiry.
    pub fn new(ctx: &AppContext) -> Self {
        let expired = Arc::new(AtomicBool::new(false));

        let flag = expired.clone();
        let listener = listener(move |_| {
            flag.store(true, Ordering::SeqCst);
        });
        ctx.relay.subscribe(SESSION_EXPIRED, listener.clone());

        Self {
            session: ctx.session.clone(),
            relay: ctx.relay.clone(),
            navigator: ctx.navigator.clone(),
            expired,
            listener,
        }
    }

    pub fn session_expired_modal_open(&self) -> bool {
        self.expired.load(Ordering::SeqCst)
    }

    /// Close the session-expired notice; this also signs out and leaves the admin area.
    pub fn dismiss(&self) {
        self.expired.store(false, Ordering::SeqCst);
        self.logout();
    }

    pub fn logout(&self) {
        if let Err(err) = self.session.logout() {
            tracing::error!(error = %err, "failed to clear session on logout");
        }
        self.navigator.navigate(HOME_PATH);
    }

    /// Profile stored at login, for the sidebar header.
    pub fn admin(&self) -> Option<AdminProfile> {
        self.session.current_user()
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        let current = Route::parse(&self.navigator.current());
        Route::ADMIN
            .iter()
            .map(|route| MenuEntry {
                label: route.label(),
                path: route.path().to_string(),
                active: *route == current,
            })
            .collect()
    }
}

impl Drop for AdminShell {
    fn drop(&mut self) {
        self.relay.unsubscribe(SESSION_EXPIRED, &self.listener);
    }
}

impl core::fmt::Debug for AdminShell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdminShell")
            .field("session_expired", &self.session_expired_modal_open())
            .finish()
    }
}
