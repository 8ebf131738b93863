//! Process-wide wiring: storage, session, relay, API client and location.

use std::sync::Arc;

use folio_auth::{AuthSession, ClientStorage, FileStorage};
use folio_client::{ApiClient, AuthService, ClientConfig, ClientResult, ContentService};
use folio_events::EventRelay;

use crate::router::{Navigator, Route, RouteDecision, guard};

/// Everything a screen needs, built once at startup. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: ClientConfig,
    pub session: AuthSession,
    pub relay: Arc<EventRelay>,
    pub auth: AuthService,
    pub content: ContentService,
    pub navigator: Navigator,
}

impl AppContext {
    /// Wire against the persisted file storage named by the config (or the
    /// platform default).
    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        let storage = match &config.storage_path {
            Some(path) => FileStorage::open(path.clone())?,
            None => FileStorage::open_default()?,
        };
        tracing::debug!(path = %storage.path().display(), "client storage opened");
        Self::with_storage(config, Arc::new(storage))
    }

    pub fn with_storage(config: ClientConfig, storage: Arc<dyn ClientStorage>) -> ClientResult<Self> {
        let session = AuthSession::new(storage);
        let relay = Arc::new(EventRelay::new());
        let client = ApiClient::new(&config, session.clone(), relay.clone())?;

        Ok(Self {
            config,
            session,
            relay,
            auth: AuthService::new(client.clone()),
            content: ContentService::new(client),
            navigator: Navigator::default(),
        })
    }

    /// Navigate to `location`, applying the admin guard. Returns the route to render.
    pub fn open(&self, location: &str) -> Route {
        match guard(Route::parse(location), &self.session) {
            RouteDecision::Render(route) => {
                self.navigator.navigate(route.path());
                route
            }
            RouteDecision::Redirect(to) => {
                self.navigator.navigate(to);
                Route::parse(to)
            }
        }
    }
}
