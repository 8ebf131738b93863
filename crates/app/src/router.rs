//! Client-side routes and the admin route guard.

use std::sync::{Arc, Mutex};

use folio_auth::AuthSession;

/// Path of the admin login screen; guarded routes redirect here.
pub const LOGIN_PATH: &str = "/admin";
/// Landing screen after a successful login.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Testimonials,
    Contact,
    Login,
    Dashboard,
    Skills,
    Projects,
    Experience,
    Education,
    Hobbies,
    Resume,
    ContactInfo,
    AdminTestimonials,
    Messages,
    NotFound(String),
}

impl Route {
    /// Every admin screen behind the guard, in menu order.
    pub const ADMIN: [Route; 10] = [
        Route::Dashboard,
        Route::Skills,
        Route::Projects,
        Route::Experience,
        Route::Education,
        Route::Hobbies,
        Route::Resume,
        Route::ContactInfo,
        Route::AdminTestimonials,
        Route::Messages,
    ];

    /// Map a location to a route. Query string, fragment and a trailing slash
    /// are ignored.
    pub fn parse(location: &str) -> Route {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Route::Home,
            "/testimonials" => Route::Testimonials,
            "/contact" => Route::Contact,
            "/admin" => Route::Login,
            "/admin/dashboard" => Route::Dashboard,
            "/admin/skills" => Route::Skills,
            "/admin/projects" => Route::Projects,
            "/admin/experience" => Route::Experience,
            "/admin/education" => Route::Education,
            "/admin/hobbies" => Route::Hobbies,
            "/admin/resume" => Route::Resume,
            "/admin/contact-info" => Route::ContactInfo,
            "/admin/testimonials" => Route::AdminTestimonials,
            "/admin/messages" => Route::Messages,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => HOME_PATH,
            Route::Testimonials => "/testimonials",
            Route::Contact => "/contact",
            Route::Login => LOGIN_PATH,
            Route::Dashboard => DASHBOARD_PATH,
            Route::Skills => "/admin/skills",
            Route::Projects => "/admin/projects",
            Route::Experience => "/admin/experience",
            Route::Education => "/admin/education",
            Route::Hobbies => "/admin/hobbies",
            Route::Resume => "/admin/resume",
            Route::ContactInfo => "/admin/contact-info",
            Route::AdminTestimonials => "/admin/testimonials",
            Route::Messages => "/admin/messages",
            Route::NotFound(path) => path,
        }
    }

    /// Menu label for admin screens.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Testimonials | Route::AdminTestimonials => "Testimonials",
            Route::Contact => "Contact",
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Skills => "Skills",
            Route::Projects => "Projects",
            Route::Experience => "Experience",
            Route::Education => "Education",
            Route::Hobbies => "Hobbies",
            Route::Resume => "Resume",
            Route::ContactInfo => "Contact Info",
            Route::Messages => "Messages",
            Route::NotFound(_) => "Not Found",
        }
    }

    /// Admin screens, and any unknown location under `/admin/`.
    pub fn is_guarded(&self) -> bool {
        match self {
            Route::NotFound(path) => path.starts_with("/admin/"),
            route => Route::ADMIN.contains(route),
        }
    }
}

/// Outcome of running the guard for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(&'static str),
}

/// Admit guarded routes only while a token is stored.
///
/// The token itself is not checked; a stale one is discovered by the next
/// rejected API call.
pub fn guard(route: Route, session: &AuthSession) -> RouteDecision {
    if route.is_guarded() && !session.is_authenticated() {
        tracing::debug!(path = route.path(), "no session; redirecting to login");
        return RouteDecision::Redirect(LOGIN_PATH);
    }
    RouteDecision::Render(route)
}

/// Current location of the client. Cheap to clone; clones share the location.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Arc<Mutex<String>>,
}

impl Navigator {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: Arc::new(Mutex::new(initial.into())),
        }
    }

    pub fn navigate(&self, path: &str) {
        tracing::debug!(path, "navigate");
        *self.lock() = path.to_string();
    }

    pub fn current(&self) -> String {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, String> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(HOME_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_auth::{ClientStorage, MemoryStorage, TOKEN_KEY};

    fn session(token: Option<&str>) -> AuthSession {
        let storage = Arc::new(MemoryStorage::new());
        if let Some(token) = token {
            storage.set(TOKEN_KEY, token).unwrap();
        }
        AuthSession::new(storage)
    }

    #[test]
    fn parse_ignores_trailing_slash_query_and_fragment() {
        assert_eq!(Route::parse("/admin/skills/"), Route::Skills);
        assert_eq!(Route::parse("/admin/skills?page=2"), Route::Skills);
        assert_eq!(Route::parse("/contact#form"), Route::Contact);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/?lang=fr"), Route::Home);
        assert_eq!(Route::parse("/admin/"), Route::Login);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(
            Route::parse("/admin/unknown"),
            Route::NotFound("/admin/unknown".into())
        );
        assert!(!Route::parse("/nope").is_guarded());
    }

    #[test]
    fn every_route_round_trips_through_its_path() {
        let public = [Route::Home, Route::Testimonials, Route::Contact, Route::Login];
        for route in public.iter().chain(Route::ADMIN.iter()) {
            assert_eq!(&Route::parse(route.path()), route);
        }
    }

    #[test]
    fn only_admin_screens_are_guarded() {
        assert!(Route::Dashboard.is_guarded());
        assert!(Route::Messages.is_guarded());
        assert!(!Route::Login.is_guarded());
        assert!(!Route::Home.is_guarded());
    }

    #[test]
    fn guard_redirects_without_token() {
        let decision = guard(Route::Dashboard, &session(None));
        assert_eq!(decision, RouteDecision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn guard_hides_unknown_admin_paths_without_token() {
        let decision = guard(Route::parse("/admin/settings"), &session(None));
        assert_eq!(decision, RouteDecision::Redirect(LOGIN_PATH));

        let decision = guard(Route::parse("/admin/settings"), &session(Some("t")));
        assert_eq!(
            decision,
            RouteDecision::Render(Route::NotFound("/admin/settings".into()))
        );

        let decision = guard(Route::parse("/administrator"), &session(None));
        assert_eq!(
            decision,
            RouteDecision::Render(Route::NotFound("/administrator".into()))
        );
    }

    #[test]
    fn guard_renders_with_token() {
        let decision = guard(Route::Dashboard, &session(Some("t")));
        assert_eq!(decision, RouteDecision::Render(Route::Dashboard));
    }

    #[test]
    fn public_routes_render_without_token() {
        assert_eq!(
            guard(Route::Contact, &session(None)),
            RouteDecision::Render(Route::Contact)
        );
        assert_eq!(
            guard(Route::Login, &session(None)),
            RouteDecision::Render(Route::Login)
        );
    }

    #[test]
    fn navigator_clones_share_location() {
        let nav = Navigator::default();
        let other = nav.clone();
        other.navigate("/admin");
        assert_eq!(nav.current(), "/admin");
    }
}
