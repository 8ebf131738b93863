//! Admin sign-in.

use folio_client::AuthService;
use folio_core::{LoginRequest, Validate};

use crate::router::{DASHBOARD_PATH, Navigator};

use super::report;

pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password.";

#[derive(Debug)]
pub struct LoginScreen {
    auth: AuthService,
    navigator: Navigator,
    pub form: LoginRequest,
    pub submitting: bool,
    pub error: Option<String>,
}

impl LoginScreen {
    pub fn new(auth: AuthService, navigator: Navigator) -> Self {
        Self {
            auth,
            navigator,
            form: LoginRequest::default(),
            submitting: false,
            error: None,
        }
    }

    /// Sign in; on success the session is stored and the dashboard opened.
    pub async fn submit(&mut self, form: LoginRequest) -> bool {
        self.error = None;
        self.form = form;

        if let Err(err) = self.form.validate() {
            self.error = Some(err.user_message());
            return false;
        }

        self.submitting = true;
        let result = self.auth.login(&self.form).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.form.password.clear();
                self.navigator.navigate(DASHBOARD_PATH);
                true
            }
            Err(err) => {
                self.error = Some(report("login", &err, LOGIN_FAILED_MESSAGE));
                false
            }
        }
    }
}
