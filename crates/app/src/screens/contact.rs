//! Public contact form.
//!
//! Besides what the visitor types, a submission carries spam signals: the
//! `website` honeypot, the time the form was first shown, and the optional
//! bot-protection token.

use chrono::Utc;

use folio_client::ContentService;
use folio_core::content::CONTACT_FORM_SUBJECT;
use folio_core::{ContactInfo, ContactSubmission, Validate};

use crate::context::AppContext;

use super::report;

pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const CAPTCHA_REQUIRED_MESSAGE: &str =
    "Please complete the captcha challenge before sending your message.";

/// What the visitor typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Honeypot; hidden from humans.
    pub website: String,
}

#[derive(Debug)]
pub struct ContactScreen {
    content: ContentService,
    pub contact_info: Option<ContactInfo>,
    pub form: ContactForm,
    pub submitting: bool,
    pub submitted: bool,
    pub error: Option<String>,
    turnstile_required: bool,
    turnstile_token: Option<String>,
    started_at_ms: i64,
}

impl ContactScreen {
    /// `turnstile_required` is true when a bot-protection site key is configured.
    pub fn new(content: ContentService, turnstile_required: bool) -> Self {
        Self {
            content,
            contact_info: None,
            form: ContactForm::default(),
            submitting: false,
            submitted: false,
            error: None,
            turnstile_required,
            turnstile_token: None,
            started_at_ms: Utc::now().timestamp_millis(),
        }
    }

    /// Requires the bot-protection token when a site key is configured.
    pub fn from_context(ctx: &AppContext) -> Self {
        Self::new(ctx.content.clone(), ctx.config.turnstile_site_key.is_some())
    }

    pub fn turnstile_required(&self) -> bool {
        self.turnstile_required
    }

    pub async fn load(&mut self) {
        match self.content.public_contact_info().await {
            Ok(info) => self.contact_info = Some(info),
            Err(err) => tracing::warn!(error = %err, "failed to fetch contact info"),
        }
    }

    /// When the form was (re)started, in Unix milliseconds.
    pub fn started_at_ms(&self) -> i64 {
        self.started_at_ms
    }

    /// Token from the bot-protection widget; blank clears it (widget expired or errored).
    pub fn set_turnstile_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.turnstile_token = (!token.trim().is_empty()).then_some(token);
    }

    fn submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.form.name.trim().to_string(),
            email: self.form.email.trim().to_string(),
            subject: CONTACT_FORM_SUBJECT.to_string(),
            content: self.form.message.trim().to_string(),
            website: self.form.website.clone(),
            submitted_at_ms: self.started_at_ms,
            turnstile_token: self.turnstile_token.clone(),
        }
    }

    pub async fn submit(&mut self, form: ContactForm) -> bool {
        self.error = None;
        self.form = form;

        let submission = self.submission();
        if let Err(err) = submission.validate() {
            self.error = Some(err.user_message());
            return false;
        }
        if self.turnstile_required && self.turnstile_token.is_none() {
            self.error = Some(CAPTCHA_REQUIRED_MESSAGE.to_string());
            return false;
        }

        self.submitting = true;
        let result = self.content.submit_contact(&submission).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.submitted = true;
                self.form = ContactForm::default();
                self.turnstile_token = None;
                self.started_at_ms = Utc::now().timestamp_millis();
                true
            }
            Err(err) => {
                self.error = Some(report("submit", &err, SEND_FAILED_MESSAGE));
                false
            }
        }
    }
}
