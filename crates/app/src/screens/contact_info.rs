//! Site contact details editor.

use folio_client::ContentService;
use folio_core::{ContactInfo, ContactInfoInput, Validate};

use super::report;

pub const SAVED_MESSAGE: &str = "Contact information updated successfully";

#[derive(Debug)]
pub struct ContactInfoScreen {
    content: ContentService,
    pub info: ContactInfo,
    pub form: ContactInfoInput,
    pub loading: bool,
    pub error: Option<String>,
    /// Set after a successful save until dismissed.
    pub saved: bool,
}

impl ContactInfoScreen {
    pub fn new(content: ContentService) -> Self {
        Self {
            content,
            info: ContactInfo::default(),
            form: ContactInfoInput::default(),
            loading: true,
            error: None,
            saved: false,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.content.contact_info().await {
            Ok(info) => {
                self.form = info.to_input();
                self.info = info;
                self.error = None;
            }
            Err(err) => {
                self.saved = false;
                self.error = Some(report("load", &err, "Failed to load contact information"));
            }
        }
        self.loading = false;
    }

    pub async fn save(&mut self, input: ContactInfoInput) -> bool {
        self.saved = false;
        self.form = input;

        if let Err(err) = self.form.validate() {
            self.error = Some(err.user_message());
            return false;
        }

        match self.content.update_contact_info(&self.form).await {
            Ok(_) => {
                self.error = None;
                self.saved = true;
                self.load().await;
                true
            }
            Err(err) => {
                self.error = Some(report("save", &err, "Failed to update contact information"));
                false
            }
        }
    }

    /// Success banner text, shown while `saved` is set.
    pub fn status_message(&self) -> Option<&'static str> {
        self.saved.then_some(SAVED_MESSAGE)
    }

    pub fn dismiss_status(&mut self) {
        self.saved = false;
        self.error = None;
    }
}
