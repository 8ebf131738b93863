//! Headless screen view-models.
//!
//! Each screen owns its state slice, loads on mount (`load`) and reloads after
//! every successful mutation. A failed call sets `error` and leaves the screen
//! usable.

pub mod contact;
pub mod contact_info;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod messages;
pub mod moderation;
pub mod public_testimonials;
pub mod resource;
pub mod resume;

pub use contact::{ContactForm, ContactScreen};
pub use contact_info::ContactInfoScreen;
pub use dashboard::{DashboardCounts, DashboardScreen};
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use messages::MessagesScreen;
pub use moderation::ModerationScreen;
pub use public_testimonials::PublicTestimonialsScreen;
pub use resource::{
    EducationScreen, Editor, ExperienceScreen, HobbiesScreen, ProjectsScreen, ResourceScreen,
    SkillsScreen,
};
pub use resume::ResumeScreen;

use folio_client::ClientError;
use folio_core::ContentId;

/// Log a failed call and turn it into banner text.
fn report(action: &'static str, err: &ClientError, fallback: &str) -> String {
    tracing::warn!(action, error = %err, "screen action failed");
    err.user_message(fallback)
}

/// Two-step delete: request, then confirm or cancel.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pending: Option<ContentId>,
}

impl Confirmation {
    pub fn request(&mut self, id: ContentId) {
        self.pending = Some(id);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<ContentId> {
        self.pending
    }

    fn take(&mut self) -> Option<ContentId> {
        self.pending.take()
    }
}
