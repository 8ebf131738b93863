//! Admin landing screen: who is signed in and how much content exists.

use folio_client::{AuthService, ClientError, ClientResult, ContentService};
use folio_core::{AdminProfile, TestimonialStatus};

use super::report;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub skills: usize,
    pub projects: usize,
    pub experience: usize,
    pub education: usize,
    pub hobbies: usize,
    pub testimonials: usize,
    pub pending_testimonials: usize,
    pub messages: usize,
    pub unread_messages: usize,
}

#[derive(Debug)]
pub struct DashboardScreen {
    auth: AuthService,
    content: ContentService,
    pub profile: Option<AdminProfile>,
    pub counts: DashboardCounts,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardScreen {
    pub fn new(auth: AuthService, content: ContentService) -> Self {
        Self {
            profile: auth.current_user(),
            auth,
            content,
            counts: DashboardCounts::default(),
            loading: true,
            error: None,
        }
    }

    /// Fetch the profile and every collection concurrently.
    ///
    /// A collection that fails to load counts as zero and sets the banner.
    pub async fn load(&mut self) {
        self.loading = true;
        self.error = None;

        let c = &self.content;
        let (profile, skills, projects, experience, education, hobbies, testimonials, messages) = tokio::join!(
            self.auth.profile(),
            c.list_skills(),
            c.list_projects(),
            c.list_experience(),
            c.list_education(),
            c.list_hobbies(),
            c.all_testimonials(),
            c.list_messages(),
        );

        let mut failures = Vec::new();
        let testimonials = or_empty(testimonials, &mut failures);
        let messages = or_empty(messages, &mut failures);

        self.counts = DashboardCounts {
            skills: or_empty(skills, &mut failures).len(),
            projects: or_empty(projects, &mut failures).len(),
            experience: or_empty(experience, &mut failures).len(),
            education: or_empty(education, &mut failures).len(),
            hobbies: or_empty(hobbies, &mut failures).len(),
            testimonials: testimonials.len(),
            pending_testimonials: testimonials
                .iter()
                .filter(|t| t.status == TestimonialStatus::Pending)
                .count(),
            messages: messages.len(),
            unread_messages: messages.iter().filter(|m| !m.read).count(),
        };

        match profile {
            Ok(profile) => self.profile = Some(profile),
            Err(err) => failures.push(err),
        }

        if let Some(err) = failures.first() {
            self.error = Some(report("load", err, "Failed to load dashboard."));
        }
        self.loading = false;
    }
}

fn or_empty<T>(result: ClientResult<Vec<T>>, failures: &mut Vec<ClientError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        failures.push(err);
        Vec::new()
    })
}
