//! Public testimonials wall and submission form.

use folio_client::ContentService;
use folio_core::{Testimonial, TestimonialSubmission, Validate};

use super::report;

#[derive(Debug)]
pub struct PublicTestimonialsScreen {
    content: ContentService,
    pub items: Vec<Testimonial>,
    pub form: TestimonialSubmission,
    pub loading: bool,
    pub submitting: bool,
    /// Set once a submission was accepted; it awaits moderation.
    pub submitted: bool,
    pub error: Option<String>,
}

impl PublicTestimonialsScreen {
    pub fn new(content: ContentService) -> Self {
        Self {
            content,
            items: Vec::new(),
            form: TestimonialSubmission::default(),
            loading: true,
            submitting: false,
            submitted: false,
            error: None,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.content.approved_testimonials().await {
            Ok(items) => self.items = items,
            Err(err) => self.error = Some(report("load", &err, "Failed to load testimonials.")),
        }
        self.loading = false;
    }

    pub async fn submit(&mut self, form: TestimonialSubmission) -> bool {
        self.error = None;
        self.submitted = false;
        self.form = form;

        if let Err(err) = self.form.validate() {
            self.error = Some(err.user_message());
            return false;
        }

        self.submitting = true;
        let result = self.content.submit_testimonial(&self.form).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.submitted = true;
                self.form = TestimonialSubmission::default();
                true
            }
            Err(err) => {
                self.error = Some(report(
                    "submit",
                    &err,
                    "Failed to submit testimonial. Please try again.",
                ));
                false
            }
        }
    }
}
