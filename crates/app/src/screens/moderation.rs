//! Testimonial moderation.

use folio_client::ContentService;
use folio_core::{ContentId, Testimonial, TestimonialStatus};

use super::{Confirmation, report};

#[derive(Debug)]
pub struct ModerationScreen {
    content: ContentService,
    pub items: Vec<Testimonial>,
    pub loading: bool,
    pub error: Option<String>,
    confirm: Confirmation,
}

impl ModerationScreen {
    pub fn new(content: ContentService) -> Self {
        Self {
            content,
            items: Vec::new(),
            loading: true,
            error: None,
            confirm: Confirmation::default(),
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.content.all_testimonials().await {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(report("load", &err, "Failed to load testimonials."));
            }
        }
        self.loading = false;
    }

    pub fn pending_count(&self) -> usize {
        self.items
            .iter()
            .filter(|t| t.status == TestimonialStatus::Pending)
            .count()
    }

    pub async fn approve(&mut self, id: ContentId) -> bool {
        let result = self.content.approve_testimonial(id).await;
        self.after(result, "approve", "Failed to approve testimonial.").await
    }

    pub async fn reject(&mut self, id: ContentId) -> bool {
        let result = self.content.reject_testimonial(id).await;
        self.after(result, "reject", "Failed to reject testimonial.").await
    }

    pub fn request_delete(&mut self, id: ContentId) {
        self.confirm.request(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.cancel();
    }

    pub fn pending_delete(&self) -> Option<ContentId> {
        self.confirm.pending()
    }

    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.confirm.take() else {
            return false;
        };
        let result = self.content.delete_testimonial(id).await;
        self.after(result, "delete", "Failed to delete testimonial.").await
    }

    async fn after<T>(
        &mut self,
        result: folio_client::ClientResult<T>,
        action: &'static str,
        fallback: &str,
    ) -> bool {
        match result {
            Ok(_) => {
                self.load().await;
                true
            }
            Err(err) => {
                self.error = Some(report(action, &err, fallback));
                false
            }
        }
    }
}
