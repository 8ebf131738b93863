//! Contact message inbox.

use folio_client::ContentService;
use folio_core::{ContentId, Message};

use super::{Confirmation, report};

#[derive(Debug)]
pub struct MessagesScreen {
    content: ContentService,
    pub items: Vec<Message>,
    pub loading: bool,
    pub error: Option<String>,
    confirm: Confirmation,
}

impl MessagesScreen {
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
        match self.content.list_messages().await {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(report("load", &err, "Failed to load messages."));
            }
        }
        self.loading = false;
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|m| !m.read).count()
    }

    pub async fn mark_read(&mut self, id: ContentId) -> bool {
        match self.content.mark_message_read(id).await {
            Ok(_) => {
                self.load().await;
                true
            }
            Err(err) => {
                self.error = Some(report("mark_read", &err, "Failed to mark message as read."));
                false
            }
        }
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
        match self.content.delete_message(id).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(err) => {
                self.error = Some(report("delete", &err, "Failed to delete message."));
                false
            }
        }
    }
}
