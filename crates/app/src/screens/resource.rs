//! Generic list + modal editor for the simple admin collections.

use folio_client::ContentService;
use folio_core::{
    Content, ContentId, DomainError, DomainResult, Education, Experience, Hobby, Project, Skill,
    Validate,
};

use super::{Confirmation, report};

pub type SkillsScreen = ResourceScreen<Skill>;
pub type ProjectsScreen = ResourceScreen<Project>;
pub type ExperienceScreen = ResourceScreen<Experience>;
pub type EducationScreen = ResourceScreen<Education>;
pub type HobbiesScreen = ResourceScreen<Hobby>;

/// Open create/edit modal.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor<I> {
    /// `None` while creating.
    pub editing: Option<ContentId>,
    pub form: I,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct ResourceScreen<C: Content> {
    content: ContentService,
    pub items: Vec<C>,
    pub loading: bool,
    pub error: Option<String>,
    pub editor: Option<Editor<C::Input>>,
    confirm: Confirmation,
}

impl<C: Content> ResourceScreen<C> {
    pub fn new(content: ContentService) -> Self {
        Self {
            content,
            items: Vec::new(),
            loading: true,
            error: None,
            editor: None,
            confirm: Confirmation::default(),
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.content.list::<C>().await {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                let fallback = format!("Failed to load {}.", C::COLLECTION);
                self.error = Some(report("load", &err, &fallback));
            }
        }
        self.loading = false;
    }

    pub fn open_create(&mut self) {
        self.editor = Some(Editor {
            editing: None,
            form: C::Input::default(),
            error: None,
        });
    }

    /// Open the editor prefilled from a loaded record.
    pub fn open_edit(&mut self, id: ContentId) -> DomainResult<()> {
        let item = self
            .items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(DomainError::not_found)?;
        self.editor = Some(Editor {
            editing: Some(id),
            form: item.to_input(),
            error: None,
        });
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.editor = None;
    }

    /// Validate, then create or update depending on the open editor.
    ///
    /// On success the modal closes and the list reloads. Returns whether the
    /// record was saved.
    pub async fn submit(&mut self, input: C::Input) -> bool {
        let editing = self.editor.as_ref().and_then(|editor| editor.editing);

        if let Err(err) = input.validate() {
            self.set_form_error(input, err.user_message());
            return false;
        }

        let saved = match editing {
            Some(id) => self.content.update::<C>(id, &input).await,
            None => self.content.create::<C>(&input).await,
        };

        match saved {
            Ok(_) => {
                self.editor = None;
                self.load().await;
                true
            }
            Err(err) => {
                let fallback = format!("Failed to save {}.", C::LABEL);
                let message = report("save", &err, &fallback);
                self.set_form_error(input, message);
                false
            }
        }
    }

    fn set_form_error(&mut self, input: C::Input, message: String) {
        let editor = self.editor.get_or_insert_with(|| Editor {
            editing: None,
            form: C::Input::default(),
            error: None,
        });
        editor.form = input;
        editor.error = Some(message);
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

    /// Delete the record awaiting confirmation, then reload.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.confirm.take() else {
            return false;
        };

        match self.content.delete::<C>(id).await {
            Ok(()) => {
                self.load().await;
                true
            }
            Err(err) => {
                let fallback = format!("Failed to delete {}.", C::LABEL);
                self.error = Some(report("delete", &err, &fallback));
                false
            }
        }
    }
}
