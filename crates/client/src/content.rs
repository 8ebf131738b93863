//! Content access layer: one function per resource per operation.
//!
//! Functions are thin: they build the path, send the body, decode the reply.
//! No caching, batching, retries or validation happen here.

use serde::Deserialize;

use folio_core::{
    Content, ContactInfo, ContactInfoInput, ContactSubmission, ContentId, Education,
    EducationInput, Experience, ExperienceInput, Hobby, HobbyInput, Message, Portfolio, Project,
    ProjectInput, ResumeLanguage, Skill, SkillInput, Testimonial, TestimonialStatus,
    TestimonialSubmission,
};

use crate::error::ClientResult;
use crate::http::ApiClient;

/// Reply to state-changing calls that do not echo the record back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub id: Option<ContentId>,
    #[serde(default)]
    pub status: Option<TestimonialStatus>,
}

#[derive(Debug, Clone)]
pub struct ContentService {
    client: ApiClient,
}

macro_rules! content_ops {
    ($ty:ty, $input:ty, $list:ident, $create:ident, $update:ident, $delete:ident) => {
        pub async fn $list(&self) -> ClientResult<Vec<$ty>> {
            self.list::<$ty>().await
        }

        pub async fn $create(&self, input: &$input) -> ClientResult<$ty> {
            self.create::<$ty>(input).await
        }

        pub async fn $update(&self, id: ContentId, input: &$input) -> ClientResult<$ty> {
            self.update::<$ty>(id, input).await
        }

        pub async fn $delete(&self, id: ContentId) -> ClientResult<()> {
            self.delete::<$ty>(id).await
        }
    };
}

impl ContentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    // -- generic admin collections -------------------------------------------

    /// `GET /public/{collection}`
    pub async fn list<C: Content>(&self) -> ClientResult<Vec<C>> {
        self.client
            .get_list(&format!("/public/{}", C::COLLECTION))
            .await
    }

    /// `POST /admin/{collection}`
    pub async fn create<C: Content>(&self, input: &C::Input) -> ClientResult<C> {
        let created: C = self
            .client
            .post_json(&format!("/admin/{}", C::COLLECTION), input)
            .await?;
        tracing::info!(kind = C::LABEL, id = %created.id(), "created");
        Ok(created)
    }

    /// `PUT /admin/{collection}/{id}`
    pub async fn update<C: Content>(&self, id: ContentId, input: &C::Input) -> ClientResult<C> {
        let updated = self
            .client
            .put_json(&format!("/admin/{}/{id}", C::COLLECTION), input)
            .await?;
        tracing::info!(kind = C::LABEL, %id, "updated");
        Ok(updated)
    }

    /// `DELETE /admin/{collection}/{id}`
    pub async fn delete<C: Content>(&self, id: ContentId) -> ClientResult<()> {
        self.client
            .delete(&format!("/admin/{}/{id}", C::COLLECTION))
            .await?;
        tracing::info!(kind = C::LABEL, %id, "deleted");
        Ok(())
    }

    content_ops!(Skill, SkillInput, list_skills, create_skill, update_skill, delete_skill);
    content_ops!(
        Project,
        ProjectInput,
        list_projects,
        create_project,
        update_project,
        delete_project
    );
    content_ops!(
        Experience,
        ExperienceInput,
        list_experience,
        create_experience,
        update_experience,
        delete_experience
    );
    content_ops!(
        Education,
        EducationInput,
        list_education,
        create_education,
        update_education,
        delete_education
    );
    content_ops!(Hobby, HobbyInput, list_hobbies, create_hobby, update_hobby, delete_hobby);

    // -- public site -----------------------------------------------------------

    pub async fn portfolio(&self) -> ClientResult<Portfolio> {
        self.client.get_json("/public/portfolio").await
    }

    pub async fn approved_testimonials(&self) -> ClientResult<Vec<Testimonial>> {
        self.client.get_list("/public/testimonials").await
    }

    pub async fn submit_testimonial(
        &self,
        submission: &TestimonialSubmission,
    ) -> ClientResult<Testimonial> {
        self.client.post_json("/public/testimonials", submission).await
    }

    pub async fn submit_contact(&self, submission: &ContactSubmission) -> ClientResult<Message> {
        self.client.post_json("/public/contact", submission).await
    }

    pub async fn public_contact_info(&self) -> ClientResult<ContactInfo> {
        self.client.get_json("/public/contact-info").await
    }

    /// URL of the downloadable resume (served as a file, not JSON).
    pub fn resume_url(&self, lang: ResumeLanguage) -> String {
        self.client
            .url(&format!("/public/resume?lang={}", lang.as_str()))
    }

    // -- testimonial moderation ------------------------------------------------

    pub async fn all_testimonials(&self) -> ClientResult<Vec<Testimonial>> {
        self.client.get_list("/admin/testimonials").await
    }

    pub async fn approve_testimonial(&self, id: ContentId) -> ClientResult<Acknowledgement> {
        self.client
            .put_empty(&format!("/admin/testimonials/{id}/approve"))
            .await
    }

    pub async fn reject_testimonial(&self, id: ContentId) -> ClientResult<Acknowledgement> {
        self.client
            .put_empty(&format!("/admin/testimonials/{id}/reject"))
            .await
    }

    pub async fn delete_testimonial(&self, id: ContentId) -> ClientResult<()> {
        self.client
            .delete(&format!("/admin/testimonials/{id}"))
            .await
    }

    // -- contact messages ------------------------------------------------------

    pub async fn list_messages(&self) -> ClientResult<Vec<Message>> {
        self.client.get_list("/admin/messages").await
    }

    pub async fn mark_message_read(&self, id: ContentId) -> ClientResult<Acknowledgement> {
        self.client
            .put_empty(&format!("/admin/messages/{id}/read"))
            .await
    }

    pub async fn delete_message(&self, id: ContentId) -> ClientResult<()> {
        self.client.delete(&format!("/admin/messages/{id}")).await
    }

    // -- site contact info -----------------------------------------------------

    pub async fn contact_info(&self) -> ClientResult<ContactInfo> {
        self.client.get_json("/admin/contact-info").await
    }

    pub async fn update_contact_info(&self, input: &ContactInfoInput) -> ClientResult<ContactInfo> {
        self.client.put_json("/admin/contact-info", input).await
    }

    // -- resume ----------------------------------------------------------------

    /// Upload a PDF resume for one language (multipart field `resume`).
    pub async fn upload_resume(
        &self,
        lang: ResumeLanguage,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> ClientResult<Acknowledgement> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("resume", part);

        self.client
            .post_multipart(&format!("/admin/resume?lang={}", lang.as_str()), form)
            .await
    }

    // -- misc ------------------------------------------------------------------

    /// `GET /health`; true on any success status.
    pub async fn health(&self) -> bool {
        match self
            .client
            .send(self.client.request(reqwest::Method::GET, "/health"))
            .await
        {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(error = %err, "health check failed");
                false
            }
        }
    }
}
