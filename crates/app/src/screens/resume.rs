//! Resume upload, one PDF per language.

use folio_client::ContentService;
use folio_core::ResumeLanguage;

use super::report;

pub const UPLOADED_MESSAGE: &str = "Resume uploaded successfully!";
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload resume.";

#[derive(Debug)]
pub struct ResumeScreen {
    content: ContentService,
    pub lang: ResumeLanguage,
    pub uploading: bool,
    /// Outcome of the last upload: `Ok` carries the success text.
    pub status: Option<Result<String, String>>,
}

impl ResumeScreen {
    pub fn new(content: ContentService) -> Self {
        Self {
            content,
            lang: ResumeLanguage::En,
            uploading: false,
            status: None,
        }
    }

    /// Public download link for the selected language.
    pub fn download_url(&self) -> String {
        self.content.resume_url(self.lang)
    }

    /// Upload `bytes` for the selected language. An empty file is ignored.
    pub async fn upload(&mut self, file_name: &str, bytes: Vec<u8>) -> bool {
        if bytes.is_empty() {
            return false;
        }

        self.uploading = true;
        self.status = None;
        let result = self.content.upload_resume(self.lang, file_name, bytes).await;
        self.uploading = false;

        match result {
            Ok(_) => {
                self.status = Some(Ok(UPLOADED_MESSAGE.to_string()));
                true
            }
            Err(err) => {
                self.status = Some(Err(report("upload", &err, UPLOAD_FAILED_MESSAGE)));
                false
            }
        }
    }
}
