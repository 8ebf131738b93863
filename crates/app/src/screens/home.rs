//! Public landing page.

use folio_client::ContentService;
use folio_core::{ContactInfo, Portfolio};

use super::report;

#[derive(Debug)]
pub struct HomeScreen {
    content: ContentService,
    pub portfolio: Portfolio,
    pub contact_info: Option<ContactInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl HomeScreen {
    pub fn new(content: ContentService) -> Self {
        Self {
            content,
            portfolio: Portfolio::default(),
            contact_info: None,
            loading: true,
            error: None,
        }
    }

    /// Contact details are optional decoration; only the portfolio sets the banner.
    pub async fn load(&mut self) {
        self.loading = true;
        let (portfolio, contact_info) =
            tokio::join!(self.content.portfolio(), self.content.public_contact_info());

        match portfolio {
            Ok(portfolio) => {
                self.portfolio = portfolio;
                self.error = None;
            }
            Err(err) => self.error = Some(report("load", &err, "Failed to load portfolio.")),
        }
        match contact_info {
            Ok(info) => self.contact_info = Some(info),
            Err(err) => tracing::warn!(error = %err, "contact info unavailable"),
        }
        self.loading = false;
    }
}
