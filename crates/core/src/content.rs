//! Portfolio content records and their form inputs.
//!
//! Wire format is camelCase JSON. The backend emits `null` for empty lists and
//! zero timestamps for unset dates, so list fields tolerate `null` and every
//! response-only field has a default.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::entity::{Content, Entity};
use crate::id::ContentId;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ContentId,
    pub title: String,
    #[serde(default)]
    pub title_fr: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_fr: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub code_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub title: String,
    pub title_fr: String,
    pub description: String,
    pub description_fr: String,
    pub image_url: String,
    pub live_url: String,
    pub code_url: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub sort_order: i32,
}

impl Entity for Project {
    fn id(&self) -> ContentId {
        self.id
    }
}

impl Content for Project {
    type Input = ProjectInput;
    const COLLECTION: &'static str = "projects";
    const LABEL: &'static str = "project";

    fn to_input(&self) -> ProjectInput {
        ProjectInput {
            title: self.title.clone(),
            title_fr: self.title_fr.clone(),
            description: self.description.clone(),
            description_fr: self.description_fr.clone(),
            image_url: self.image_url.clone(),
            live_url: self.live_url.clone(),
            code_url: self.code_url.clone(),
            tags: self.tags.clone(),
            featured: self.featured,
            sort_order: self.sort_order,
        }
    }
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: ContentId,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Percentage, 0..=100.
    #[serde(default)]
    pub proficiency: i32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInput {
    pub name: String,
    pub icon: String,
    pub proficiency: i32,
    pub category: String,
    pub sort_order: i32,
}

impl Default for SkillInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            icon: String::new(),
            proficiency: 50,
            category: String::new(),
            sort_order: 0,
        }
    }
}

impl Entity for Skill {
    fn id(&self) -> ContentId {
        self.id
    }
}

impl Content for Skill {
    type Input = SkillInput;
    const COLLECTION: &'static str = "skills";
    const LABEL: &'static str = "skill";

    fn to_input(&self) -> SkillInput {
        SkillInput {
            name: self.name.clone(),
            icon: self.icon.clone(),
            proficiency: self.proficiency,
            category: self.category.clone(),
            sort_order: self.sort_order,
        }
    }
}

// ---------------------------------------------------------------------------
// Experience
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: ContentId,
    pub title: String,
    #[serde(default)]
    pub title_fr: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub company_fr: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub location_fr: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description_fr: Vec<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Experience form. Dates go over the wire as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceInput {
    pub title: String,
    pub title_fr: String,
    pub company: String,
    pub company_fr: String,
    pub location: String,
    pub location_fr: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Vec<String>,
    pub description_fr: Vec<String>,
    pub sort_order: i32,
}

impl Entity for Experience {
    fn id(&self) -> ContentId {
        self.id
    }
}

impl Content for Experience {
    type Input = ExperienceInput;
    const COLLECTION: &'static str = "experience";
    const LABEL: &'static str = "experience";

    fn to_input(&self) -> ExperienceInput {
        ExperienceInput {
            title: self.title.clone(),
            title_fr: self.title_fr.clone(),
            company: self.company.clone(),
            company_fr: self.company_fr.clone(),
            location: self.location.clone(),
            location_fr: self.location_fr.clone(),
            start_date: meaningful_date(self.start_date),
            end_date: if self.current { None } else { meaningful_date(self.end_date) },
            current: self.current,
            description: self.description.clone(),
            description_fr: self.description_fr.clone(),
            sort_order: self.sort_order,
        }
    }
}

// ---------------------------------------------------------------------------
// Education
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: ContentId,
    pub degree: String,
    #[serde(default)]
    pub degree_fr: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub school_fr: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub location_fr: String,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_fr: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationInput {
    pub degree: String,
    pub degree_fr: String,
    pub school: String,
    pub school_fr: String,
    pub location: String,
    pub location_fr: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: String,
    pub description_fr: String,
    pub sort_order: i32,
}

impl Entity for Education {
    fn id(&self) -> ContentId {
        self.id
    }
}

impl Content for Education {
    type Input = EducationInput;
    const COLLECTION: &'static str = "education";
    const LABEL: &'static str = "education";

    fn to_input(&self) -> EducationInput {
        EducationInput {
            degree: self.degree.clone(),
            degree_fr: self.degree_fr.clone(),
            school: self.school.clone(),
            school_fr: self.school_fr.clone(),
            location: self.location.clone(),
            location_fr: self.location_fr.clone(),
            start_date: meaningful_date(self.start_date),
            end_date: meaningful_date(self.end_date),
            description: self.description.clone(),
            description_fr: self.description_fr.clone(),
            sort_order: self.sort_order,
        }
    }
}

// ---------------------------------------------------------------------------
// Hobbies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hobby {
    pub id: ContentId,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HobbyInput {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub sort_order: i32,
}

impl Entity for Hobby {
    fn id(&self) -> ContentId {
        self.id
    }
}

impl Content for Hobby {
    type Input = HobbyInput;
    const COLLECTION: &'static str = "hobbies";
    const LABEL: &'static str = "hobby";

    fn to_input(&self) -> HobbyInput {
        HobbyInput {
            name: self.name.clone(),
            icon: self.icon.clone(),
            description: self.description.clone(),
            sort_order: self.sort_order,
        }
    }
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

/// Moderation state of a visitor testimonial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonialStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl TestimonialStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestimonialStatus::Pending => "pending",
            TestimonialStatus::Approved => "approved",
            TestimonialStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: ContentId,
    pub author_name: String,
    #[serde(default)]
    pub author_role: String,
    #[serde(default)]
    pub author_email: String,
    pub content: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub status: TestimonialStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Testimonial {
    fn id(&self) -> ContentId {
        self.id
    }
}

/// Testimonial form submitted by a visitor. Lands as `pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialSubmission {
    pub author_name: String,
    pub author_role: String,
    pub author_email: String,
    pub content: String,
    pub rating: i32,
}

impl Default for TestimonialSubmission {
    fn default() -> Self {
        Self {
            author_name: String::new(),
            author_role: String::new(),
            author_email: String::new(),
            content: String::new(),
            rating: 5,
        }
    }
}

// ---------------------------------------------------------------------------
// Contact messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: ContentId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub content: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Message {
    fn id(&self) -> ContentId {
        self.id
    }
}

/// Subject used by the public contact form, which has no subject field.
pub const CONTACT_FORM_SUBJECT: &str = "Contact Form Submission";

/// Body of `POST /public/contact`.
///
/// `website` is a honeypot that humans leave empty; `submitted_at_ms` is the
/// time the form was first shown. Both are forwarded untouched for the
/// backend's spam heuristics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub content: String,
    pub website: String,
    pub submitted_at_ms: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnstile_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Site contact info
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub id: Option<ContentId>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoInput {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
    pub website: String,
}

impl ContactInfo {
    pub fn to_input(&self) -> ContactInfoInput {
        ContactInfoInput {
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            linkedin: self.linkedin.clone(),
            github: self.github.clone(),
            twitter: self.twitter.clone(),
            website: self.website.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Body of `GET /public/portfolio`: everything the landing page renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<Skill>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hobbies: Vec<Hobby>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub testimonials: Vec<Testimonial>,
}

/// Language variant of the downloadable resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeLanguage {
    En,
    Fr,
}

impl ResumeLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeLanguage::En => "en",
            ResumeLanguage::Fr => "fr",
        }
    }
}

/// The backend encodes "no date" as the zero timestamp (year 1).
fn meaningful_date(value: Option<DateTime<Utc>>) -> Option<NaiveDate> {
    value
        .map(|ts| ts.date_naive())
        .filter(|date| chrono::Datelike::year(date) > 1)
}
