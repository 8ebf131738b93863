//! Client-side form checks.
//!
//! These run before a form is submitted so obviously incomplete input never
//! reaches the network. They are a UX nicety; the backend re-validates
//! everything.

use std::sync::LazyLock;

use regex::Regex;

use crate::admin::LoginRequest;
use crate::content::{
    ContactInfoInput, ContactSubmission, EducationInput, ExperienceInput, HobbyInput, ProjectInput,
    SkillInput, TestimonialSubmission,
};
use crate::error::{DomainError, DomainResult};

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("static email pattern"));

/// Minimum trimmed length of the contact form's name field.
pub const CONTACT_NAME_MIN_CHARS: usize = 2;
/// Minimum trimmed length of the contact form's message field.
pub const CONTACT_MESSAGE_MIN_CHARS: usize = 10;

/// A form that can be checked before submission.
///
/// Returns the first failing rule as [`DomainError::Validation`], in the
/// order fields appear on screen.
pub trait Validate {
    fn validate(&self) -> DomainResult<()>;
}

/// Loose `local@domain.tld` shape check.
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value.trim())
}

fn required(value: &str, message: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(message));
    }
    Ok(())
}

fn min_chars(value: &str, min: usize, message: &str) -> DomainResult<()> {
    if value.trim().chars().count() < min {
        return Err(DomainError::validation(message));
    }
    Ok(())
}

impl Validate for ProjectInput {
    fn validate(&self) -> DomainResult<()> {
        required(&self.title, "Title is required")?;
        required(&self.description, "Description is required")
    }
}

impl Validate for SkillInput {
    fn validate(&self) -> DomainResult<()> {
        required(&self.name, "Name is required")?;
        if !(0..=100).contains(&self.proficiency) {
            return Err(DomainError::validation(
                "Proficiency must be between 0 and 100",
            ));
        }
        Ok(())
    }
}

impl Validate for ExperienceInput {
    fn validate(&self) -> DomainResult<()> {
        required(&self.title, "Title is required")?;
        required(&self.company, "Company is required")?;
        if self.start_date.is_none() {
            return Err(DomainError::validation("Start date is required"));
        }
        Ok(())
    }
}

impl Validate for EducationInput {
    fn validate(&self) -> DomainResult<()> {
        required(&self.degree, "Degree is required")?;
        required(&self.school, "School is required")?;
        if self.start_date.is_none() {
            return Err(DomainError::validation("Start date is required"));
        }
        Ok(())
    }
}

impl Validate for HobbyInput {
    fn validate(&self) -> DomainResult<()> {
        required(&self.name, "Name is required")?;
        required(&self.icon, "Icon is required")
    }
}

impl Validate for ContactInfoInput {
    fn validate(&self) -> DomainResult<()> {
        if !self.email.trim().is_empty() && !is_email_shaped(&self.email) {
            return Err(DomainError::validation("Please enter a valid email address."));
        }
        Ok(())
    }
}

impl Validate for TestimonialSubmission {
    fn validate(&self) -> DomainResult<()> {
        required(&self.author_name, "Name is required")?;
        if !is_email_shaped(&self.author_email) {
            return Err(DomainError::validation("Please enter a valid email address."));
        }
        required(&self.content, "Testimonial is required")?;
        if !(1..=5).contains(&self.rating) {
            return Err(DomainError::validation("Rating must be between 1 and 5"));
        }
        Ok(())
    }
}

impl Validate for ContactSubmission {
    fn validate(&self) -> DomainResult<()> {
        min_chars(
            &self.name,
            CONTACT_NAME_MIN_CHARS,
            "Please enter your name (at least 2 characters).",
        )?;
        if !is_email_shaped(&self.email) {
            return Err(DomainError::validation("Please enter a valid email address."));
        }
        min_chars(
            &self.content,
            CONTACT_MESSAGE_MIN_CHARS,
            "Message must be at least 10 characters.",
        )
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> DomainResult<()> {
        if !is_email_shaped(&self.email) {
            return Err(DomainError::validation("Please enter a valid email address."));
        }
        if self.password.is_empty() {
            return Err(DomainError::validation("Password is required"));
        }
        Ok(())
    }
}
