//! `folio-core`: portfolio content model.
//!
//! This crate contains the records exchanged with the portfolio REST API, the
//! write-side input records the admin forms produce, and the client-side form
//! validation rules. It performs no IO.

pub mod admin;
pub mod content;
pub mod entity;
pub mod error;
pub mod id;
pub mod validation;

pub use admin::{AdminProfile, LoginRequest, LoginResponse};
pub use content::{
    ContactInfo, ContactInfoInput, ContactSubmission, Education, EducationInput, Experience,
    ExperienceInput, Hobby, HobbyInput, Message, Portfolio, Project, ProjectInput, ResumeLanguage,
    Skill, SkillInput, Testimonial, TestimonialStatus, TestimonialSubmission,
};
pub use entity::{Content, Entity};
pub use error::{DomainError, DomainResult};
pub use id::ContentId;
pub use validation::Validate;
