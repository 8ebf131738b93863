//! Identity-bearing records and the admin resource contract.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::id::ContentId;
use crate::validation::Validate;

/// A record with a backend-issued identity.
///
/// Two records with the same id are the same record, whatever their fields say.
pub trait Entity {
    fn id(&self) -> ContentId;
}

/// An admin-managed collection (skills, projects, ...).
///
/// Ties a stored record to the form input that creates or updates it and to
/// the REST collection it lives under:
///
/// - `GET /public/{COLLECTION}` lists it,
/// - `POST /admin/{COLLECTION}` creates it,
/// - `PUT /admin/{COLLECTION}/{id}` updates it,
/// - `DELETE /admin/{COLLECTION}/{id}` deletes it.
pub trait Content: Entity + Clone + core::fmt::Debug + DeserializeOwned + Send + Sync + 'static {
    type Input: Validate + Clone + Default + core::fmt::Debug + Serialize + Send + Sync + 'static;

    /// Path segment of the collection.
    const COLLECTION: &'static str;

    /// Singular, human-facing name used in confirmations and log lines.
    const LABEL: &'static str;

    /// Prefill an edit form from the stored record.
    fn to_input(&self) -> Self::Input;
}
