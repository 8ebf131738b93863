//! `folio-auth`: client-side session boundary.
//!
//! The session is whatever the persisted client storage says it is: a stored
//! token means "signed in". Nothing here talks to the backend; validity is
//! discovered lazily when an API call is rejected.

pub mod session;
pub mod storage;

pub use session::{AuthSession, TOKEN_KEY, USER_KEY};
pub use storage::{ClientStorage, FileStorage, MemoryStorage, StorageError, default_storage_path};
