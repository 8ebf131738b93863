//! `folio-app`: headless portfolio client.
//!
//! **Responsibility:** routing, the admin shell and the per-screen view-models
//! on top of `folio-client`. Rendering is left to whatever front end drives
//! these types; the `folio-admin` binary is one such driver.

pub mod context;
pub mod router;
pub mod screens;
pub mod shell;

pub use context::AppContext;
pub use router::{Navigator, Route, RouteDecision, guard};
pub use shell::{AdminShell, MenuEntry};
