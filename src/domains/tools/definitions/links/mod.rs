//! Link tools module.
//!
//! - `create`: create a short link
//! - `update`: partially update a link by ID
//! - `upsert`: create or return an existing link
//! - `delete`: delete a link by ID
//!
//! `create` and `upsert` share their parameters and domain resolution via `write`.

pub mod create;
pub mod delete;
pub mod update;
pub mod upsert;
pub mod write;

pub use create::CreateLinkTool;
pub use delete::{DeleteLinkParams, DeleteLinkTool};
pub use update::{UpdateLinkParams, UpdateLinkTool};
pub use upsert::UpsertLinkTool;
pub use write::ShortLinkParams;
