//! Dub API domain.
//!
//! Typed access to the remote link-shortening service: an authenticated
//! HTTP client, its wire types, and the domain-resolution rules shared by
//! the link tools.

mod client;
mod error;
mod resolver;
mod types;

pub use client::{DEFAULT_BASE_URL, DubClient};
pub use error::{DubError, DubResult};
pub use resolver::{DomainLookupError, find_by_slug, select_primary};
pub use types::{Domain, Link, LinkRequest, LinkUpdate};
