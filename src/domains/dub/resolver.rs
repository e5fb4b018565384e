//! Domain resolution for link creation.
//!
//! Each lookup refetches the full domain list; nothing is cached between
//! calls.

use thiserror::Error;
use tracing::{debug, warn};

use super::client::DubClient;
use super::error::DubError;
use super::types::Domain;

/// Errors from resolving the domain a link should live on.
#[derive(Debug, Error)]
pub enum DomainLookupError {
    /// The workspace has no domains at all.
    #[error("No domains found in the workspace")]
    NoDomains,

    /// Fetching the domain list failed.
    #[error(transparent)]
    Remote(#[from] DubError),
}

/// Pick the domain flagged primary, else the first one.
pub fn select_primary(domains: &[Domain]) -> Option<&Domain> {
    domains.iter().find(|d| d.primary).or_else(|| domains.first())
}

/// Find a domain by exact slug.
pub fn find_by_slug<'a>(domains: &'a [Domain], slug: &str) -> Option<&'a Domain> {
    domains.iter().find(|d| d.slug == slug)
}

impl DubClient {
    /// The workspace's primary domain, falling back to the first listed.
    pub async fn primary_domain(&self) -> Result<Domain, DomainLookupError> {
        let domains = self.list_domains().await?;
        match select_primary(&domains) {
            Some(domain) => {
                debug!("Resolved primary domain: {}", domain.slug);
                Ok(domain.clone())
            }
            None => {
                warn!("Workspace has no domains");
                Err(DomainLookupError::NoDomains)
            }
        }
    }

    /// The domain with the given slug, or `None` when absent.
    pub async fn domain_by_slug(&self, slug: &str) -> Result<Option<Domain>, DubError> {
        let domains = self.list_domains().await?;
        Ok(find_by_slug(&domains, slug).cloned())
    }
}
