pub mod list_domains;

pub use list_domains::{ListDomainsParams, ListDomainsTool};
