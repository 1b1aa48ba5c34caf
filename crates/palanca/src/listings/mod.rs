//! Listing catalog: domain model, storage traits, search filtering, CSV
//! import, and the public HTTP router.

pub mod domain;
pub mod filter;
pub mod import;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    Agent, AgentId, ContactId, ContactInterest, ContactRequest, ContactSubmission, NewAgent,
    NewProperty, Property, PropertyId, PropertyKind, PropertyStatus, PropertyUpdate,
    DEFAULT_CURRENCY,
};
pub use filter::PropertyFilter;
pub use import::{ListingCsvImporter, ListingImportError};
pub use repository::{AgentRepository, ContactRepository, ListingRepository, RepositoryError};
pub use router::{catalog_router, CatalogRouterState};
pub use service::{CatalogError, CatalogService, ContactRejection};
