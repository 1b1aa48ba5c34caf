use super::domain::{Agent, AgentId, ContactRequest, Property, PropertyId};

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Storage abstraction for listings so the service layer can be exercised
/// against any backing collection.
pub trait ListingRepository: Send + Sync {
    fn insert(&self, property: Property) -> Result<Property, RepositoryError>;
    fn update(&self, property: Property) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError>;
    fn delete(&self, id: &PropertyId) -> Result<bool, RepositoryError>;
    fn all(&self) -> Result<Vec<Property>, RepositoryError>;
}

/// Storage abstraction for the agent directory.
pub trait AgentRepository: Send + Sync {
    fn insert(&self, agent: Agent) -> Result<Agent, RepositoryError>;
    fn fetch(&self, id: &AgentId) -> Result<Option<Agent>, RepositoryError>;
    fn all(&self) -> Result<Vec<Agent>, RepositoryError>;
}

/// Storage abstraction for contact requests collected from the public form.
pub trait ContactRepository: Send + Sync {
    fn insert(&self, contact: ContactRequest) -> Result<ContactRequest, RepositoryError>;
    fn all(&self) -> Result<Vec<ContactRequest>, RepositoryError>;
}
