use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    Agent, AgentId, ContactId, ContactRequest, ContactSubmission, NewAgent, NewProperty, Property,
    PropertyId, PropertyStatus, PropertyUpdate, DEFAULT_CURRENCY,
};
use super::filter::PropertyFilter;
use super::repository::{
    AgentRepository, ContactRepository, ListingRepository, RepositoryError,
};

static LISTING_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static AGENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static CONTACT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_property_id() -> PropertyId {
    let id = LISTING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PropertyId(format!("prop-{id:06}"))
}

fn next_agent_id() -> AgentId {
    let id = AGENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AgentId(format!("agent-{id:06}"))
}

fn next_contact_id() -> ContactId {
    let id = CONTACT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ContactId(format!("contact-{id:06}"))
}

/// Service composing the catalog repositories behind one facade.
///
/// Repositories are injected once at construction and shared by reference;
/// the service holds no other state.
pub struct CatalogService<L, A, C> {
    listings: Arc<L>,
    agents: Arc<A>,
    contacts: Arc<C>,
}

impl<L, A, C> CatalogService<L, A, C>
where
    L: ListingRepository + 'static,
    A: AgentRepository + 'static,
    C: ContactRepository + 'static,
{
    pub fn new(listings: Arc<L>, agents: Arc<A>, contacts: Arc<C>) -> Self {
        Self {
            listings,
            agents,
            contacts,
        }
    }

    /// Search the catalog, newest listings first.
    pub fn search(&self, filter: &PropertyFilter) -> Result<Vec<Property>, CatalogError> {
        let mut matches: Vec<Property> = self
            .listings
            .all()?
            .into_iter()
            .filter(|property| filter.matches(property))
            .collect();
        matches.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matches)
    }

    /// Listings flagged for the landing page carousel.
    pub fn featured(&self) -> Result<Vec<Property>, CatalogError> {
        Ok(self
            .listings
            .all()?
            .into_iter()
            .filter(|property| property.featured)
            .collect())
    }

    pub fn property(&self, id: &PropertyId) -> Result<Property, CatalogError> {
        let property = self.listings.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(property)
    }

    /// Publish a new listing, filling defaults and timestamps.
    pub fn publish(&self, new: NewProperty) -> Result<Property, CatalogError> {
        let now = Utc::now();
        let property = Property {
            id: next_property_id(),
            title: new.title,
            description: new.description,
            price: new.price,
            currency: new.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            kind: new.kind,
            status: new.status.unwrap_or(PropertyStatus::Available),
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            area: new.area,
            neighborhood: new.neighborhood,
            city: new.city,
            province: new.province,
            address: new.address,
            features: new.features,
            images: new.images,
            agent_id: new.agent_id,
            featured: new.featured,
            created_at: now,
            updated_at: now,
        };
        let stored = self.listings.insert(property)?;
        Ok(stored)
    }

    /// Apply a partial revision to a listing and bump its `updated_at`.
    pub fn revise(
        &self,
        id: &PropertyId,
        update: PropertyUpdate,
    ) -> Result<Property, CatalogError> {
        let mut property = self.listings.fetch(id)?.ok_or(RepositoryError::NotFound)?;

        if let Some(title) = update.title {
            property.title = title;
        }
        if let Some(description) = update.description {
            property.description = description;
        }
        if let Some(price) = update.price {
            property.price = price;
        }
        if let Some(status) = update.status {
            property.status = status;
        }
        if let Some(featured) = update.featured {
            property.featured = featured;
        }
        if let Some(features) = update.features {
            property.features = features;
        }
        property.updated_at = Utc::now();

        self.listings.update(property.clone())?;
        Ok(property)
    }

    /// Remove a listing; returns whether anything was deleted.
    pub fn withdraw(&self, id: &PropertyId) -> Result<bool, CatalogError> {
        Ok(self.listings.delete(id)?)
    }

    pub fn agents(&self) -> Result<Vec<Agent>, CatalogError> {
        Ok(self.agents.all()?)
    }

    pub fn agent(&self, id: &AgentId) -> Result<Agent, CatalogError> {
        let agent = self.agents.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(agent)
    }

    pub fn register_agent(&self, new: NewAgent) -> Result<Agent, CatalogError> {
        let agent = Agent {
            id: next_agent_id(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            specialty: new.specialty,
            experience_years: new.experience_years,
            sales_count: new.sales_count,
            photo: new.photo,
            bio: new.bio,
            social: new.social,
            created_at: Utc::now(),
        };
        let stored = self.agents.insert(agent)?;
        Ok(stored)
    }

    /// Validate and store a contact request from the public form.
    pub fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactRequest, CatalogError> {
        validate_submission(&submission)?;

        let contact = ContactRequest {
            id: next_contact_id(),
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            interest: submission.interest,
            message: submission.message,
            property_id: submission.property_id,
            agent_id: submission.agent_id,
            created_at: Utc::now(),
        };
        let stored = self.contacts.insert(contact)?;
        Ok(stored)
    }

    pub fn contacts(&self) -> Result<Vec<ContactRequest>, CatalogError> {
        Ok(self.contacts.all()?)
    }
}

/// Reasons a contact submission is rejected before storage.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactRejection {
    #[error("contact name must not be empty")]
    MissingName,
    #[error("'{0}' is not a valid e-mail address")]
    InvalidEmail(String),
    #[error("contact message must not be empty")]
    EmptyMessage,
}

fn validate_submission(submission: &ContactSubmission) -> Result<(), ContactRejection> {
    if submission.name.trim().is_empty() {
        return Err(ContactRejection::MissingName);
    }

    let email = submission.email.trim();
    let well_formed = email
        .split_once('@')
        .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
        .unwrap_or(false);
    if !well_formed {
        return Err(ContactRejection::InvalidEmail(submission.email.clone()));
    }

    if submission.message.trim().is_empty() {
        return Err(ContactRejection::EmptyMessage);
    }

    Ok(())
}

/// Error raised by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    Contact(#[from] ContactRejection),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
