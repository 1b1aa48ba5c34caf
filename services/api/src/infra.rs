use metrics_exporter_prometheus::PrometheusHandle;
use palanca::listings::{
    Agent, AgentId, AgentRepository, ContactRepository, ContactRequest, ListingRepository,
    Property, PropertyId, RepositoryError,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryListingRepository {
    records: Arc<Mutex<HashMap<PropertyId, Property>>>,
}

impl ListingRepository for InMemoryListingRepository {
    fn insert(&self, property: Property) -> Result<Property, RepositoryError> {
        let mut guard = self.records.lock().expect("listing mutex poisoned");
        if guard.contains_key(&property.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(property.id.clone(), property.clone());
        Ok(property)
    }

    fn update(&self, property: Property) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("listing mutex poisoned");
        if guard.contains_key(&property.id) {
            guard.insert(property.id.clone(), property);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &PropertyId) -> Result<Option<Property>, RepositoryError> {
        let guard = self.records.lock().expect("listing mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &PropertyId) -> Result<bool, RepositoryError> {
        let mut guard = self.records.lock().expect("listing mutex poisoned");
        Ok(guard.remove(id).is_some())
    }

    fn all(&self) -> Result<Vec<Property>, RepositoryError> {
        let guard = self.records.lock().expect("listing mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAgentRepository {
    records: Arc<Mutex<HashMap<AgentId, Agent>>>,
}

impl AgentRepository for InMemoryAgentRepository {
    fn insert(&self, agent: Agent) -> Result<Agent, RepositoryError> {
        let mut guard = self.records.lock().expect("agent mutex poisoned");
        if guard.contains_key(&agent.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(agent.id.clone(), agent.clone());
        Ok(agent)
    }

    fn fetch(&self, id: &AgentId) -> Result<Option<Agent>, RepositoryError> {
        let guard = self.records.lock().expect("agent mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn all(&self) -> Result<Vec<Agent>, RepositoryError> {
        let guard = self.records.lock().expect("agent mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryContactRepository {
    records: Arc<Mutex<Vec<ContactRequest>>>,
}

impl ContactRepository for InMemoryContactRepository {
    fn insert(&self, contact: ContactRequest) -> Result<ContactRequest, RepositoryError> {
        let mut guard = self.records.lock().expect("contact mutex poisoned");
        guard.push(contact.clone());
        Ok(contact)
    }

    fn all(&self) -> Result<Vec<ContactRequest>, RepositoryError> {
        let guard = self.records.lock().expect("contact mutex poisoned");
        Ok(guard.clone())
    }
}
