use metrics_exporter_prometheus::PrometheusHandle;
use policy_ai::generation::{
    PolicyDocument, PolicyId, PolicyRepository, RawQuestionnaire, RepositoryError,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local policy store. Owned by whoever builds the service rather
/// than living behind a global, so tests and demos get isolated instances.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPolicyRepository {
    documents: Arc<Mutex<HashMap<PolicyId, PolicyDocument>>>,
}

impl PolicyRepository for InMemoryPolicyRepository {
    fn insert(&self, document: PolicyDocument) -> Result<PolicyDocument, RepositoryError> {
        let mut guard = self.documents.lock().expect("repository mutex poisoned");
        if guard.contains_key(&document.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(document.id.clone(), document.clone());
        Ok(document)
    }

    fn fetch(&self, id: &PolicyId) -> Result<Option<PolicyDocument>, RepositoryError> {
        let guard = self.documents.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn delete(&self, id: &PolicyId) -> Result<bool, RepositoryError> {
        let mut guard = self.documents.lock().expect("repository mutex poisoned");
        Ok(guard.remove(id).is_some())
    }

    fn list(&self) -> Result<Vec<PolicyDocument>, RepositoryError> {
        let guard = self.documents.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

/// Canned Finance questionnaire used by the demo command.
pub(crate) fn sample_questionnaire() -> RawQuestionnaire {
    RawQuestionnaire {
        sector: Some("Finance".to_string()),
        organization_size: Some("100-500".to_string()),
        jurisdiction: Some("Federal".to_string()),
        regulated_by: Some(vec!["ASIC".to_string(), "APRA".to_string()]),
        ai_systems: Some(vec![
            "Chatbots".to_string(),
            "Predictive Analytics".to_string(),
        ]),
        data_types: Some(vec![
            "Personal Info".to_string(),
            "Financial Data".to_string(),
        ]),
        high_risk: Some("Yes".to_string()),
        customer_facing: Some("Yes".to_string()),
        existing_framework: Some("No".to_string()),
        risk_appetite: Some("Moderate".to_string()),
        owner: Some("Compliance".to_string()),
        timeline: Some("Normal (1-3 months)".to_string()),
    }
}
