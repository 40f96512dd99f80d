use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::generation::domain::{PolicyDocument, PolicyId, RawQuestionnaire};
use crate::generation::repository::{PolicyRepository, RepositoryError};
use crate::generation::router::policy_router;
use crate::generation::service::PolicyService;

pub(super) fn finance_raw() -> RawQuestionnaire {
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

pub(super) fn public_sector_raw() -> RawQuestionnaire {
    RawQuestionnaire {
        sector: Some("Public Sector".to_string()),
        organization_size: Some("5000+".to_string()),
        jurisdiction: Some("NSW".to_string()),
        regulated_by: Some(vec!["OAIC".to_string()]),
        ai_systems: Some(vec!["Service Triage".to_string()]),
        data_types: None,
        high_risk: Some("No".to_string()),
        customer_facing: None,
        existing_framework: Some("Partial".to_string()),
        risk_appetite: Some("Conservative".to_string()),
        owner: None,
        timeline: None,
    }
}

/// Required fields only; every optional answer skipped.
pub(super) fn minimal_raw() -> RawQuestionnaire {
    RawQuestionnaire {
        sector: Some("Finance".to_string()),
        organization_size: Some("1-100".to_string()),
        jurisdiction: Some("VIC".to_string()),
        regulated_by: Some(vec!["ASIC".to_string()]),
        ..RawQuestionnaire::default()
    }
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    documents: Mutex<HashMap<PolicyId, PolicyDocument>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.documents.lock().expect("repository mutex poisoned").len()
    }
}

impl PolicyRepository for MemoryRepository {
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

/// Repository that reports a duplicate identifier for every insert.
pub(super) struct ConflictRepository;

impl PolicyRepository for ConflictRepository {
    fn insert(&self, _document: PolicyDocument) -> Result<PolicyDocument, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &PolicyId) -> Result<Option<PolicyDocument>, RepositoryError> {
        Ok(None)
    }

    fn delete(&self, _id: &PolicyId) -> Result<bool, RepositoryError> {
        Ok(false)
    }

    fn list(&self) -> Result<Vec<PolicyDocument>, RepositoryError> {
        Ok(Vec::new())
    }
}

/// Repository whose backing store is unreachable.
pub(super) struct UnavailableRepository;

impl UnavailableRepository {
    fn unavailable() -> RepositoryError {
        RepositoryError::Unavailable("store offline".to_string())
    }
}

impl PolicyRepository for UnavailableRepository {
    fn insert(&self, _document: PolicyDocument) -> Result<PolicyDocument, RepositoryError> {
        Err(Self::unavailable())
    }

    fn fetch(&self, _id: &PolicyId) -> Result<Option<PolicyDocument>, RepositoryError> {
        Err(Self::unavailable())
    }

    fn delete(&self, _id: &PolicyId) -> Result<bool, RepositoryError> {
        Err(Self::unavailable())
    }

    fn list(&self) -> Result<Vec<PolicyDocument>, RepositoryError> {
        Err(Self::unavailable())
    }
}

pub(super) fn build_service() -> (Arc<PolicyService<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(PolicyService::new(repository.clone()));
    (service, repository)
}

pub(super) fn build_router() -> (axum::Router, Arc<MemoryRepository>) {
    let (service, repository) = build_service();
    (policy_router(service), repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
