use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{PolicyDocument, PolicyId};

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Documents are write-once under their identifier; the engine never reads
/// storage mid-generation.
pub trait PolicyRepository: Send + Sync {
    fn insert(&self, document: PolicyDocument) -> Result<PolicyDocument, RepositoryError>;
    fn fetch(&self, id: &PolicyId) -> Result<Option<PolicyDocument>, RepositoryError>;
    fn delete(&self, id: &PolicyId) -> Result<bool, RepositoryError>;
    fn list(&self) -> Result<Vec<PolicyDocument>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("policy already exists")]
    Conflict,
    #[error("policy not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Compact representation of a stored policy for listings and previews.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummaryView {
    pub policy_id: PolicyId,
    pub word_count: usize,
    pub reference_count: usize,
    pub sections: Vec<&'static str>,
    pub created_at: DateTime<Utc>,
}

impl PolicyDocument {
    pub fn summary(&self) -> PolicySummaryView {
        PolicySummaryView {
            policy_id: self.id.clone(),
            word_count: self.word_count,
            reference_count: self.regulatory_mapping.len(),
            sections: self
                .present_sections()
                .into_iter()
                .map(|kind| kind.label())
                .collect(),
            created_at: self.created_at,
        }
    }
}
