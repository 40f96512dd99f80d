use std::sync::Arc;

use tracing::info;

use super::assembler::PolicyAssembler;
use super::audit::PolicyInvariantViolation;
use super::domain::{PolicyDocument, PolicyId, RawQuestionnaire};
use super::repository::{PolicyRepository, PolicySummaryView, RepositoryError};
use super::validation::{validate_questionnaire, ValidationError};

/// Facade composing the validator, assembler, and storage collaborator.
pub struct PolicyService<R> {
    assembler: PolicyAssembler,
    repository: Arc<R>,
}

impl<R> PolicyService<R>
where
    R: PolicyRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            assembler: PolicyAssembler::new(),
            repository,
        }
    }

    /// Validate a raw submission, assemble the policy, and persist it.
    pub fn generate(&self, raw: RawQuestionnaire) -> Result<PolicyDocument, PolicyServiceError> {
        let input = validate_questionnaire(raw)?;
        let document = self.assembler.assemble(&input)?;
        let stored = self.repository.insert(document)?;
        info!(
            policy_id = %stored.id.0,
            sector = input.sector.label(),
            words = stored.word_count,
            "policy assembled"
        );
        Ok(stored)
    }

    /// Validate and assemble without persisting, returning the summary only.
    pub fn preview(&self, raw: RawQuestionnaire) -> Result<PolicySummaryView, PolicyServiceError> {
        let input = validate_questionnaire(raw)?;
        let document = self.assembler.assemble(&input)?;
        Ok(document.summary())
    }

    pub fn get(&self, id: &PolicyId) -> Result<PolicyDocument, PolicyServiceError> {
        let document = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(document)
    }

    pub fn delete(&self, id: &PolicyId) -> Result<(), PolicyServiceError> {
        if self.repository.delete(id)? {
            Ok(())
        } else {
            Err(RepositoryError::NotFound.into())
        }
    }

    /// Stored policy summaries, oldest first.
    pub fn list(&self) -> Result<Vec<PolicySummaryView>, PolicyServiceError> {
        let mut documents = self.repository.list()?;
        documents.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.0.cmp(&b.id.0)));
        Ok(documents.iter().map(PolicyDocument::summary).collect())
    }
}

/// Error raised by the policy service.
#[derive(Debug, thiserror::Error)]
pub enum PolicyServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Invariant(#[from] PolicyInvariantViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
