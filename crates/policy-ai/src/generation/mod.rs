//! Questionnaire intake, policy composition, and storage contracts.
//!
//! The pipeline is deterministic end to end: a validated questionnaire is
//! composed into section drafts, each mandatory draft is expanded to its word
//! target from a fixed corpus, and the assembled document is audited against
//! the structural invariants before anything is persisted.

pub mod assembler;
pub mod audit;
pub(crate) mod composer;
pub mod domain;
pub(crate) mod expander;
pub mod references;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use assembler::PolicyAssembler;
pub use audit::{audit_document, PolicyInvariantViolation, MINIMUM_REFERENCES, MINIMUM_TOTAL_WORDS};
pub use domain::{
    ExistingFramework, Jurisdiction, PolicyDocument, PolicyId, QuestionnaireInput,
    RawQuestionnaire, RegulatoryReference, RiskAppetite, SectionKind, Sector, YesNo,
};
pub use references::references_for;
pub use repository::{PolicyRepository, PolicySummaryView, RepositoryError};
pub use router::policy_router;
pub use service::{PolicyService, PolicyServiceError};
pub use validation::{validate_questionnaire, ValidationError};
