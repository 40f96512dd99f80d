use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use super::audit::{audit_document, PolicyInvariantViolation};
use super::composer;
use super::domain::{PolicyDocument, PolicyId, QuestionnaireInput, SectionKind};
use super::expander::{expand, word_count};
use super::references::references_for;

static POLICY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_policy_id() -> PolicyId {
    let id = POLICY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    PolicyId(format!("pol-{id:06}"))
}

/// Stateless engine turning a validated questionnaire into a policy document.
///
/// Assembly is all-or-nothing: the result has already passed the structural
/// audit, and no partial document is ever returned.
#[derive(Debug, Default)]
pub struct PolicyAssembler;

impl PolicyAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble(
        &self,
        input: &QuestionnaireInput,
    ) -> Result<PolicyDocument, PolicyInvariantViolation> {
        let mandatory = SectionKind::mandatory().map(|kind| {
            let draft = composer::compose(kind, input);
            // mandatory() guarantees a target
            let target = kind.target_words().unwrap_or_default();
            expand(&draft, target, input.sector)
        });
        let [executive_summary, purpose_and_scope, governance_structure, risk_framework] =
            mandatory;

        let data_governance = input
            .data_types
            .as_deref()
            .filter(|types| !types.is_empty())
            .map(|_| composer::compose(SectionKind::DataGovernance, input));
        let compliance_monitoring = input
            .existing_framework
            .map(|_| composer::compose(SectionKind::ComplianceMonitoring, input));
        let incident_response = input
            .customer_facing
            .map(|_| composer::compose(SectionKind::IncidentResponse, input));

        let word_total = [
            Some(executive_summary.as_str()),
            Some(purpose_and_scope.as_str()),
            Some(governance_structure.as_str()),
            Some(risk_framework.as_str()),
            data_governance.as_deref(),
            compliance_monitoring.as_deref(),
            incident_response.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(word_count)
        .sum();

        let document = PolicyDocument {
            id: next_policy_id(),
            executive_summary,
            purpose_and_scope,
            governance_structure,
            risk_framework,
            data_governance,
            compliance_monitoring,
            incident_response,
            regulatory_mapping: references_for(input.sector),
            word_count: word_total,
            created_at: Utc::now(),
        };

        audit_document(&document)?;
        Ok(document)
    }
}
