use super::domain::{PolicyDocument, SectionKind};
use super::expander::word_count;

/// Document-level minimum, the sum of the mandatory section targets.
pub const MINIMUM_TOTAL_WORDS: usize = 8000;
/// Every sector's reference table must resolve at least this many citations.
pub const MINIMUM_REFERENCES: usize = 5;

/// Structural defect in an assembled document.
///
/// These indicate a composer, expander, or reference-table bug, not a user
/// input problem: no input that passes validation may trigger one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyInvariantViolation {
    #[error("policy too short: {words} words (minimum 8000 required)")]
    PolicyTooShort { words: usize },
    #[error("missing required section: {section}")]
    MissingSection { section: &'static str },
    #[error("insufficient regulatory references: {count} (minimum 5 required)")]
    InsufficientReferences { count: usize },
}

/// Verify the structural invariants that define a valid policy.
///
/// Checks run in a fixed order and stop at the first failure: total word
/// count, mandatory section presence, then reference count.
pub fn audit_document(document: &PolicyDocument) -> Result<(), PolicyInvariantViolation> {
    if document.word_count < MINIMUM_TOTAL_WORDS {
        return Err(PolicyInvariantViolation::PolicyTooShort {
            words: document.word_count,
        });
    }

    for kind in SectionKind::mandatory() {
        let empty = document
            .section_text(kind)
            .map(|text| text.trim().is_empty())
            .unwrap_or(true);
        if empty {
            return Err(PolicyInvariantViolation::MissingSection {
                section: kind.key(),
            });
        }
    }

    if document.regulatory_mapping.len() < MINIMUM_REFERENCES {
        return Err(PolicyInvariantViolation::InsufficientReferences {
            count: document.regulatory_mapping.len(),
        });
    }

    Ok(())
}

/// Total across every present section, the figure `audit_document` checks.
pub fn total_word_count(document: &PolicyDocument) -> usize {
    document
        .present_sections()
        .into_iter()
        .filter_map(|kind| document.section_text(kind))
        .map(word_count)
        .sum()
}
