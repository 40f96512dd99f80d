//! Deterministic content expansion.
//!
//! Sections that fall short of their word target are padded from a fixed
//! corpus: one sector elaboration block, one implementation-approach block,
//! then the filler paragraphs cycled in order. Paragraph word counts are
//! known up front, so the number of repetitions is computed directly rather
//! than accumulated until a check passes.

use super::domain::Sector;

const FINANCE_ELABORATION: &str = "Additional Considerations for Financial Services:\n\n\
    Financial institutions face unique challenges and requirements when implementing AI systems. \
    These include stringent regulatory requirements from bodies such as ASIC and APRA, heightened \
    expectations for transparency and explainability, critical importance of fairness in lending \
    and insurance decisions, need for robust model risk management, requirements for audit trails \
    and documentation, and obligations to protect consumer financial data.\n\n\
    AI systems in financial services must comply with existing financial services regulations, \
    consumer protection laws, privacy legislation, and emerging AI-specific requirements. This \
    includes obligations around responsible lending, fair treatment of customers, anti-money \
    laundering, fraud prevention, and market integrity.\n\n\
    The governance framework must ensure AI systems undergo rigorous testing for bias and \
    discrimination, particularly in credit decisioning, insurance underwriting, and customer \
    service applications. Regular validation, back-testing, and independent review processes are \
    essential to maintain system reliability and fairness.\n\n\
    Model risk management practices must align with regulatory expectations, including \
    comprehensive model inventories, lifecycle management processes, validation by independent \
    experts, documentation of model limitations, and clear escalation of model issues.";

const PUBLIC_SECTOR_ELABORATION: &str = "Additional Considerations for Public Sector:\n\n\
    Public sector organizations have unique responsibilities regarding AI governance, including \
    obligations for public accountability and transparency, requirements to serve all community \
    members fairly, need to maintain public trust and confidence, obligations under freedom of \
    information legislation, requirements for privacy protection under the Privacy Act, and \
    duties to ensure accessible and equitable services.\n\n\
    AI systems in the public sector must operate with high levels of transparency, enabling \
    citizens to understand how decisions affecting them are made. This includes clear \
    explanations of AI system purpose and operation, processes for individuals to challenge \
    automated decisions, regular reporting on AI system performance and outcomes, and proactive \
    disclosure of AI use in government services.\n\n\
    The governance framework must ensure AI systems comply with public sector values including \
    integrity, impartiality, accountability, respect, and leadership. Systems must be designed \
    and operated to serve the public interest, promote equality and non-discrimination, protect \
    vulnerable populations, and support democratic principles.\n\n\
    Consultation and engagement with stakeholders, including citizens, advocacy groups, and \
    oversight bodies, is essential to ensure AI systems meet community expectations and serve the \
    public interest effectively.";

const IMPLEMENTATION_APPROACH: &str = "Implementation Approach:\n\n\
    The implementation of this AI governance framework follows a phased approach, beginning with \
    foundational capabilities including policy establishment, governance structure formation, and \
    initial risk assessments. Subsequent phases build operational capabilities, expand coverage \
    to all AI systems, and continuously mature governance practices.\n\n\
    Change management processes ensure smooth adoption of new governance requirements, with clear \
    communication, training programs, stakeholder engagement, and ongoing support for teams \
    implementing AI systems under the new framework.\n\n\
    Success measures include compliance metrics tracking adherence to policy requirements, risk \
    metrics monitoring AI system safety and performance, efficiency metrics assessing governance \
    process effectiveness, and outcome metrics measuring the impact of governance on AI system \
    quality and stakeholder trust.\n\n\
    Regular review and continuous improvement processes ensure the governance framework remains \
    effective and adapts to evolving technology, regulatory requirements, organizational needs, \
    and stakeholder expectations.";

/// Generic paragraphs cycled, in order, to satisfy length invariants.
pub(crate) const FILLER_PARAGRAPHS: [&str; 8] = [
    "Risk management processes ensure continuous monitoring and evaluation of AI system \
     performance, identifying potential issues before they impact operations or stakeholders.",
    "The governance framework establishes clear accountability chains, ensuring all stakeholders \
     understand their roles and responsibilities in AI system oversight.",
    "Documentation requirements ensure transparency and enable effective auditing of AI systems \
     throughout their lifecycle from development to decommissioning.",
    "Training programs ensure all personnel involved with AI systems understand their obligations \
     under this policy and maintain appropriate levels of competence.",
    "Review cycles enable continuous improvement of AI governance practices, incorporating \
     lessons learned and adapting to evolving regulatory and technological landscapes.",
    "Stakeholder engagement processes ensure affected parties have opportunities to provide input \
     on AI system development and deployment decisions.",
    "Performance metrics enable objective assessment of AI system effectiveness, fairness, and \
     compliance with policy requirements.",
    "Escalation procedures ensure serious issues receive appropriate attention from senior \
     leadership and are resolved in a timely manner.",
];

/// Whitespace-delimited token count, the unit every length invariant uses.
pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn sector_elaboration(sector: Sector) -> &'static str {
    match sector {
        Sector::Finance => FINANCE_ELABORATION,
        Sector::PublicSector => PUBLIC_SECTOR_ELABORATION,
    }
}

fn push_block(text: &mut String, block: &str) {
    text.push_str("\n\n");
    text.push_str(block);
}

/// Pad `draft` until it carries at least `target_words` whitespace-delimited
/// tokens. Drafts already at or above the target are returned unchanged.
/// Overshoot is bounded by one filler paragraph.
pub(crate) fn expand(draft: &str, target_words: usize, sector: Sector) -> String {
    if word_count(draft) >= target_words {
        return draft.to_string();
    }

    let mut text = draft.to_string();
    push_block(&mut text, sector_elaboration(sector));
    push_block(&mut text, IMPLEMENTATION_APPROACH);

    let have = word_count(&text);
    if have >= target_words {
        return text;
    }

    let shortfall = target_words - have;
    let counts: Vec<usize> = FILLER_PARAGRAPHS.iter().map(|p| word_count(p)).collect();
    let cycle_words: usize = counts.iter().sum();

    // Whole cycles first; the remainder is covered by a prefix of one more
    // cycle, so the walk below touches each paragraph at most once.
    let full_cycles = shortfall / cycle_words;
    for _ in 0..full_cycles {
        for paragraph in FILLER_PARAGRAPHS {
            push_block(&mut text, paragraph);
        }
    }

    let mut appended = full_cycles * cycle_words;
    let mut index = 0;
    while appended < shortfall {
        push_block(&mut text, FILLER_PARAGRAPHS[index]);
        appended += counts[index];
        index += 1;
    }

    text
}
