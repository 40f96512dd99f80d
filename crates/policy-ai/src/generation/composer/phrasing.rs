//! Conditional phrasing points used by the section skeletons.
//!
//! Each questionnaire-driven variation in the prose is an explicit match
//! here, with the absent case spelled out rather than buried in a template.

use super::super::domain::{ExistingFramework, RiskAppetite, YesNo};

/// Smaller organizations get the scaled-down governance phrasing.
pub(crate) fn size_band(organization_size: &str) -> &'static str {
    if organization_size.contains("1-100") || organization_size.contains("100-500") {
        "appropriate for our organization size"
    } else {
        "comprehensive multi-tiered approach"
    }
}

pub(crate) fn risk_posture(high_risk: Option<YesNo>) -> &'static str {
    match high_risk {
        Some(YesNo::Yes) => "high-risk AI systems requiring enhanced controls",
        Some(YesNo::No) | None => "AI systems with appropriate risk management",
    }
}

pub(crate) fn appetite_label(risk_appetite: Option<RiskAppetite>) -> &'static str {
    match risk_appetite {
        Some(appetite) => appetite.prose_label(),
        None => "moderate",
    }
}

pub(crate) fn appetite_guidance(risk_appetite: Option<RiskAppetite>) -> &'static str {
    match risk_appetite {
        Some(RiskAppetite::Conservative) => {
            "Safety and compliance take precedence over speed to market, with extensive testing \
             before deployment and significant human oversight of system behaviour."
        }
        Some(RiskAppetite::Progressive) => {
            "Calculated risks are accepted in pursuit of innovation, with rapid deployment backed \
             by robust monitoring and appropriate guardrails around automated decisions."
        }
        Some(RiskAppetite::Moderate) | None => {
            "Innovation is balanced with prudent risk management, standard testing and validation \
             processes, and human oversight of high-stakes decisions."
        }
    }
}

pub(crate) fn deployment_review(customer_facing: Option<YesNo>) -> &'static str {
    match customer_facing {
        Some(YesNo::Yes) => "Customer-facing AI systems require enhanced review before release.",
        Some(YesNo::No) | None => "Internal AI systems follow standard review processes.",
    }
}

pub(crate) fn critical_incident_subject(customer_facing: Option<YesNo>) -> &'static str {
    match customer_facing {
        Some(YesNo::Yes) => "customers",
        Some(YesNo::No) | None => "operations",
    }
}

pub(crate) fn monitoring_baseline(existing_framework: Option<ExistingFramework>) -> &'static str {
    match existing_framework {
        Some(ExistingFramework::Yes) => {
            "Monitoring builds on the established compliance program, extending existing review \
             cycles to cover AI-specific obligations."
        }
        Some(ExistingFramework::Partial) => {
            "Monitoring consolidates the partially implemented controls into a single program with \
             consistent coverage across all AI systems."
        }
        Some(ExistingFramework::No) | None => {
            "Monitoring capabilities are established for the first time under this policy, starting \
             from the baseline activities described below."
        }
    }
}

pub(crate) fn owner_label(owner: Option<&str>) -> &str {
    match owner {
        Some(owner) if !owner.trim().is_empty() => owner,
        _ => "Governance Owner",
    }
}

pub(crate) fn timeline_label(timeline: Option<&str>) -> &str {
    match timeline {
        Some(timeline) if !timeline.trim().is_empty() => timeline,
        _ => "normal",
    }
}

/// Join questionnaire tags for interpolation, falling back to the documented
/// default label when the answer was skipped or empty.
pub(crate) fn join_tags(tags: Option<&[String]>, default: &'static str) -> String {
    match tags {
        Some(tags) if !tags.is_empty() => tags.join(", "),
        _ => default.to_string(),
    }
}
