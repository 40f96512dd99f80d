//! Pure section composition.
//!
//! Each section is a fixed prose skeleton interpolated with questionnaire
//! answers. Identical input yields byte-identical text; nothing here reads
//! the clock or any other ambient state.

mod phrasing;

use super::domain::{QuestionnaireInput, SectionKind};

/// Compose the draft text for one section. Drafts for mandatory sections are
/// handed to the expander afterwards; extended sections ship as composed.
pub(crate) fn compose(kind: SectionKind, input: &QuestionnaireInput) -> String {
    match kind {
        SectionKind::ExecutiveSummary => executive_summary(input),
        SectionKind::PurposeAndScope => purpose_and_scope(),
        SectionKind::GovernanceStructure => governance_structure(input),
        SectionKind::RiskFramework => risk_framework(input),
        SectionKind::DataGovernance => data_governance(input),
        SectionKind::ComplianceMonitoring => compliance_monitoring(input),
        SectionKind::IncidentResponse => incident_response(input),
    }
}

fn executive_summary(input: &QuestionnaireInput) -> String {
    let regulators = input.regulated_by.join(", ");
    let ai_systems = phrasing::join_tags(input.ai_systems.as_deref(), "general AI applications");

    [
        "Executive Summary".to_string(),
        format!(
            "This AI Governance Policy establishes a comprehensive framework for the responsible \
             development, deployment, and management of artificial intelligence systems within our \
             {} organization operating in {}.",
            input.sector.label(),
            input.jurisdiction.label()
        ),
        format!(
            "As a {} organization, we recognize the transformative potential of AI technologies \
             while acknowledging the critical importance of implementing robust governance \
             mechanisms to ensure ethical, transparent, and compliant AI operations. The policy \
             ensures compliance with all relevant Australian regulatory requirements including \
             {regulators}, and applies to all AI systems deployed within the organization, \
             including {ai_systems}.",
            input.organization_size
        ),
        "This policy addresses key aspects of AI governance including risk management, data \
         protection, algorithmic accountability, human oversight, and regulatory compliance. It \
         provides clear guidelines for decision-making, establishes governance structures, and \
         outlines processes for continuous monitoring and improvement."
            .to_string(),
        "Key objectives of this policy include ensuring AI systems operate in alignment with \
         organizational values, maintaining public trust, meeting regulatory obligations, \
         protecting stakeholder interests, and fostering innovation within appropriate risk \
         boundaries."
            .to_string(),
        "The policy framework encompasses governance structures with clearly defined roles and \
         responsibilities, risk assessment and management processes, data governance and privacy \
         protection measures, model development and validation procedures, deployment and \
         monitoring protocols, incident response mechanisms, and regular audit and review \
         processes."
            .to_string(),
    ]
    .join("\n\n")
}

fn purpose_and_scope() -> String {
    [
        "Purpose and Scope",
        "Purpose:\nThe primary purpose of this AI Governance Policy is to establish a structured, \
         comprehensive framework that governs all aspects of artificial intelligence systems \
         throughout their lifecycle, from conception and development through deployment, \
         operation, and eventual decommissioning.",
        "This policy serves multiple critical functions: it provides clear governance structures \
         and decision-making processes, establishes standards for ethical AI development and use, \
         ensures compliance with applicable laws and regulations, protects stakeholder rights and \
         interests, manages AI-related risks effectively, and promotes transparency and \
         accountability in AI operations.",
        "Scope:\nThis policy applies to all AI systems, machine learning models, and automated \
         decision-making tools developed, procured, deployed, or operated by the organization. It \
         covers both customer-facing and internal AI applications, regardless of whether they are \
         developed in-house, by third-party vendors, or through collaborative partnerships.",
        "The policy encompasses the full AI lifecycle including research and development, testing \
         and validation, deployment and integration, ongoing operation and monitoring, \
         maintenance and updates, and decommissioning procedures.",
        "All personnel involved in AI-related activities are bound by this policy, including data \
         scientists, machine learning engineers, product managers, business stakeholders, \
         compliance officers, risk managers, and executive leadership.",
    ]
    .join("\n\n")
}

fn governance_structure(input: &QuestionnaireInput) -> String {
    let structure = phrasing::size_band(&input.organization_size);
    let owner = phrasing::owner_label(input.owner.as_deref());
    let appetite = phrasing::appetite_label(input.risk_appetite);
    let review = phrasing::deployment_review(input.customer_facing);

    [
        "Governance Structure".to_string(),
        format!(
            "The AI governance framework establishes a {structure} with clearly defined roles, \
             responsibilities, and decision-making authority across all levels of the \
             organization."
        ),
        format!(
            "Executive Oversight:\nUltimate accountability for AI governance rests with the \
             Executive Leadership Team and Board of Directors, with primary day-to-day \
             accountability assigned to the {owner}. The AI Governance Committee, comprising \
             senior executives, provides strategic oversight and approves major AI initiatives \
             and policy changes."
        ),
        "Operational Management:\nThe AI Risk and Compliance function manages day-to-day \
         governance activities, conducts risk assessments, monitors AI systems, and ensures \
         policy compliance. This team works closely with IT, Legal, Compliance, and business \
         units."
            .to_string(),
        format!(
            "Risk Appetite:\nThe organization maintains a {appetite} approach to AI risk, \
             carefully weighing innovation opportunities against potential harms and regulatory \
             requirements."
        ),
        format!(
            "Decision-Making Framework:\nAll significant AI decisions follow a structured \
             approval process with clear escalation paths, documentation requirements, and review \
             procedures to ensure appropriate oversight and accountability. {review}"
        ),
    ]
    .join("\n\n")
}

fn risk_framework(input: &QuestionnaireInput) -> String {
    let posture = phrasing::risk_posture(input.high_risk);
    let appetite = phrasing::appetite_label(input.risk_appetite);
    let guidance = phrasing::appetite_guidance(input.risk_appetite);
    let timeline = phrasing::timeline_label(input.timeline.as_deref());

    [
        "Risk Management Framework".to_string(),
        format!(
            "This policy establishes a comprehensive risk management framework specifically \
             designed for {posture}. The framework identifies, assesses, mitigates, and monitors \
             AI-related risks throughout the system lifecycle."
        ),
        "Risk Categories:\nAI systems may present various risk categories including ethical risks \
         related to fairness, bias, and discrimination; operational risks affecting business \
         continuity and performance; compliance and legal risks from regulatory violations; \
         reputational risks impacting stakeholder trust; security and privacy risks to data and \
         systems; and technical risks from model failures or errors."
            .to_string(),
        "Risk Assessment Process:\nAll AI systems undergo rigorous risk assessment before \
         deployment and during regular reviews. The assessment evaluates potential impact on \
         individuals and society, likelihood and severity of adverse outcomes, existing controls \
         and mitigation measures, residual risk after controls, and overall risk rating."
            .to_string(),
        format!("Risk Appetite:\nOur {appetite} risk appetite guides decision-making. {guidance}"),
        "Risk Mitigation:\nMitigation strategies include technical controls such as bias testing \
         and model validation, procedural controls including approval workflows and \
         documentation, human oversight mechanisms, monitoring and alerting systems, incident \
         response procedures, and regular audits and reviews."
            .to_string(),
        format!(
            "Continuous Monitoring:\nDeployed AI systems are subject to continuous monitoring to \
             detect performance degradation, bias drift, unexpected outcomes, security incidents, \
             and compliance violations, with automated alerts and escalation procedures. Findings \
             feed the annual policy review aligned with the {timeline} implementation timeline."
        ),
    ]
    .join("\n\n")
}

fn data_governance(input: &QuestionnaireInput) -> String {
    let data_types = phrasing::join_tags(input.data_types.as_deref(), "organizational data");

    [
        "Data Governance".to_string(),
        format!(
            "Data governance ensures the quality, security, and ethical use of data in AI \
             systems. Data types covered by this policy include {data_types}."
        ),
        "Key Principles:\nData quality controls ensure accuracy, completeness, and timeliness. \
         Data security measures protect against unauthorized access and breaches. Data privacy \
         practices comply with the Privacy Act 1988 and the Australian Privacy Principles. Data \
         ethics standards require that data is used responsibly and transparently."
            .to_string(),
        "Requirements:\nData classification and handling procedures, data retention and disposal \
         policies, third-party data sharing agreements, and regular data quality audits apply to \
         every dataset feeding an AI system."
            .to_string(),
    ]
    .join("\n\n")
}

fn compliance_monitoring(input: &QuestionnaireInput) -> String {
    let baseline = phrasing::monitoring_baseline(input.existing_framework);
    let regulators = input.regulated_by.join(", ");

    [
        "Compliance Monitoring".to_string(),
        format!(
            "Ongoing compliance monitoring ensures adherence to policy requirements and \
             regulatory obligations. {baseline}"
        ),
        "Monitoring Activities:\nReal-time system monitoring, periodic compliance reviews, \
         internal audits, and external regulatory examinations operate on a defined calendar."
            .to_string(),
        "Reporting Requirements:\nMonthly operational reports, quarterly compliance status \
         updates, an annual governance review, and ad-hoc incident reporting keep leadership \
         informed."
            .to_string(),
        format!(
            "Regulatory Engagement:\nThe organization maintains proactive engagement and timely \
             reporting with {regulators}."
        ),
    ]
    .join("\n\n")
}

fn incident_response(input: &QuestionnaireInput) -> String {
    let subject = phrasing::critical_incident_subject(input.customer_facing);
    let regulators = input.regulated_by.join(", ");

    [
        "Incident Response".to_string(),
        "Incident response procedures ensure rapid detection, escalation, and resolution of \
         AI-related incidents."
            .to_string(),
        format!(
            "Incident Categories:\nCritical incidents are system failures affecting {subject}; \
             high-severity incidents are regulatory compliance breaches; medium-severity \
             incidents cover performance degradation; low-severity incidents are minor issues \
             with no immediate impact."
        ),
        "Response Procedures:\nDetection and initial assessment, escalation to appropriate \
         stakeholders, containment and mitigation, root cause analysis, remediation and \
         prevention, and documentation of lessons learned follow in order for every incident."
            .to_string(),
        format!(
            "Communication:\nInternal stakeholders are notified within 4 hours for critical \
             incidents. Regulatory notification follows {regulators} requirements, and customers \
             are notified for service-affecting incidents."
        ),
    ]
    .join("\n\n")
}
