use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for assembled policy documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyId(pub String);

/// Industry sector the questionnaire was answered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    Finance,
    #[serde(rename = "Public Sector")]
    PublicSector,
}

impl Sector {
    pub const fn ordered() -> [Self; 2] {
        [Self::Finance, Self::PublicSector]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Finance => "Finance",
            Self::PublicSector => "Public Sector",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|sector| sector.label() == value)
    }
}

/// Australian jurisdiction the organization primarily operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jurisdiction {
    Federal,
    #[serde(rename = "NSW")]
    Nsw,
    #[serde(rename = "VIC")]
    Vic,
    #[serde(rename = "QLD")]
    Qld,
    #[serde(rename = "SA")]
    Sa,
    #[serde(rename = "WA")]
    Wa,
    #[serde(rename = "TAS")]
    Tas,
    #[serde(rename = "NT")]
    Nt,
    #[serde(rename = "ACT")]
    Act,
}

impl Jurisdiction {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Federal,
            Self::Nsw,
            Self::Vic,
            Self::Qld,
            Self::Sa,
            Self::Wa,
            Self::Tas,
            Self::Nt,
            Self::Act,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Federal => "Federal",
            Self::Nsw => "NSW",
            Self::Vic => "VIC",
            Self::Qld => "QLD",
            Self::Sa => "SA",
            Self::Wa => "WA",
            Self::Tas => "TAS",
            Self::Nt => "NT",
            Self::Act => "ACT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|jurisdiction| jurisdiction.label() == value)
    }
}

/// Yes/No questionnaire answers kept as an enum so prose branching stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            _ => None,
        }
    }
}

/// Maturity of any governance framework already in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExistingFramework {
    Yes,
    No,
    Partial,
}

impl ExistingFramework {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Yes" => Some(Self::Yes),
            "No" => Some(Self::No),
            "Partial" => Some(Self::Partial),
            _ => None,
        }
    }
}

/// Declared appetite for AI-related risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskAppetite {
    Conservative,
    Moderate,
    Progressive,
}

impl RiskAppetite {
    pub const fn ordered() -> [Self; 3] {
        [Self::Conservative, Self::Moderate, Self::Progressive]
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|appetite| appetite.as_submitted() == value)
    }

    pub const fn as_submitted(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Progressive => "Progressive",
        }
    }

    /// Lower-case form used inside generated prose.
    pub const fn prose_label(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Progressive => "progressive",
        }
    }
}

/// Untyped questionnaire payload accepted at the request boundary.
///
/// Every field is optional here; the validator decides which absences are
/// errors and converts the survivors into [`QuestionnaireInput`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestionnaire {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulated_by: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_systems: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_risk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_facing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_appetite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

/// Validated questionnaire, the only input the composition pipeline accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireInput {
    pub sector: Sector,
    pub organization_size: String,
    pub jurisdiction: Jurisdiction,
    pub regulated_by: Vec<String>,
    pub ai_systems: Option<Vec<String>>,
    pub data_types: Option<Vec<String>>,
    pub high_risk: Option<YesNo>,
    pub customer_facing: Option<YesNo>,
    pub existing_framework: Option<ExistingFramework>,
    pub risk_appetite: Option<RiskAppetite>,
    pub owner: Option<String>,
    pub timeline: Option<String>,
}

/// Named policy sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    ExecutiveSummary,
    PurposeAndScope,
    GovernanceStructure,
    RiskFramework,
    DataGovernance,
    ComplianceMonitoring,
    IncidentResponse,
}

impl SectionKind {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::ExecutiveSummary,
            Self::PurposeAndScope,
            Self::GovernanceStructure,
            Self::RiskFramework,
            Self::DataGovernance,
            Self::ComplianceMonitoring,
            Self::IncidentResponse,
        ]
    }

    /// Sections every document must carry, each with an expansion target.
    pub const fn mandatory() -> [Self; 4] {
        [
            Self::ExecutiveSummary,
            Self::PurposeAndScope,
            Self::GovernanceStructure,
            Self::RiskFramework,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "Executive Summary",
            Self::PurposeAndScope => "Purpose and Scope",
            Self::GovernanceStructure => "Governance Structure",
            Self::RiskFramework => "Risk Management Framework",
            Self::DataGovernance => "Data Governance",
            Self::ComplianceMonitoring => "Compliance Monitoring",
            Self::IncidentResponse => "Incident Response",
        }
    }

    /// Field name of the section on the wire, used in structural error reports.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "executiveSummary",
            Self::PurposeAndScope => "purposeAndScope",
            Self::GovernanceStructure => "governanceStructure",
            Self::RiskFramework => "riskFramework",
            Self::DataGovernance => "dataGovernance",
            Self::ComplianceMonitoring => "complianceMonitoring",
            Self::IncidentResponse => "incidentResponse",
        }
    }

    /// Minimum word count the expander must reach for mandatory sections.
    pub const fn target_words(self) -> Option<usize> {
        match self {
            Self::ExecutiveSummary => Some(2000),
            Self::PurposeAndScope => Some(1500),
            Self::GovernanceStructure => Some(2000),
            Self::RiskFramework => Some(2500),
            Self::DataGovernance | Self::ComplianceMonitoring | Self::IncidentResponse => None,
        }
    }
}

/// One citation in the document's regulatory mapping.
///
/// Sourced entirely from the static per-sector table, never from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegulatoryReference {
    pub regulation: String,
    pub clause: String,
    pub requirement: String,
}

/// Fully assembled, immutable policy document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    pub id: PolicyId,
    pub executive_summary: String,
    pub purpose_and_scope: String,
    pub governance_structure: String,
    pub risk_framework: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_governance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_monitoring: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_response: Option<String>,
    pub regulatory_mapping: Vec<RegulatoryReference>,
    pub word_count: usize,
    pub created_at: DateTime<Utc>,
}

impl PolicyDocument {
    pub fn section_text(&self, kind: SectionKind) -> Option<&str> {
        match kind {
            SectionKind::ExecutiveSummary => Some(self.executive_summary.as_str()),
            SectionKind::PurposeAndScope => Some(self.purpose_and_scope.as_str()),
            SectionKind::GovernanceStructure => Some(self.governance_structure.as_str()),
            SectionKind::RiskFramework => Some(self.risk_framework.as_str()),
            SectionKind::DataGovernance => self.data_governance.as_deref(),
            SectionKind::ComplianceMonitoring => self.compliance_monitoring.as_deref(),
            SectionKind::IncidentResponse => self.incident_response.as_deref(),
        }
    }

    /// Sections actually present, in document order.
    pub fn present_sections(&self) -> Vec<SectionKind> {
        SectionKind::ordered()
            .into_iter()
            .filter(|kind| self.section_text(*kind).is_some())
            .collect()
    }
}
