use super::domain::{RegulatoryReference, Sector};

/// Regulation, clause, requirement.
type ReferenceRow = (&'static str, &'static str, &'static str);

const FINANCE_REFERENCES: [ReferenceRow; 5] = [
    (
        "ASIC Regulatory Guide 274",
        "RG 274.45",
        "Product design and distribution obligations",
    ),
    (
        "APRA Prudential Standard CPS 234",
        "CPS 234.15",
        "Information security management",
    ),
    (
        "Privacy Act 1988 (Cth)",
        "s 6",
        "Australian Privacy Principles",
    ),
    (
        "Corporations Act 2001 (Cth)",
        "s 912A",
        "General obligations of financial services licensees",
    ),
    (
        "Banking Act 1959 (Cth)",
        "s 11AF",
        "Prudential standards and requirements",
    ),
];

const PUBLIC_SECTOR_REFERENCES: [ReferenceRow; 5] = [
    (
        "Privacy Act 1988 (Cth)",
        "s 6",
        "Australian Privacy Principles",
    ),
    (
        "Freedom of Information Act 1982 (Cth)",
        "s 11",
        "Right of access to documents",
    ),
    (
        "OAIC Privacy Guidelines",
        "APP 1",
        "Open and transparent management of personal information",
    ),
    (
        "Public Governance Act 2013 (Cth)",
        "s 15",
        "Duty of care and diligence",
    ),
    (
        "Australian Government AI Ethics Framework",
        "Principle 1",
        "Human, social and environmental wellbeing",
    ),
];

/// Resolve the citation set for a sector.
///
/// The table is keyed by sector alone; jurisdiction and regulator answers do
/// not change which citations are returned. Adding a sector is a data change
/// to the rows above, not a logic change.
pub fn references_for(sector: Sector) -> Vec<RegulatoryReference> {
    let rows: &[ReferenceRow] = match sector {
        Sector::Finance => &FINANCE_REFERENCES,
        Sector::PublicSector => &PUBLIC_SECTOR_REFERENCES,
    };

    rows.iter()
        .map(|(regulation, clause, requirement)| RegulatoryReference {
            regulation: regulation.to_string(),
            clause: clause.to_string(),
            requirement: requirement.to_string(),
        })
        .collect()
}
