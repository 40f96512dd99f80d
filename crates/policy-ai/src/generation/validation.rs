use super::domain::{
    ExistingFramework, Jurisdiction, QuestionnaireInput, RawQuestionnaire, RiskAppetite, Sector,
    YesNo,
};

/// Field-level rejection of a questionnaire submission.
///
/// The field path uses the wire (camelCase) name so callers can surface it
/// directly to the form that produced the payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field}: required field is missing")]
    MissingField { field: &'static str },
    #[error("{field}: '{value}' is not a recognised value")]
    InvalidEnum { field: &'static str, value: String },
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ValidationError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ValidationError::MissingField { field }),
    }
}

fn enumerated<T>(
    value: &str,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    parse(value).ok_or_else(|| ValidationError::InvalidEnum {
        field,
        value: value.to_string(),
    })
}

fn optional_enumerated<T>(
    value: Option<&str>,
    field: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, ValidationError> {
    match value {
        Some(value) => enumerated(value, field, parse).map(Some),
        None => Ok(None),
    }
}

/// Check a raw submission against the questionnaire schema and produce the
/// typed input the composition pipeline requires.
///
/// Stops at the first violation; checks run in questionnaire page order.
pub fn validate_questionnaire(
    raw: RawQuestionnaire,
) -> Result<QuestionnaireInput, ValidationError> {
    let sector = enumerated(
        required(raw.sector.as_deref(), "sector")?,
        "sector",
        Sector::parse,
    )?;

    let organization_size = required(raw.organization_size.as_deref(), "organizationSize")?
        .trim()
        .to_string();

    let jurisdiction = enumerated(
        required(raw.jurisdiction.as_deref(), "jurisdiction")?,
        "jurisdiction",
        Jurisdiction::parse,
    )?;

    let regulated_by = match raw.regulated_by {
        Some(regulators) if !regulators.is_empty() => regulators,
        _ => {
            return Err(ValidationError::MissingField {
                field: "regulatedBy",
            })
        }
    };

    let high_risk = optional_enumerated(raw.high_risk.as_deref(), "highRisk", YesNo::parse)?;
    let customer_facing =
        optional_enumerated(raw.customer_facing.as_deref(), "customerFacing", YesNo::parse)?;
    let existing_framework = optional_enumerated(
        raw.existing_framework.as_deref(),
        "existingFramework",
        ExistingFramework::parse,
    )?;
    let risk_appetite = optional_enumerated(
        raw.risk_appetite.as_deref(),
        "riskAppetite",
        RiskAppetite::parse,
    )?;

    Ok(QuestionnaireInput {
        sector,
        organization_size,
        jurisdiction,
        regulated_by,
        ai_systems: raw.ai_systems,
        data_types: raw.data_types,
        high_risk,
        customer_facing,
        existing_framework,
        risk_appetite,
        owner: raw.owner,
        timeline: raw.timeline,
    })
}
