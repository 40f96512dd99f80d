use crate::infra::{sample_questionnaire, InMemoryPolicyRepository};
use clap::Args;
use policy_ai::error::AppError;
use policy_ai::generation::{
    PolicyDocument, PolicyService, RawQuestionnaire, SectionKind,
};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct PolicyGenerateArgs {
    /// Sector answered on the questionnaire ("Finance" or "Public Sector")
    #[arg(long)]
    pub(crate) sector: String,
    /// Organization size band, e.g. "100-500"
    #[arg(long)]
    pub(crate) organization_size: String,
    /// Jurisdiction code, e.g. Federal or NSW
    #[arg(long)]
    pub(crate) jurisdiction: String,
    /// Regulator overseeing the organization (repeat for several)
    #[arg(long = "regulator")]
    pub(crate) regulators: Vec<String>,
    /// AI system in use (repeat for several)
    #[arg(long = "ai-system")]
    pub(crate) ai_systems: Vec<String>,
    /// Data type processed by AI systems (repeat for several)
    #[arg(long = "data-type")]
    pub(crate) data_types: Vec<String>,
    /// Whether high-risk AI systems are in scope (Yes or No)
    #[arg(long)]
    pub(crate) high_risk: Option<String>,
    /// Whether AI systems face customers directly (Yes or No)
    #[arg(long)]
    pub(crate) customer_facing: Option<String>,
    /// Maturity of any existing framework (Yes, No, or Partial)
    #[arg(long)]
    pub(crate) existing_framework: Option<String>,
    /// Declared risk appetite (Conservative, Moderate, or Progressive)
    #[arg(long)]
    pub(crate) risk_appetite: Option<String>,
    /// Role accountable for the policy
    #[arg(long)]
    pub(crate) owner: Option<String>,
    /// Implementation timeline label
    #[arg(long)]
    pub(crate) timeline: Option<String>,
    /// Print every section in full instead of the summary only
    #[arg(long)]
    pub(crate) full: bool,
}

impl PolicyGenerateArgs {
    fn into_questionnaire(self) -> (RawQuestionnaire, bool) {
        let PolicyGenerateArgs {
            sector,
            organization_size,
            jurisdiction,
            regulators,
            ai_systems,
            data_types,
            high_risk,
            customer_facing,
            existing_framework,
            risk_appetite,
            owner,
            timeline,
            full,
        } = self;

        let non_empty = |values: Vec<String>| if values.is_empty() { None } else { Some(values) };

        let raw = RawQuestionnaire {
            sector: Some(sector),
            organization_size: Some(organization_size),
            jurisdiction: Some(jurisdiction),
            regulated_by: non_empty(regulators),
            ai_systems: non_empty(ai_systems),
            data_types: non_empty(data_types),
            high_risk,
            customer_facing,
            existing_framework,
            risk_appetite,
            owner,
            timeline,
        };

        (raw, full)
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Run the demo with the public sector questionnaire instead of Finance
    #[arg(long)]
    pub(crate) public_sector: bool,
    /// Print every section in full instead of the summary only
    #[arg(long)]
    pub(crate) full: bool,
}

pub(crate) fn run_policy_generate(args: PolicyGenerateArgs) -> Result<(), AppError> {
    let (raw, full) = args.into_questionnaire();

    let repository = Arc::new(InMemoryPolicyRepository::default());
    let service = PolicyService::new(repository);

    let document = service.generate(raw).map_err(AppError::from)?;
    render_policy(&document, full);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let raw = if args.public_sector {
        let mut raw = sample_questionnaire();
        raw.sector = Some("Public Sector".to_string());
        raw.regulated_by = Some(vec!["OAIC".to_string()]);
        raw
    } else {
        sample_questionnaire()
    };

    let repository = Arc::new(InMemoryPolicyRepository::default());
    let service = PolicyService::new(repository);

    println!("Policy generation demo");
    let document = service.generate(raw).map_err(AppError::from)?;
    render_policy(&document, args.full);

    let fetched = service.get(&document.id).map_err(AppError::from)?;
    println!(
        "\nStore round-trip: fetched {} ({} words)",
        fetched.id.0, fetched.word_count
    );

    service.delete(&document.id).map_err(AppError::from)?;
    println!("Store round-trip: deleted {}", document.id.0);

    Ok(())
}

fn render_policy(document: &PolicyDocument, full: bool) {
    let summary = document.summary();

    println!("\nPolicy {}", document.id.0);
    println!("  created:    {}", document.created_at.to_rfc3339());
    println!("  word count: {}", summary.word_count);
    println!("  references: {}", summary.reference_count);
    println!("  sections:   {}", summary.sections.join(", "));

    println!("\nRegulatory mapping:");
    for reference in &document.regulatory_mapping {
        println!(
            "  - {} ({}): {}",
            reference.regulation, reference.clause, reference.requirement
        );
    }

    if full {
        for kind in SectionKind::ordered() {
            if let Some(text) = document.section_text(kind) {
                println!("\n{}\n{}", "=".repeat(72), text);
            }
        }
    }
}
