use crate::infra::InMemoryStateStore;
use clap::Args;
use pragmatic_ux::content::{MethodCatalog, PrincipleCatalog};
use pragmatic_ux::error::AppError;
use pragmatic_ux::helper::{DecisionCatalog, DecisionHelperService, SessionId};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Answer for the primary goal question
    #[arg(long, default_value = "conversion")]
    pub(crate) goal: String,
    /// Answer for the team setup question
    #[arg(long, default_value = "solo")]
    pub(crate) team: String,
    /// Answer for the time budget question
    #[arg(long, default_value = "days")]
    pub(crate) time: String,
    /// Answer for the UX maturity question
    #[arg(long, default_value = "starting")]
    pub(crate) maturity: String,
}

/// Walk the bundled questionnaire with the provided answers and print the
/// resulting recommendation, exercising the same service facade the HTTP
/// surface uses.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = Arc::new(DecisionCatalog::bundled()?);
    let principles = Arc::new(PrincipleCatalog::bundled()?);
    let methods = Arc::new(MethodCatalog::bundled()?);
    let service = DecisionHelperService::new(
        catalog.clone(),
        principles,
        methods,
        Arc::new(InMemoryStateStore::default()),
    );
    let session = SessionId("demo".to_string());

    let answers = [
        ("primary_goal", args.goal.as_str()),
        ("team_setup", args.team.as_str()),
        ("time_budget", args.time.as_str()),
        ("ux_maturity", args.maturity.as_str()),
    ];

    println!("Pragmatic UX decision helper demo");
    println!("{} ({})", catalog.meta().title, catalog.version());

    let mut view = service.state(&session);
    for (question_id, value) in answers {
        let label = catalog
            .question(question_id)
            .map(|question| question.label.as_str())
            .unwrap_or(question_id);
        let answer_label = catalog
            .option_label(question_id, value)
            .unwrap_or(value)
            .to_string();
        if catalog.option_label(question_id, value).is_none() {
            println!("\n{label}\n  -> {answer_label} (not a listed option; matches no rule)");
        } else {
            println!("\n{label}\n  -> {answer_label}");
        }
        view = service.answer(&session, question_id, value);
    }

    if !view.results_visible {
        println!("\nQuestionnaire incomplete; no recommendation produced.");
        return Ok(());
    }

    if let Some(situation) = &view.situation {
        println!("\nYour situation");
        for entry in situation {
            println!("  {}: {}", entry.question_label, entry.answer_label);
        }
    }

    let Some(recommendation) = &view.recommendation else {
        println!("\nNo rules matched this combination of answers.");
        return Ok(());
    };

    println!("\nRecommended principles");
    if recommendation.principles.is_empty() {
        println!("  (none matched)");
    }
    for principle in &recommendation.principles {
        println!("  {}. {}", principle.order, principle.title);
        println!("     {}", principle.summary);
    }

    println!("\nRecommended methods");
    if recommendation.methods.is_empty() {
        println!("  (none matched)");
    }
    for method in &recommendation.methods {
        println!("  {}", method.name);
        println!("    {}", method.details.description);
        for step in &method.details.steps {
            println!("    - {step}");
        }
        for tip in &method.details.tips {
            println!("    tip: {tip}");
        }
    }

    Ok(())
}
