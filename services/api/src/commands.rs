use crate::infra::load_question_bank;
use clap::Args;
use std::path::PathBuf;
use track_advisor::assessment::{
    AssessmentInstance, AssessmentServiceError, AssessmentSubmission, Recommendation,
    RecommendationEngine, SubmissionError, Track,
};
use track_advisor::config::AppConfig;
use track_advisor::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Seed for a reproducible draw. Omit for a fresh random quiz.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Questions drawn per domain (defaults to APP_QUESTIONS_PER_DOMAIN).
    #[arg(long)]
    pub(crate) per_domain: Option<usize>,
    /// Print the answer key alongside each question.
    #[arg(long)]
    pub(crate) with_answers: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file shaped like `{"answers": [{"questionId": 1, "selectedOptionId": "a"}]}`
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let bank = load_question_bank(&config.assessment)?;
    let per_domain = args
        .per_domain
        .unwrap_or(config.assessment.questions_per_domain);

    let instance = bank.sample_seeded(per_domain, args.seed);
    render_instance(&instance, per_domain, args.with_answers);
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let bank = load_question_bank(&config.assessment)?;

    let raw = std::fs::read_to_string(&args.answers)?;
    let submission = parse_submission(&raw)?;

    let recommendation = RecommendationEngine::default().evaluate(&submission.answers, &bank);
    render_recommendation(&recommendation, submission.answers.len());
    Ok(())
}

fn parse_submission(raw: &str) -> Result<AssessmentSubmission, AppError> {
    let submission: AssessmentSubmission = serde_json::from_str(raw)?;
    if submission.answers.is_empty() {
        return Err(AssessmentServiceError::from(SubmissionError::EmptyAnswers).into());
    }
    Ok(submission)
}

fn render_instance(instance: &AssessmentInstance, per_domain: usize, with_answers: bool) {
    println!("Aptitude quiz");
    println!(
        "  {} questions ({} per domain requested)",
        instance.len(),
        per_domain
    );

    for (position, question) in instance.questions().iter().enumerate() {
        println!(
            "\n{:>3}. [{}] #{} {}",
            position + 1,
            question.domain.label(),
            question.id,
            question.stem
        );
        for option in &question.options {
            let marker = if with_answers && question.correct_option == option.id {
                "*"
            } else {
                " "
            };
            println!("     {marker} {}) {}", option.id.as_str(), option.label);
        }
    }
}

fn render_recommendation(recommendation: &Recommendation, answered: usize) {
    let primary = recommendation.ranking.primary();
    let secondary = recommendation.ranking.secondary();
    let sheet = &recommendation.sheet;

    println!("Track recommendation");
    println!(
        "  Answers received: {} ({} ignored)",
        answered,
        sheet.ignored()
    );
    if !sheet.unknown_question_ids.is_empty() {
        println!("  Unknown question ids: {:?}", sheet.unknown_question_ids);
    }
    if !sheet.duplicate_question_ids.is_empty() {
        println!("  Repeated question ids: {:?}", sheet.duplicate_question_ids);
    }
    println!(
        "  Primary: {} ({}) | Secondary: {} ({})",
        primary.track.label(),
        primary.score,
        secondary.track.label(),
        secondary.score
    );

    println!("\nDomain scores");
    for (domain, score) in sheet.domain_scores.iter() {
        println!(
            "  {:<20} {:>3} / {}",
            domain.label(),
            score,
            sheet.attempted.get(domain)
        );
    }

    println!("\nTrack scores");
    for track in Track::ordered() {
        println!(
            "  {:<6} {:>4}",
            track.label(),
            recommendation.track_scores.get(track)
        );
    }

    println!("\nDecision path");
    for step in &recommendation.decision_path {
        println!("  - {step}");
    }
}
