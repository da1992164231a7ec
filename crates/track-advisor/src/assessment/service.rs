use std::sync::Arc;

use tracing::{debug, info, warn};

use super::bank::{AssessmentInstance, QuestionBank};
use super::domain::{AssessmentSubmission, StudentId};
use super::evaluation::{RecommendationEngine, WeightMatrix};
use super::repository::{NewAssessmentResult, RecommendationView, RepositoryError, ResultStore};

/// Service composing the question bank, recommendation engine, and result store.
pub struct AssessmentService<R> {
    bank: Arc<QuestionBank>,
    store: Arc<R>,
    engine: RecommendationEngine,
    questions_per_domain: usize,
}

impl<R> AssessmentService<R>
where
    R: ResultStore + 'static,
{
    pub fn new(bank: Arc<QuestionBank>, store: Arc<R>, questions_per_domain: usize) -> Self {
        Self {
            bank,
            store,
            engine: RecommendationEngine::new(WeightMatrix::standard()),
            questions_per_domain,
        }
    }

    pub fn questions_per_domain(&self) -> usize {
        self.questions_per_domain
    }

    /// Build a fresh quiz; a seed makes the draw reproducible.
    pub fn sample(&self, seed: Option<u64>) -> AssessmentInstance {
        self.bank.sample_seeded(self.questions_per_domain, seed)
    }

    /// Score a submission, persist the result, and return the response view.
    pub fn submit(
        &self,
        student_id: &StudentId,
        submission: AssessmentSubmission,
    ) -> Result<RecommendationView, AssessmentServiceError> {
        if submission.answers.is_empty() {
            return Err(SubmissionError::EmptyAnswers.into());
        }

        let recommendation = self.engine.evaluate(&submission.answers, &self.bank);
        let sheet = &recommendation.sheet;
        if !sheet.unknown_question_ids.is_empty() {
            debug!(
                student = %student_id.0,
                ignored = ?sheet.unknown_question_ids,
                "ignoring answers for questions missing from the bank"
            );
        }
        if !sheet.duplicate_question_ids.is_empty() {
            debug!(
                student = %student_id.0,
                ignored = ?sheet.duplicate_question_ids,
                "ignoring repeated answers for the same question"
            );
        }

        let primary = recommendation.ranking.primary();
        let secondary = recommendation.ranking.secondary();
        let draft = NewAssessmentResult {
            student_id: student_id.clone(),
            domain_scores: sheet.domain_scores,
            track_scores: recommendation.track_scores,
            primary_track: primary.track,
            secondary_track: secondary.track,
            decision_path: recommendation.decision_path.clone(),
        };

        let stored = self.store.append(draft).map_err(|err| {
            warn!(student = %student_id.0, error = %err, "failed to persist assessment result");
            err
        })?;

        info!(
            student = %student_id.0,
            assessment = %stored.id.0,
            primary = primary.track.tag(),
            secondary = secondary.track.tag(),
            answered = submission.answers.len(),
            ignored = sheet.ignored(),
            "assessment scored"
        );

        Ok(stored.recommendation_view(&recommendation.ranking))
    }

    /// Latest stored result for the student, re-ranked from its stored track scores.
    pub fn latest(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<RecommendationView>, AssessmentServiceError> {
        let Some(result) = self.store.latest_for(student_id)? else {
            return Ok(None);
        };

        let ranking = self.engine.rerank(&result.track_scores);
        Ok(Some(result.recommendation_view(&ranking)))
    }
}

/// Submission rejected before scoring.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("answers are required")]
    EmptyAnswers,
    #[error("answers must be a list of {{questionId, selectedOptionId}} entries: {0}")]
    MalformedAnswers(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] SubmissionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
