mod explanation;
mod ranking;
mod scoring;
mod weights;

pub use explanation::{explain, top_domains};
pub use ranking::{rank, TrackRanking};
pub use scoring::{score_answers, ScoreSheet};
pub use weights::WeightMatrix;

use super::bank::QuestionBank;
use super::domain::{SubmittedAnswer, TrackScores};

/// Stateless engine turning submitted answers into a ranked, explained recommendation.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    matrix: WeightMatrix,
}

impl RecommendationEngine {
    pub fn new(matrix: WeightMatrix) -> Self {
        Self { matrix }
    }

    pub fn evaluate(&self, answers: &[SubmittedAnswer], bank: &QuestionBank) -> Recommendation {
        let sheet = score_answers(answers, bank);
        let track_scores = self.matrix.aggregate(&sheet.domain_scores);
        let ranking = rank(&track_scores);
        let decision_path = explain(&sheet.domain_scores, &track_scores, &ranking.primary());

        Recommendation {
            sheet,
            track_scores,
            ranking,
            decision_path,
        }
    }

    /// Re-rank previously stored track scores.
    pub fn rerank(&self, track_scores: &TrackScores) -> TrackRanking {
        rank(track_scores)
    }
}

/// Output of a single evaluation, before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub sheet: ScoreSheet,
    pub track_scores: TrackScores,
    pub ranking: TrackRanking,
    pub decision_path: Vec<String>,
}
