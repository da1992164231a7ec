use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    AssessmentId, DomainScores, StudentId, Track, TrackRecommendation, TrackScores,
};
use super::evaluation::TrackRanking;

/// Result ready to be appended; the store assigns id, timestamp, and sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAssessmentResult {
    pub student_id: StudentId,
    pub domain_scores: DomainScores,
    pub track_scores: TrackScores,
    pub primary_track: Track,
    pub secondary_track: Track,
    pub decision_path: Vec<String>,
}

/// Persisted, immutable record of one scored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub id: AssessmentId,
    pub student_id: StudentId,
    pub domain_scores: DomainScores,
    pub track_scores: TrackScores,
    pub primary_track: Track,
    pub secondary_track: Track,
    pub decision_path: Vec<String>,
    pub created_at: DateTime<Utc>,
    /// Store-assigned insertion order; defines which record is the latest.
    pub sequence: u64,
}

impl AssessmentResult {
    pub fn from_draft(
        draft: NewAssessmentResult,
        id: AssessmentId,
        created_at: DateTime<Utc>,
        sequence: u64,
    ) -> Self {
        Self {
            id,
            student_id: draft.student_id,
            domain_scores: draft.domain_scores,
            track_scores: draft.track_scores,
            primary_track: draft.primary_track,
            secondary_track: draft.secondary_track,
            decision_path: draft.decision_path,
            created_at,
            sequence,
        }
    }

    /// Response view using the supplied ranking instead of the stored primary/secondary.
    pub fn recommendation_view(&self, ranking: &TrackRanking) -> RecommendationView {
        RecommendationView {
            primary_track: ranking.primary(),
            secondary_track: ranking.secondary(),
            all_scores: self.track_scores,
            domain_scores: self.domain_scores,
            decision_path: self.decision_path.clone(),
            assessment_id: self.id.0.clone(),
        }
    }
}

/// Append-only storage for assessment results.
pub trait ResultStore: Send + Sync {
    fn append(&self, draft: NewAssessmentResult) -> Result<AssessmentResult, RepositoryError>;
    fn latest_for(&self, student_id: &StudentId)
        -> Result<Option<AssessmentResult>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("result store unavailable: {0}")]
    Unavailable(String),
}

/// Response body shared by the submit and latest-result endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationView {
    pub primary_track: TrackRecommendation,
    pub secondary_track: TrackRecommendation,
    pub all_scores: TrackScores,
    pub domain_scores: DomainScores,
    pub decision_path: Vec<String>,
    pub assessment_id: String,
}
