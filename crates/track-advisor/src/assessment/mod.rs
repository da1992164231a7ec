//! Aptitude assessment: question bank, scoring, track recommendation, and result storage.

pub mod bank;
pub mod domain;
pub mod evaluation;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use bank::{
    AssessmentInstance, QuestionBank, QuestionBankError, QuestionBankImportError, QuestionView,
    DEFAULT_QUESTIONS_PER_DOMAIN,
};
pub use domain::{
    AssessmentId, AssessmentSubmission, Domain, DomainScores, OptionKey, Question,
    QuestionOption, StudentId, SubmittedAnswer, Track, TrackRecommendation, TrackScores,
};
pub use evaluation::{Recommendation, RecommendationEngine, TrackRanking, WeightMatrix};
pub use repository::{
    AssessmentResult, NewAssessmentResult, RecommendationView, RepositoryError, ResultStore,
};
pub use router::{assessment_router, StudentIdentity, STUDENT_ID_HEADER};
pub use service::{AssessmentService, AssessmentServiceError, SubmissionError};
