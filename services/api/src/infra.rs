use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use track_advisor::assessment::{
    AssessmentId, AssessmentResult, NewAssessmentResult, QuestionBank, RepositoryError,
    ResultStore, StudentId,
};
use track_advisor::config::AssessmentConfig;
use track_advisor::error::AppError;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Append-only result store kept in process memory.
#[derive(Default, Clone)]
pub(crate) struct InMemoryResultStore {
    records: Arc<Mutex<Vec<AssessmentResult>>>,
}

impl ResultStore for InMemoryResultStore {
    fn append(&self, draft: NewAssessmentResult) -> Result<AssessmentResult, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store lock poisoned".to_string()))?;

        // sequence and timestamp are assigned under the lock so insertion order is total
        let sequence = guard.last().map_or(1, |record| record.sequence + 1);
        let now = Utc::now();
        let created_at = guard
            .last()
            .map_or(now, |record| record.created_at.max(now));

        let record = AssessmentResult::from_draft(
            draft,
            AssessmentId(format!("asm-{sequence:06}")),
            created_at,
            sequence,
        );
        guard.push(record.clone());
        Ok(record)
    }

    fn latest_for(
        &self,
        student_id: &StudentId,
    ) -> Result<Option<AssessmentResult>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store lock poisoned".to_string()))?;
        Ok(guard
            .iter()
            .filter(|record| &record.student_id == student_id)
            .max_by_key(|record| record.sequence)
            .cloned())
    }
}

impl InMemoryResultStore {
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.records.lock().expect("store mutex poisoned").len()
    }
}

/// Built-in bank unless a replacement CSV is configured.
pub(crate) fn load_question_bank(config: &AssessmentConfig) -> Result<QuestionBank, AppError> {
    match &config.question_bank_csv {
        Some(path) => {
            let bank = QuestionBank::from_path(path)?;
            info!(path = %path.display(), questions = bank.len(), "loaded question bank from CSV");
            Ok(bank)
        }
        None => Ok(QuestionBank::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use track_advisor::assessment::{DomainScores, Track, TrackScores};

    fn draft(student: &str) -> NewAssessmentResult {
        NewAssessmentResult {
            student_id: StudentId(student.to_string()),
            domain_scores: DomainScores::default(),
            track_scores: TrackScores::default(),
            primary_track: Track::Stem,
            secondary_track: Track::Abm,
            decision_path: Vec::new(),
        }
    }

    #[test]
    fn append_assigns_increasing_sequence_and_timestamps() {
        let store = InMemoryResultStore::default();

        let first = store.append(draft("a")).expect("append");
        let second = store.append(draft("a")).expect("append");

        assert!(second.sequence > first.sequence);
        assert!(second.created_at >= first.created_at);
        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn latest_for_picks_newest_record_of_the_student() {
        let store = InMemoryResultStore::default();
        store.append(draft("a")).expect("append");
        let newest = store.append(draft("a")).expect("append");
        store.append(draft("b")).expect("append");

        let latest = store
            .latest_for(&StudentId("a".to_string()))
            .expect("lookup")
            .expect("present");

        assert_eq!(latest.id, newest.id);
        assert!(store
            .latest_for(&StudentId("c".to_string()))
            .expect("lookup")
            .is_none());
    }

    #[test]
    fn load_question_bank_defaults_to_standard() {
        let bank = load_question_bank(&AssessmentConfig::default()).expect("bank loads");
        assert_eq!(bank.len(), 180);
    }

    #[test]
    fn load_question_bank_reports_missing_csv() {
        let config = AssessmentConfig {
            question_bank_csv: Some("/nonexistent/bank.csv".into()),
            ..AssessmentConfig::default()
        };
        assert!(matches!(
            load_question_bank(&config),
            Err(AppError::QuestionBank(_))
        ));
    }
}
