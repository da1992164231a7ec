use std::collections::HashSet;

use super::super::bank::QuestionBank;
use super::super::domain::{DomainScores, SubmittedAnswer};

/// Per-domain tallies for one submission plus the entries that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    pub domain_scores: DomainScores,
    /// Distinct known questions referenced per domain; upper bound for `domain_scores`.
    pub attempted: DomainScores,
    pub unknown_question_ids: Vec<i64>,
    pub duplicate_question_ids: Vec<i64>,
}

impl ScoreSheet {
    pub fn ignored(&self) -> usize {
        self.unknown_question_ids.len() + self.duplicate_question_ids.len()
    }
}

/// Tally correct answers per domain against the full bank.
///
/// Unknown question ids are skipped rather than rejected. Only the first answer for a
/// given question id counts; repeats are recorded in `duplicate_question_ids`.
pub fn score_answers(answers: &[SubmittedAnswer], bank: &QuestionBank) -> ScoreSheet {
    let mut sheet = ScoreSheet::default();
    let mut seen = HashSet::with_capacity(answers.len());

    for answer in answers {
        let Some(question) = answer.bank_question_id().and_then(|id| bank.get(id)) else {
            sheet.unknown_question_ids.push(answer.question_id);
            continue;
        };

        if !seen.insert(answer.question_id) {
            sheet.duplicate_question_ids.push(answer.question_id);
            continue;
        }

        sheet.attempted.increment(question.domain);
        if question.is_correct(&answer.selected_option_id) {
            sheet.domain_scores.increment(question.domain);
        }
    }

    sheet
}
