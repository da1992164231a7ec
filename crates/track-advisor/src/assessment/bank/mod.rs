mod catalog;
mod parser;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::domain::{Domain, Question, QuestionOption};

/// Number of items drawn per domain when the configuration does not say otherwise.
pub const DEFAULT_QUESTIONS_PER_DOMAIN: usize = 15;

/// Read-only catalog of quiz items, indexed by question id.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
    by_id: HashMap<u32, usize>,
}

impl QuestionBank {
    /// The built-in 180 item bank (30 per domain).
    pub fn standard() -> Self {
        let questions = catalog::standard_questions();
        let by_id = questions
            .iter()
            .enumerate()
            .map(|(position, question)| (question.id, position))
            .collect();
        Self { questions, by_id }
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        let mut by_id = HashMap::with_capacity(questions.len());
        for (position, question) in questions.iter().enumerate() {
            if question.id == 0 {
                return Err(QuestionBankError::InvalidQuestionId);
            }
            if by_id.insert(question.id, position).is_some() {
                return Err(QuestionBankError::DuplicateQuestionId(question.id));
            }
        }

        Ok(Self { questions, by_id })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuestionBankImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a replacement bank from CSV with the header
    /// `id,domain,stem,option_a,option_b,option_c,option_d,correct_option`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuestionBankImportError> {
        let questions = parser::parse_questions(reader)?;
        Ok(Self::new(questions)?)
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.by_id
            .get(&id)
            .and_then(|position| self.questions.get(*position))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn questions_in(&self, domain: Domain) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.domain == domain)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Draw up to `per_domain` distinct items from every domain, then interleave them.
    ///
    /// Domains holding fewer items than requested contribute everything they have; an
    /// empty domain contributes nothing.
    pub fn sample<G: Rng + ?Sized>(&self, per_domain: usize, rng: &mut G) -> AssessmentInstance {
        let mut selected = Vec::new();

        for domain in Domain::ordered() {
            let pool = self.questions_in(domain);
            selected.extend(
                pool.choose_multiple(rng, per_domain)
                    .map(|question| (*question).clone()),
            );
        }

        selected.shuffle(rng);
        AssessmentInstance {
            questions: selected,
        }
    }

    /// Sample with a reproducible sequence when a seed is given, otherwise from entropy.
    pub fn sample_seeded(&self, per_domain: usize, seed: Option<u64>) -> AssessmentInstance {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.sample(per_domain, &mut rng)
    }
}

/// One sampled quiz. Ephemeral; only the resulting answers are ever persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentInstance {
    questions: Vec<Question>,
}

impl AssessmentInstance {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn count_in(&self, domain: Domain) -> usize {
        self.questions
            .iter()
            .filter(|question| question.domain == domain)
            .count()
    }

    /// Client-facing views with the answer key stripped.
    pub fn views(&self) -> Vec<QuestionView> {
        self.questions.iter().map(QuestionView::from).collect()
    }
}

/// Question as presented to a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: u32,
    pub domain: Domain,
    pub stem: String,
    pub options: [QuestionOption; 4],
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            domain: question.domain,
            stem: question.stem.clone(),
            options: question.options.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("question id {0} appears more than once")]
    DuplicateQuestionId(u32),
    #[error("question ids must be positive integers")]
    InvalidQuestionId,
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionBankImportError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question bank CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row for question {id} is invalid: {reason}")]
    Row { id: u32, reason: String },
    #[error(transparent)]
    Bank(#[from] QuestionBankError),
}
