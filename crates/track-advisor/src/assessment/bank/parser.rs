use serde::Deserialize;
use std::io::Read;

use super::super::domain::{Domain, OptionKey, Question, QuestionOption};
use super::QuestionBankImportError;

pub(crate) fn parse_questions<R: Read>(reader: R) -> Result<Vec<Question>, QuestionBankImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut questions = Vec::new();

    for record in csv_reader.deserialize::<QuestionRow>() {
        questions.push(record?.into_question()?);
    }

    Ok(questions)
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    id: u32,
    domain: String,
    stem: String,
    option_a: String,
    option_b: String,
    option_c: String,
    option_d: String,
    correct_option: String,
}

impl QuestionRow {
    fn into_question(self) -> Result<Question, QuestionBankImportError> {
        let id = self.id;
        let domain = Domain::from_tag(&self.domain).ok_or_else(|| QuestionBankImportError::Row {
            id,
            reason: format!("unknown domain '{}'", self.domain),
        })?;
        let correct_option =
            OptionKey::parse(&self.correct_option).ok_or_else(|| QuestionBankImportError::Row {
                id,
                reason: format!("correct option '{}' is not one of a-d", self.correct_option),
            })?;

        if self.stem.is_empty() {
            return Err(QuestionBankImportError::Row {
                id,
                reason: "question text is empty".to_string(),
            });
        }

        let options = [
            QuestionOption {
                id: OptionKey::A,
                label: self.option_a,
            },
            QuestionOption {
                id: OptionKey::B,
                label: self.option_b,
            },
            QuestionOption {
                id: OptionKey::C,
                label: self.option_c,
            },
            QuestionOption {
                id: OptionKey::D,
                label: self.option_d,
            },
        ];

        Ok(Question {
            id,
            domain,
            stem: self.stem,
            options,
            correct_option,
        })
    }
}
