use serde::{Deserialize, Serialize};

/// Aptitude category a quiz item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Verbal,
    Numerical,
    Scientific,
    Abstract,
    Clerical,
    Entrepreneurial,
}

impl Domain {
    /// Canonical domain order, also used to break score ties.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Verbal,
            Self::Numerical,
            Self::Scientific,
            Self::Abstract,
            Self::Clerical,
            Self::Entrepreneurial,
        ]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Verbal => 0,
            Self::Numerical => 1,
            Self::Scientific => 2,
            Self::Abstract => 3,
            Self::Clerical => 4,
            Self::Entrepreneurial => 5,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Verbal => "verbal",
            Self::Numerical => "numerical",
            Self::Scientific => "scientific",
            Self::Abstract => "abstract",
            Self::Clerical => "clerical",
            Self::Entrepreneurial => "entrepreneurial",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Verbal => "Verbal",
            Self::Numerical => "Numerical",
            Self::Scientific => "Scientific",
            Self::Abstract => "Abstract Reasoning",
            Self::Clerical => "Clerical",
            Self::Entrepreneurial => "Entrepreneurial",
        }
    }

    pub fn from_tag(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|domain| domain.tag() == normalized)
    }
}

/// Academic strand a student can be recommended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Stem,
    Abm,
    Humss,
    Gas,
}

impl Track {
    /// Canonical track order. Ranking ties always resolve against this order.
    pub const fn ordered() -> [Self; 4] {
        [Self::Stem, Self::Abm, Self::Humss, Self::Gas]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Stem => 0,
            Self::Abm => 1,
            Self::Humss => 2,
            Self::Gas => 3,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Stem => "stem",
            Self::Abm => "abm",
            Self::Humss => "humss",
            Self::Gas => "gas",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Stem => "STEM",
            Self::Abm => "ABM",
            Self::Humss => "HUMSS",
            Self::Gas => "GAS",
        }
    }
}

/// Answer choice identifier, always one of `a` through `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    pub const fn ordered() -> [Self; 4] {
        [Self::A, Self::B, Self::C, Self::D]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|key| key.as_str() == normalized)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: OptionKey,
    pub label: String,
}

/// Multiple-choice item from the question bank. Never mutated once the bank is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub domain: Domain,
    pub stem: String,
    pub options: [QuestionOption; 4],
    #[serde(rename = "correctOptionId")]
    pub correct_option: OptionKey,
}

impl Question {
    pub fn is_correct(&self, selected_option_id: &str) -> bool {
        self.correct_option.as_str() == selected_option_id
    }
}

/// Caller-supplied answer. The question id may not exist in the bank, and may not even
/// be a valid bank id (negative or out of range); such answers are scored as unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedAnswer {
    pub question_id: i64,
    pub selected_option_id: String,
}

impl SubmittedAnswer {
    pub fn new(question_id: impl Into<i64>, selected_option_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            selected_option_id: selected_option_id.into(),
        }
    }

    /// Bank id this answer refers to, if the submitted id can be one.
    pub fn bank_question_id(&self) -> Option<u32> {
        u32::try_from(self.question_id).ok()
    }
}

/// Request body for a quiz submission. A missing or null `answers` reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answers: Vec<SubmittedAnswer>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SubmittedAnswer>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let answers: Option<Vec<SubmittedAnswer>> = Option::deserialize(deserializer)?;
    Ok(answers.unwrap_or_default())
}

/// Correct-answer counts for every domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScores {
    pub verbal: u32,
    pub numerical: u32,
    pub scientific: u32,
    pub r#abstract: u32,
    pub clerical: u32,
    pub entrepreneurial: u32,
}

impl DomainScores {
    pub fn get(&self, domain: Domain) -> u32 {
        match domain {
            Domain::Verbal => self.verbal,
            Domain::Numerical => self.numerical,
            Domain::Scientific => self.scientific,
            Domain::Abstract => self.r#abstract,
            Domain::Clerical => self.clerical,
            Domain::Entrepreneurial => self.entrepreneurial,
        }
    }

    fn slot(&mut self, domain: Domain) -> &mut u32 {
        match domain {
            Domain::Verbal => &mut self.verbal,
            Domain::Numerical => &mut self.numerical,
            Domain::Scientific => &mut self.scientific,
            Domain::Abstract => &mut self.r#abstract,
            Domain::Clerical => &mut self.clerical,
            Domain::Entrepreneurial => &mut self.entrepreneurial,
        }
    }

    pub fn increment(&mut self, domain: Domain) {
        *self.slot(domain) += 1;
    }

    pub fn set(&mut self, domain: Domain, value: u32) {
        *self.slot(domain) = value;
    }

    /// Scores in canonical domain order.
    pub fn iter(&self) -> impl Iterator<Item = (Domain, u32)> + '_ {
        Domain::ordered()
            .into_iter()
            .map(move |domain| (domain, self.get(domain)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, score)| score).sum()
    }
}

/// Aggregated score for every track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackScores {
    pub stem: u32,
    pub abm: u32,
    pub humss: u32,
    pub gas: u32,
}

impl TrackScores {
    pub fn get(&self, track: Track) -> u32 {
        match track {
            Track::Stem => self.stem,
            Track::Abm => self.abm,
            Track::Humss => self.humss,
            Track::Gas => self.gas,
        }
    }

    pub fn add(&mut self, track: Track, amount: u32) {
        let slot = match track {
            Track::Stem => &mut self.stem,
            Track::Abm => &mut self.abm,
            Track::Humss => &mut self.humss,
            Track::Gas => &mut self.gas,
        };
        *slot += amount;
    }

    /// Scores in canonical track order.
    pub fn iter(&self) -> impl Iterator<Item = (Track, u32)> + '_ {
        Track::ordered()
            .into_iter()
            .map(move |track| (track, self.get(track)))
    }

    pub fn total(&self) -> u32 {
        self.iter().map(|(_, score)| score).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecommendation {
    pub track: Track,
    pub score: u32,
}

/// Student identity as supplied by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

/// Store-assigned identifier of a persisted result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);
