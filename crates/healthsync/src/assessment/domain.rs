use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier of an authenticated account, supplied by the identity gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for persisted health records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Symptom tags that escalate an assessment straight to high risk.
pub const SERIOUS_SYMPTOMS: [&str; 3] = ["chest_pain", "shortness_of_breath", "severe_fatigue"];

/// Answer to "does chronic disease run in your family?".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FamilyHistory {
    Yes,
    No,
    #[default]
    Unknown,
}

impl FamilyHistory {
    fn from_answer(raw: Option<&str>) -> Self {
        match raw {
            Some("yes") => Self::Yes,
            Some("no") => Self::No,
            _ => Self::Unknown,
        }
    }

    fn as_answer(self) -> Option<&'static str> {
        match self {
            Self::Yes => Some("yes"),
            Self::No => Some("no"),
            Self::Unknown => None,
        }
    }
}

/// Self-reported exercise cadence. Values outside the form's options are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExerciseFrequency {
    Never,
    Rarely,
    Sometimes,
    Often,
    Unrecognized(String),
    #[default]
    Unspecified,
}

impl ExerciseFrequency {
    fn from_answer(raw: Option<String>) -> Self {
        let Some(value) = raw else {
            return Self::Unspecified;
        };

        match value.as_str() {
            "never" => Self::Never,
            "rarely" => Self::Rarely,
            "sometimes" => Self::Sometimes,
            "often" => Self::Often,
            _ => Self::Unrecognized(value),
        }
    }

    fn into_answer(self) -> Option<String> {
        match self {
            Self::Never => Some("never".to_string()),
            Self::Rarely => Some("rarely".to_string()),
            Self::Sometimes => Some("sometimes".to_string()),
            Self::Often => Some("often".to_string()),
            Self::Unrecognized(value) => Some(value),
            Self::Unspecified => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::Never | Self::Rarely)
    }
}

/// Normalized questionnaire answers consumed by the assessment engine.
///
/// Serializes to (and deserializes from) the loosely-shaped form payload so stored
/// records keep the same JSON layout as the submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAnswers", into = "RawAnswers")]
pub struct QuestionnaireAnswers {
    pub family_history: FamilyHistory,
    pub symptoms: BTreeSet<String>,
    pub exercise_frequency: ExerciseFrequency,
    /// Trimmed; `None` when the field was absent or blank.
    pub chronic_condition: Option<String>,
    /// Trimmed; `None` when the field was absent or blank.
    pub medications: Option<String>,
}

impl QuestionnaireAnswers {
    pub fn has_serious_symptom(&self) -> bool {
        SERIOUS_SYMPTOMS
            .iter()
            .any(|symptom| self.symptoms.contains(*symptom))
    }
}

/// Wire shape of a questionnaire submission.
///
/// Every key may be missing or `null`. `symptoms` accepts a single string as a one-element
/// list. Any other JSON type is a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnswers {
    #[serde(default)]
    pub family_history: Option<String>,
    #[serde(default, deserialize_with = "deserialize_symptoms")]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub exercise_frequency: Option<String>,
    #[serde(default)]
    pub chronic_condition: Option<String>,
    #[serde(default)]
    pub medications: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn deserialize_symptoms<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(match value {
        None => Vec::new(),
        Some(OneOrMany::One(symptom)) => vec![symptom],
        Some(OneOrMany::Many(symptoms)) => symptoms,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

impl From<RawAnswers> for QuestionnaireAnswers {
    fn from(raw: RawAnswers) -> Self {
        Self {
            family_history: FamilyHistory::from_answer(raw.family_history.as_deref()),
            symptoms: raw.symptoms.into_iter().collect(),
            exercise_frequency: ExerciseFrequency::from_answer(raw.exercise_frequency),
            chronic_condition: non_blank(raw.chronic_condition),
            medications: non_blank(raw.medications),
        }
    }
}

impl From<QuestionnaireAnswers> for RawAnswers {
    fn from(answers: QuestionnaireAnswers) -> Self {
        Self {
            family_history: answers.family_history.as_answer().map(str::to_string),
            symptoms: answers.symptoms.into_iter().collect(),
            exercise_frequency: answers.exercise_frequency.into_answer(),
            chronic_condition: answers.chronic_condition,
            medications: answers.medications,
        }
    }
}
