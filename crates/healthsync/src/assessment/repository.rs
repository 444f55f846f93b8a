use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{QuestionnaireAnswers, RecordId, UserId};
use super::engine::RiskLevel;

/// Persisted, immutable snapshot of one questionnaire submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub record_id: RecordId,
    pub user_id: UserId,
    pub submitted_at: DateTime<Utc>,
    pub risk_level: RiskLevel,
    /// JSON encoding of the normalized [`QuestionnaireAnswers`].
    pub question_answers: String,
    pub assessment_result: String,
}

impl HealthRecord {
    pub fn answers(&self) -> Result<QuestionnaireAnswers, serde_json::Error> {
        serde_json::from_str(&self.question_answers)
    }

    pub fn view(&self) -> Result<HealthRecordView, serde_json::Error> {
        Ok(HealthRecordView {
            record_id: self.record_id.clone(),
            submitted_at: self.submitted_at,
            risk_level: self.risk_level,
            answers: self.answers()?,
            report: self.assessment_result.clone(),
        })
    }
}

/// Storage abstraction for health records.
///
/// Implementations must write a record all-or-nothing and keep concurrent inserts for the
/// same user from interleaving. Listings are newest first.
pub trait HealthRecordRepository: Send + Sync {
    fn insert(&self, record: HealthRecord) -> Result<HealthRecord, RepositoryError>;
    fn list_for_user(&self, user: &UserId) -> Result<Vec<HealthRecord>, RepositoryError>;
    fn latest_for_user(&self, user: &UserId) -> Result<Option<HealthRecord>, RepositoryError>;
    fn count_for_user(&self, user: &UserId) -> Result<usize, RepositoryError>;
    /// Account-deletion cascade. Returns how many records were removed.
    fn delete_for_user(&self, user: &UserId) -> Result<usize, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Client-facing representation of a stored record.
#[derive(Debug, Clone, Serialize)]
pub struct HealthRecordView {
    pub record_id: RecordId,
    pub submitted_at: DateTime<Utc>,
    pub risk_level: RiskLevel,
    pub answers: QuestionnaireAnswers,
    pub report: String,
}

/// Dashboard summary: the latest record plus how many exist in total.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub latest_assessment: Option<HealthRecordView>,
    pub total_assessments: usize,
}
