use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::domain::{QuestionnaireAnswers, RecordId, UserId};
use super::engine::{AssessmentEngine, AssessmentResult};
use super::repository::{DashboardView, HealthRecord, HealthRecordRepository, RepositoryError};

/// Service composing the assessment engine with record storage.
pub struct HealthAssessmentService<R> {
    repository: Arc<R>,
    engine: Arc<AssessmentEngine>,
}

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_record_id() -> RecordId {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecordId(format!("rec-{id:06}"))
}

/// Outcome of a submission: what was stored and the assessment behind it.
#[derive(Debug, Clone)]
pub struct SubmittedAssessment {
    pub record: HealthRecord,
    pub assessment: AssessmentResult,
}

impl<R> HealthAssessmentService<R>
where
    R: HealthRecordRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_engine(repository, AssessmentEngine::standard())
    }

    pub fn with_engine(repository: Arc<R>, engine: AssessmentEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    /// Assess and persist a submission stamped with the current time.
    pub fn submit(
        &self,
        user: &UserId,
        answers: QuestionnaireAnswers,
    ) -> Result<SubmittedAssessment, AssessmentServiceError> {
        self.submit_at(user, answers, Utc::now())
    }

    pub fn submit_at(
        &self,
        user: &UserId,
        answers: QuestionnaireAnswers,
        submitted_at: DateTime<Utc>,
    ) -> Result<SubmittedAssessment, AssessmentServiceError> {
        let assessment = self.engine.assess(&answers);
        let question_answers = serde_json::to_string(&answers)?;

        let record = HealthRecord {
            record_id: next_record_id(),
            user_id: user.clone(),
            submitted_at,
            risk_level: assessment.risk_level,
            question_answers,
            assessment_result: assessment.report_text.clone(),
        };

        let stored = self.repository.insert(record).map_err(|err| {
            warn!(user = %user, error = %err, "failed to store health record");
            err
        })?;

        info!(
            user = %user,
            record = %stored.record_id,
            risk_level = %assessment.risk_level,
            "health assessment recorded"
        );

        Ok(SubmittedAssessment {
            record: stored,
            assessment,
        })
    }

    /// Every record owned by `user`, newest first.
    pub fn history(&self, user: &UserId) -> Result<Vec<HealthRecord>, AssessmentServiceError> {
        Ok(self.repository.list_for_user(user)?)
    }

    pub fn dashboard(&self, user: &UserId) -> Result<DashboardView, AssessmentServiceError> {
        let latest_assessment = self
            .repository
            .latest_for_user(user)?
            .map(|record| record.view())
            .transpose()?;
        let total_assessments = self.repository.count_for_user(user)?;

        Ok(DashboardView {
            latest_assessment,
            total_assessments,
        })
    }

    /// Remove every record owned by `user`; invoked when the account is deleted.
    pub fn purge_user(&self, user: &UserId) -> Result<usize, AssessmentServiceError> {
        let removed = self.repository.delete_for_user(user)?;
        info!(user = %user, removed, "purged health records for deleted account");
        Ok(removed)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("stored answers could not be encoded: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl AssessmentServiceError {
    /// Whether retrying the same action may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AssessmentServiceError::Repository(RepositoryError::Unavailable(_))
        )
    }
}
