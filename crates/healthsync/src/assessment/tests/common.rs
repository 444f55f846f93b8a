use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::domain::{ExerciseFrequency, FamilyHistory, QuestionnaireAnswers, UserId};
use crate::assessment::repository::{HealthRecord, HealthRecordRepository, RepositoryError};
use crate::assessment::{assessment_router, HealthAssessmentService};

pub(super) fn user(name: &str) -> UserId {
    UserId(name.to_string())
}

pub(super) fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn answers(
    family_history: FamilyHistory,
    symptoms: &[&str],
    exercise_frequency: ExerciseFrequency,
    chronic_condition: Option<&str>,
    medications: Option<&str>,
) -> QuestionnaireAnswers {
    QuestionnaireAnswers {
        family_history,
        symptoms: symptoms.iter().map(|symptom| symptom.to_string()).collect(),
        exercise_frequency,
        chronic_condition: chronic_condition.map(str::to_string),
        medications: medications.map(str::to_string),
    }
}

/// Everything answered, nothing concerning.
pub(super) fn healthy_answers() -> QuestionnaireAnswers {
    answers(
        FamilyHistory::No,
        &[],
        ExerciseFrequency::Sometimes,
        None,
        None,
    )
}

/// Every rule fires.
pub(super) fn worst_case_answers() -> QuestionnaireAnswers {
    answers(
        FamilyHistory::Yes,
        &["chest_pain", "shortness_of_breath"],
        ExerciseFrequency::Never,
        Some("type 2 diabetes"),
        Some("metformin"),
    )
}

pub(super) fn build_service() -> (
    HealthAssessmentService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = HealthAssessmentService::new(repository.clone());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<Vec<HealthRecord>>>,
}

impl MemoryRepository {
    pub(super) fn all(&self) -> Vec<HealthRecord> {
        self.records.lock().expect("repository mutex poisoned").clone()
    }
}

impl HealthRecordRepository for MemoryRepository {
    fn insert(&self, record: HealthRecord) -> Result<HealthRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.record_id == record.record_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn list_for_user(&self, user: &UserId) -> Result<Vec<HealthRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard
            .iter()
            .rev()
            .filter(|record| &record.user_id == user)
            .cloned()
            .collect();
        records.sort_by(|left, right| right.submitted_at.cmp(&left.submitted_at));
        Ok(records)
    }

    fn latest_for_user(&self, user: &UserId) -> Result<Option<HealthRecord>, RepositoryError> {
        Ok(self.list_for_user(user)?.into_iter().next())
    }

    fn count_for_user(&self, user: &UserId) -> Result<usize, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().filter(|record| &record.user_id == user).count())
    }

    fn delete_for_user(&self, user: &UserId) -> Result<usize, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let before = guard.len();
        guard.retain(|record| &record.user_id != user);
        Ok(before - guard.len())
    }
}

pub(super) struct ConflictRepository;

impl HealthRecordRepository for ConflictRepository {
    fn insert(&self, _record: HealthRecord) -> Result<HealthRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn list_for_user(&self, _user: &UserId) -> Result<Vec<HealthRecord>, RepositoryError> {
        Ok(Vec::new())
    }

    fn latest_for_user(&self, _user: &UserId) -> Result<Option<HealthRecord>, RepositoryError> {
        Ok(None)
    }

    fn count_for_user(&self, _user: &UserId) -> Result<usize, RepositoryError> {
        Ok(0)
    }

    fn delete_for_user(&self, _user: &UserId) -> Result<usize, RepositoryError> {
        Ok(0)
    }
}

pub(super) struct UnavailableRepository;

impl HealthRecordRepository for UnavailableRepository {
    fn insert(&self, _record: HealthRecord) -> Result<HealthRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_for_user(&self, _user: &UserId) -> Result<Vec<HealthRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn latest_for_user(&self, _user: &UserId) -> Result<Option<HealthRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn count_for_user(&self, _user: &UserId) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete_for_user(&self, _user: &UserId) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(
    service: HealthAssessmentService<MemoryRepository>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}
