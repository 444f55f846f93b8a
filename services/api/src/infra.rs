use healthsync::assessment::{HealthRecord, HealthRecordRepository, RepositoryError, UserId};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local record store. One mutex guards the whole table, so each insert lands in
/// full before any other submission or listing observes it.
#[derive(Default, Clone)]
pub(crate) struct InMemoryHealthRecordRepository {
    records: Arc<Mutex<Vec<HealthRecord>>>,
}

impl InMemoryHealthRecordRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<HealthRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("record store poisoned".to_string()))
    }
}

impl HealthRecordRepository for InMemoryHealthRecordRepository {
    fn insert(&self, record: HealthRecord) -> Result<HealthRecord, RepositoryError> {
        let mut guard = self.lock()?;
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
        let guard = self.lock()?;
        // Reverse insertion order first so equal timestamps still list newest first.
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
        let guard = self.lock()?;
        // `max_by_key` keeps the last of equal keys, i.e. the most recent insert.
        Ok(guard
            .iter()
            .filter(|record| &record.user_id == user)
            .max_by_key(|record| record.submitted_at)
            .cloned())
    }

    fn count_for_user(&self, user: &UserId) -> Result<usize, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.iter().filter(|record| &record.user_id == user).count())
    }

    fn delete_for_user(&self, user: &UserId) -> Result<usize, RepositoryError> {
        let mut guard = self.lock()?;
        let before = guard.len();
        guard.retain(|record| &record.user_id != user);
        Ok(before - guard.len())
    }
}
