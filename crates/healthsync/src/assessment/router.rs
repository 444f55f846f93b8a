use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

use super::domain::{QuestionnaireAnswers, RecordId};
use super::engine::RiskLevel;
use super::repository::{DashboardView, HealthRecordRepository, HealthRecordView};
use super::service::{AssessmentServiceError, HealthAssessmentService, SubmittedAssessment};
use crate::catalog::{ChronicDiseaseCatalog, ChronicDiseaseInfo};
use crate::error::AppError;
use crate::identity::AuthenticatedUser;

/// Response body for a freshly recorded assessment.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionView {
    pub record_id: RecordId,
    pub submitted_at: DateTime<Utc>,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub report: String,
}

impl From<SubmittedAssessment> for SubmissionView {
    fn from(submitted: SubmittedAssessment) -> Self {
        let SubmittedAssessment { record, assessment } = submitted;
        Self {
            record_id: record.record_id,
            submitted_at: record.submitted_at,
            risk_level: assessment.risk_level,
            risk_factors: assessment.risk_factors,
            recommendations: assessment.recommendations,
            report: assessment.report_text,
        }
    }
}

/// Router exposing questionnaire submission, history, and reference content.
pub fn assessment_router<R>(service: Arc<HealthAssessmentService<R>>) -> Router
where
    R: HealthRecordRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessments",
            post(submit_handler::<R>).get(history_handler::<R>),
        )
        .route("/api/v1/dashboard", get(dashboard_handler::<R>))
        .route("/api/v1/chronic-diseases", get(chronic_diseases_handler))
        .with_state(service)
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<HealthAssessmentService<R>>>,
    AuthenticatedUser(user): AuthenticatedUser,
    payload: Result<Json<QuestionnaireAnswers>, JsonRejection>,
) -> Response
where
    R: HealthRecordRepository + 'static,
{
    let answers = match payload {
        Ok(Json(answers)) => answers,
        Err(rejection) => {
            let payload = json!({
                "error": rejection.body_text(),
            });
            return (rejection.status(), Json(payload)).into_response();
        }
    };

    match service.submit(&user, answers) {
        Ok(submitted) => {
            let view = SubmissionView::from(submitted);
            (StatusCode::CREATED, Json(view)).into_response()
        }
        Err(error) if error.is_transient() => {
            let payload = json!({
                "error": "health records are temporarily unavailable, please retry",
                "retryable": true,
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<HealthAssessmentService<R>>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<Vec<HealthRecordView>>, AppError>
where
    R: HealthRecordRepository + 'static,
{
    let views = service
        .history(&user)?
        .iter()
        .map(|record| record.view())
        .collect::<Result<Vec<_>, _>>()
        .map_err(AssessmentServiceError::from)?;
    Ok(Json(views))
}

pub(crate) async fn dashboard_handler<R>(
    State(service): State<Arc<HealthAssessmentService<R>>>,
    AuthenticatedUser(user): AuthenticatedUser,
) -> Result<Json<DashboardView>, AppError>
where
    R: HealthRecordRepository + 'static,
{
    Ok(Json(service.dashboard(&user)?))
}

pub(crate) async fn chronic_diseases_handler() -> Json<Vec<ChronicDiseaseInfo>> {
    Json(ChronicDiseaseCatalog::standard().diseases().to_vec())
}
