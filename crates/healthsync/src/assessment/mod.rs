//! Health questionnaire assessment: answer normalization, the rule engine, record storage, and
//! the HTTP routes that tie them together.

pub mod domain;
pub mod engine;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ExerciseFrequency, FamilyHistory, QuestionnaireAnswers, RawAnswers, RecordId, UserId,
    SERIOUS_SYMPTOMS,
};
pub use engine::{assess, AssessmentEngine, AssessmentResult, AssessmentRule, RiskLevel};
pub use repository::{
    DashboardView, HealthRecord, HealthRecordRepository, HealthRecordView, RepositoryError,
};
pub use router::{assessment_router, SubmissionView};
pub use service::{AssessmentServiceError, HealthAssessmentService, SubmittedAssessment};
