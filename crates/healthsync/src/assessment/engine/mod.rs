mod report;
mod rules;

pub use report::DISCLAIMER;

use std::fmt;

use super::domain::QuestionnaireAnswers;
use report::render_report;
use rules::{evaluate_rules, Rule, STANDARD_RULES};
use serde::{Deserialize, Serialize};

/// Ordinal risk tier. Declaration order is the ordering: `Low < Moderate < High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    #[default]
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies a rule in the assessment audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentRule {
    FamilyHistory,
    SeriousSymptoms,
    PhysicalActivity,
    ChronicCondition,
    Medications,
}

/// Stateless engine applying the fixed rule table to questionnaire answers.
pub struct AssessmentEngine {
    rules: &'static [Rule],
}

impl AssessmentEngine {
    pub fn standard() -> Self {
        Self {
            rules: &STANDARD_RULES,
        }
    }

    pub fn assess(&self, answers: &QuestionnaireAnswers) -> AssessmentResult {
        let outcome = evaluate_rules(self.rules, answers);
        let report_text = render_report(
            outcome.risk_level,
            &outcome.risk_factors,
            &outcome.recommendations,
        );

        AssessmentResult {
            risk_level: outcome.risk_level,
            risk_factors: outcome.risk_factors,
            recommendations: outcome.recommendations,
            triggered_rules: outcome.triggered,
            report_text,
        }
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Convenience wrapper over [`AssessmentEngine::standard`].
pub fn assess(answers: &QuestionnaireAnswers) -> AssessmentResult {
    AssessmentEngine::standard().assess(answers)
}

/// Assessment output: the tier, the reasons behind it, and the rendered report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub triggered_rules: Vec<AssessmentRule>,
    pub report_text: String,
}
