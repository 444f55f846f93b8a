use super::super::domain::{FamilyHistory, QuestionnaireAnswers};
use super::{AssessmentRule, RiskLevel};

/// What a rule contributes when its predicate holds.
pub(crate) struct RuleEffect {
    pub risk_factor: Option<String>,
    pub recommendation: Option<&'static str>,
    pub raise_to: Option<RiskLevel>,
}

/// Pure predicate/effect pair evaluated against the immutable answers.
pub(crate) struct Rule {
    pub kind: AssessmentRule,
    pub evaluate: fn(&QuestionnaireAnswers) -> Option<RuleEffect>,
}

/// Evaluation order is significant: factors and recommendations are reported in this order.
pub(crate) static STANDARD_RULES: [Rule; 5] = [
    Rule {
        kind: AssessmentRule::FamilyHistory,
        evaluate: family_history,
    },
    Rule {
        kind: AssessmentRule::SeriousSymptoms,
        evaluate: serious_symptoms,
    },
    Rule {
        kind: AssessmentRule::PhysicalActivity,
        evaluate: physical_activity,
    },
    Rule {
        kind: AssessmentRule::ChronicCondition,
        evaluate: chronic_condition,
    },
    Rule {
        kind: AssessmentRule::Medications,
        evaluate: medications,
    },
];

fn family_history(answers: &QuestionnaireAnswers) -> Option<RuleEffect> {
    (answers.family_history == FamilyHistory::Yes).then(|| RuleEffect {
        risk_factor: Some("family history of chronic diseases".to_string()),
        recommendation: None,
        raise_to: Some(RiskLevel::Moderate),
    })
}

fn serious_symptoms(answers: &QuestionnaireAnswers) -> Option<RuleEffect> {
    answers.has_serious_symptom().then(|| RuleEffect {
        risk_factor: Some("experiencing concerning symptoms".to_string()),
        recommendation: Some("Consult a healthcare professional immediately"),
        raise_to: Some(RiskLevel::High),
    })
}

// Levels combine by max, so this only lifts an assessment that is still Low.
fn physical_activity(answers: &QuestionnaireAnswers) -> Option<RuleEffect> {
    answers
        .exercise_frequency
        .is_insufficient()
        .then(|| RuleEffect {
            risk_factor: Some("insufficient physical activity".to_string()),
            recommendation: Some("Increase physical activity gradually"),
            raise_to: Some(RiskLevel::Moderate),
        })
}

fn chronic_condition(answers: &QuestionnaireAnswers) -> Option<RuleEffect> {
    answers
        .chronic_condition
        .as_deref()
        .map(|condition| RuleEffect {
            risk_factor: Some(format!("diagnosed chronic condition: {condition}")),
            recommendation: Some("Continue following your healthcare provider's treatment plan"),
            raise_to: Some(RiskLevel::High),
        })
}

fn medications(answers: &QuestionnaireAnswers) -> Option<RuleEffect> {
    answers.medications.as_ref().map(|_| RuleEffect {
        risk_factor: None,
        recommendation: Some("Ensure you're taking medications as prescribed"),
        raise_to: None,
    })
}

/// Running state threaded through the rule table.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub triggered: Vec<AssessmentRule>,
}

impl Accumulator {
    pub fn apply(&mut self, kind: AssessmentRule, effect: RuleEffect) {
        if let Some(factor) = effect.risk_factor {
            self.risk_factors.push(factor);
        }
        if let Some(level) = effect.raise_to {
            self.risk_level = self.risk_level.max(level);
        }
        if let Some(recommendation) = effect.recommendation {
            self.recommendations.push(recommendation.to_string());
        }
        self.triggered.push(kind);
    }
}

pub(crate) fn evaluate_rules(rules: &[Rule], answers: &QuestionnaireAnswers) -> Accumulator {
    rules
        .iter()
        .fold(Accumulator::default(), |mut accumulator, rule| {
            if let Some(effect) = (rule.evaluate)(answers) {
                accumulator.apply(rule.kind, effect);
            }
            accumulator
        })
}
