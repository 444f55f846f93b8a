use clap::Args;
use healthsync::assessment::{AssessmentEngine, AssessmentResult, QuestionnaireAnswers, RawAnswers};
use healthsync::catalog::ChronicDiseaseCatalog;
use healthsync::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// Family history of chronic disease (yes|no)
    #[arg(long)]
    pub(crate) family_history: Option<String>,
    /// Reported symptom tag; repeat for several (e.g. chest_pain)
    #[arg(long = "symptom")]
    pub(crate) symptoms: Vec<String>,
    /// Exercise frequency (never|rarely|sometimes|often)
    #[arg(long)]
    pub(crate) exercise_frequency: Option<String>,
    /// Diagnosed chronic condition, if any
    #[arg(long)]
    pub(crate) chronic_condition: Option<String>,
    /// Current medications, if any
    #[arg(long)]
    pub(crate) medications: Option<String>,
    /// Print the full assessment as JSON instead of the report text
    #[arg(long)]
    pub(crate) json: bool,
}

impl AssessArgs {
    /// Flags go through the same normalization as a submitted form.
    pub(crate) fn answers(&self) -> QuestionnaireAnswers {
        QuestionnaireAnswers::from(RawAnswers {
            family_history: self.family_history.clone(),
            symptoms: self.symptoms.clone(),
            exercise_frequency: self.exercise_frequency.clone(),
            chronic_condition: self.chronic_condition.clone(),
            medications: self.medications.clone(),
        })
    }
}

pub(crate) fn run_assessment(args: AssessArgs) -> Result<(), AppError> {
    let answers = args.answers();
    let result = AssessmentEngine::standard().assess(&answers);
    println!("{}", render_assessment(&result, args.json)?);
    Ok(())
}

pub(crate) fn render_assessment(result: &AssessmentResult, json: bool) -> Result<String, AppError> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.report_text.clone())
    }
}

pub(crate) fn run_conditions() {
    print!("{}", render_conditions(&ChronicDiseaseCatalog::standard()));
}

pub(crate) fn render_conditions(catalog: &ChronicDiseaseCatalog) -> String {
    let mut output = String::new();
    for disease in catalog.diseases() {
        output.push_str(&format!("{}\n{}\n", disease.name, disease.description));
        let sections = [
            ("Symptoms", &disease.symptoms),
            ("Risk factors", &disease.risk_factors),
            ("Prevention", &disease.prevention),
            ("Management", &disease.management),
        ];
        for (label, items) in sections {
            output.push_str(&format!("  {label}: {}\n", items.join(", ")));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthsync::assessment::RiskLevel;

    #[test]
    fn cli_flags_normalize_like_form_input() {
        let args = AssessArgs {
            family_history: Some("yes".to_string()),
            symptoms: vec!["severe_fatigue".to_string()],
            exercise_frequency: Some("rarely".to_string()),
            chronic_condition: Some("   ".to_string()),
            medications: None,
            json: false,
        };

        let answers = args.answers();
        assert!(answers.has_serious_symptom());
        assert_eq!(answers.chronic_condition, None);

        let result = AssessmentEngine::standard().assess(&answers);
        assert_eq!(result.risk_level, RiskLevel::High);
        let text = render_assessment(&result, false).expect("renders");
        assert!(text.starts_with("Health Assessment Result:\n\nRisk Level: High"));
    }

    #[test]
    fn json_output_includes_triggered_rules() {
        let args = AssessArgs {
            exercise_frequency: Some("never".to_string()),
            json: true,
            ..AssessArgs::default()
        };
        let result = AssessmentEngine::standard().assess(&args.answers());

        let rendered = render_assessment(&result, true).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["risk_level"], "Moderate");
        assert_eq!(value["triggered_rules"][0], "physical_activity");
    }

    #[test]
    fn conditions_listing_covers_catalog() {
        let rendered = render_conditions(&ChronicDiseaseCatalog::standard());
        assert!(rendered.starts_with("Diabetes\n"));
        assert!(rendered.contains("Hypertension (High Blood Pressure)"));
        assert!(rendered.contains("  Management: Take medications as prescribed"));
    }
}
