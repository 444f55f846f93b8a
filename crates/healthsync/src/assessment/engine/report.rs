use std::fmt::Write;

use super::RiskLevel;

pub const DISCLAIMER: &str = "This assessment is for informational purposes only and should not replace professional medical advice. Please consult with a healthcare provider for proper diagnosis and treatment.";

pub(crate) fn render_report(
    risk_level: RiskLevel,
    risk_factors: &[String],
    recommendations: &[String],
) -> String {
    let mut report = format!("Health Assessment Result:\n\nRisk Level: {risk_level}\n\n");

    if !risk_factors.is_empty() {
        let _ = write!(
            report,
            "Risk factors identified: {}.\n\n",
            risk_factors.join(", ")
        );
    }

    if !recommendations.is_empty() {
        report.push_str("Recommendations:\n");
        for recommendation in recommendations {
            let _ = writeln!(report, "\u{2022} {recommendation}");
        }
        report.push('\n');
    }

    report.push_str(DISCLAIMER);
    report
}
