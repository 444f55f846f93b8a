use serde::Serialize;

/// Patient-education summary for a chronic condition.
#[derive(Debug, Clone, Serialize)]
pub struct ChronicDiseaseInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub symptoms: Vec<&'static str>,
    pub risk_factors: Vec<&'static str>,
    pub prevention: Vec<&'static str>,
    pub management: Vec<&'static str>,
}

#[derive(Debug)]
pub struct ChronicDiseaseCatalog {
    diseases: Vec<ChronicDiseaseInfo>,
}

impl ChronicDiseaseCatalog {
    pub fn standard() -> Self {
        Self {
            diseases: standard_diseases(),
        }
    }

    pub fn diseases(&self) -> &[ChronicDiseaseInfo] {
        &self.diseases
    }

    pub fn find(&self, key: &str) -> Option<&ChronicDiseaseInfo> {
        self.diseases.iter().find(|disease| disease.key == key)
    }
}

fn standard_diseases() -> Vec<ChronicDiseaseInfo> {
    vec![
        ChronicDiseaseInfo {
            key: "diabetes",
            name: "Diabetes",
            description: "A group of diseases that result in high blood glucose levels.",
            symptoms: vec![
                "Excessive thirst",
                "Frequent urination",
                "Unexplained weight loss",
                "Fatigue",
                "Blurred vision",
            ],
            risk_factors: vec![
                "Family history",
                "Obesity",
                "Physical inactivity",
                "Age over 45",
                "High blood pressure",
            ],
            prevention: vec![
                "Maintain healthy weight",
                "Exercise regularly",
                "Eat a balanced diet",
                "Limit processed foods",
                "Regular health screenings",
            ],
            management: vec![
                "Monitor blood sugar levels",
                "Take medications as prescribed",
                "Follow meal planning",
                "Exercise regularly",
                "Regular medical checkups",
            ],
        },
        ChronicDiseaseInfo {
            key: "hypertension",
            name: "Hypertension (High Blood Pressure)",
            description: "A condition where blood pressure is consistently elevated.",
            symptoms: vec![
                "Often no symptoms",
                "Headaches",
                "Shortness of breath",
                "Nosebleeds",
                "Chest pain",
            ],
            risk_factors: vec![
                "Family history",
                "Obesity",
                "High sodium intake",
                "Physical inactivity",
                "Smoking",
                "Excessive alcohol",
            ],
            prevention: vec![
                "Maintain healthy weight",
                "Reduce sodium intake",
                "Exercise regularly",
                "Limit alcohol",
                "Don't smoke",
                "Manage stress",
            ],
            management: vec![
                "Take medications as prescribed",
                "Monitor blood pressure",
                "Follow DASH diet",
                "Exercise regularly",
                "Manage stress",
            ],
        },
        ChronicDiseaseInfo {
            key: "heart_disease",
            name: "Heart Disease",
            description: "Various conditions that affect heart function and blood vessels.",
            symptoms: vec![
                "Chest pain",
                "Shortness of breath",
                "Fatigue",
                "Irregular heartbeat",
                "Swelling in legs/feet",
            ],
            risk_factors: vec![
                "High cholesterol",
                "High blood pressure",
                "Diabetes",
                "Smoking",
                "Family history",
                "Obesity",
            ],
            prevention: vec![
                "Eat heart-healthy diet",
                "Exercise regularly",
                "Maintain healthy weight",
                "Don't smoke",
                "Manage stress",
                "Control diabetes and blood pressure",
            ],
            management: vec![
                "Take medications as prescribed",
                "Follow cardiac diet",
                "Exercise as recommended",
                "Monitor symptoms",
                "Regular cardiology visits",
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_lists_three_conditions_in_order() {
        let catalog = ChronicDiseaseCatalog::standard();
        let keys: Vec<_> = catalog.diseases().iter().map(|disease| disease.key).collect();
        assert_eq!(keys, vec!["diabetes", "hypertension", "heart_disease"]);
    }

    #[test]
    fn find_looks_up_by_key() {
        let catalog = ChronicDiseaseCatalog::standard();
        let hypertension = catalog.find("hypertension").expect("hypertension listed");
        assert_eq!(hypertension.name, "Hypertension (High Blood Pressure)");
        assert!(catalog.find("asthma").is_none());
    }
}
