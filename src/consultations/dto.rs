use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateConsultationRequest {
    pub symptoms: Vec<String>,
    pub description: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

fn default_priority() -> String {
    "medium".into()
}

#[derive(Debug, Deserialize)]
pub struct UpdateConsultationRequest {
    pub doctor_id: Option<Uuid>,
    pub status: Option<String>,
    pub doctor_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_defaults_to_medium() {
        let req: CreateConsultationRequest =
            serde_json::from_str(r#"{"symptoms":["headache"],"description":"since monday"}"#)
                .unwrap();
        assert_eq!(req.priority, "medium");
        assert_eq!(req.symptoms, vec!["headache"]);
    }
}
