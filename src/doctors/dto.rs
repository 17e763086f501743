use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateDoctorRequest {
    pub specialization: Option<String>,
    pub license_number: Option<String>,
    #[serde(default)]
    pub years_of_experience: i32,
    pub bio: Option<String>,
}

/// Extra query params accepted by the doctor listing.
#[derive(Debug, Deserialize)]
pub struct DoctorFilter {
    pub specialization: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_of_experience_defaults_to_zero() {
        let req: CreateDoctorRequest =
            serde_json::from_str(r#"{"specialization":"cardiology"}"#).unwrap();
        assert_eq!(req.years_of_experience, 0);
        assert_eq!(req.specialization.as_deref(), Some("cardiology"));
    }
}
