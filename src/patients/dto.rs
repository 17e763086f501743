use serde::Deserialize;
use time::Date;

#[derive(Debug, Deserialize)]
pub struct CreatePatientRequest {
    pub date_of_birth: Option<Date>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
