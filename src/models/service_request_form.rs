use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceRequestForm {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub service_type: String,
    pub site_address: String,
    pub start_date: String,
    pub area_sqft: String,
    pub rooms: String,
    pub requirements: String,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
}
