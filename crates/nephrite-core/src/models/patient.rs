use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub blood_type: Option<String>,
    pub allergies: Option<String>,
    pub chronic_conditions: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
