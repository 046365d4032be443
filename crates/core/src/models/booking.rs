use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::slot::AppointmentSlot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    /// `dd/mm/yyyy`
    pub date: String,
    /// `HH:MM`
    pub start_time: String,
    #[serde(default)]
    pub doctor_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAppointmentResponse {
    pub success: bool,
    pub appointment_confirmed: bool,
    pub confirmation_id: Uuid,
    pub slot: AppointmentSlot,
    pub message: String,
}
