use super::status::AppointmentStatus;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub client_name: String,
    pub date: String, // "YYYY-MM-DD", presence-checked only
    pub time: String, // "HH:MM", presence-checked only
    pub service: String,
    pub status: AppointmentStatus,
    pub price: f64,
    pub notes: String,
}

impl Appointment {
    /// Build a committed appointment from a draft. The draft must already
    /// have passed `AppointmentDraft::validate`.
    pub fn from_draft(id: String, draft: &AppointmentDraft) -> Self {
        Self {
            id,
            client_name: draft.client_name.clone(),
            date: draft.date.clone(),
            time: draft.time.clone(),
            service: draft.service.clone(),
            status: AppointmentStatus::Scheduled,
            price: draft.price,
            notes: draft.notes.clone(),
        }
    }

    pub fn when(&self) -> String {
        format!("{} at {}", self.date, self.time)
    }
}

/// Field values of the "schedule appointment" form not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub client_name: String,
    pub date: String,
    pub time: String,
    pub service: String,
    pub price: f64,
    pub notes: String,
}

impl AppointmentDraft {
    pub const FORM: &'static str = "appointment";
    pub const FIELDS: [&'static str; 6] = ["client", "date", "time", "service", "price", "notes"];

    /// Presence check on client name, date and time.
    pub fn validate(&self) -> AppResult<()> {
        if self.client_name.is_empty() || self.date.is_empty() || self.time.is_empty() {
            return Err(AppError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply a single field edit. Text fields are stored verbatim.
    pub fn set_field(&mut self, field: &str, value: &str) -> AppResult<()> {
        match field {
            "client" | "client_name" | "name" => self.client_name = value.to_string(),
            "date" => self.date = value.to_string(),
            "time" => self.time = value.to_string(),
            "service" => self.service = value.to_string(),
            "notes" => self.notes = value.to_string(),
            "price" => self.price = parse_amount(Self::FORM, field, value)?,
            _ => return Err(AppError::invalid_field(Self::FORM, field, value)),
        }
        Ok(())
    }
}

/// Parse a non-negative amount. An empty value resets the field to 0, like
/// clearing a number input.
pub(crate) fn parse_amount(form: &str, field: &str, value: &str) -> AppResult<f64> {
    let v = value.trim();
    if v.is_empty() {
        return Ok(0.0);
    }
    match v.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(AppError::invalid_field(form, field, value)),
    }
}

/// Parse any finite number; an empty value means 0.
pub(crate) fn parse_number(form: &str, field: &str, value: &str) -> AppResult<f64> {
    let v = value.trim();
    if v.is_empty() {
        return Ok(0.0);
    }
    match v.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(AppError::invalid_field(form, field, value)),
    }
}
