use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const NEVER: &str = "Never";

/// Date of a client's last visit, or `Never` for a client with no sessions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LastVisit {
    #[default]
    Never,
    On(String),
}

impl LastVisit {
    pub fn as_str(&self) -> &str {
        match self {
            LastVisit::Never => NEVER,
            LastVisit::On(date) => date,
        }
    }

    pub fn parse(s: &str) -> Self {
        if s.is_empty() || s == NEVER {
            LastVisit::Never
        } else {
            LastVisit::On(s.to_string())
        }
    }
}

impl fmt::Display for LastVisit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LastVisit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LastVisit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(LastVisit::parse(&s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_sessions: u32,
    pub total_spent: f64,
    pub last_visit: LastVisit,
}

impl Client {
    /// New client record. Aggregates start at zero and are not derived from
    /// the appointment collection.
    pub fn from_draft(id: String, draft: &ClientDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            total_sessions: 0,
            total_spent: 0.0,
            last_visit: LastVisit::Never,
        }
    }
}

/// Field values of the "add client" form not yet committed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ClientDraft {
    pub const FORM: &'static str = "client";
    pub const FIELDS: [&'static str; 3] = ["name", "email", "phone"];

    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(AppError::Validation(
                "Please fill in name and email".to_string(),
            ));
        }
        Ok(())
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> AppResult<()> {
        match field {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "phone" => self.phone = value.to_string(),
            _ => return Err(AppError::invalid_field(Self::FORM, field, value)),
        }
        Ok(())
    }
}
