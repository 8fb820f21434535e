//! Append-only authoritative collections.
//!
//! Each registry hands out `Arc` snapshots. Appending never touches a
//! snapshot already handed out: when one is alive the vector is copied
//! before the push (`Arc::make_mut`), so a reader always sees a complete
//! collection.

use crate::errors::{AppError, AppResult};
use crate::models::{Appointment, AppointmentDraft, Client, ClientDraft};
use std::sync::Arc;

/// Records stored in a registry are addressed by a string id.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

impl Record for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct Registry<T: Record> {
    items: Arc<Vec<T>>,
}

impl<T: Record> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
        }
    }
}

impl<T: Record> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items.iter().any(|r| r.id() == id)
    }

    /// Append a record at the end of the collection.
    pub fn append(&mut self, record: T) -> AppResult<&T> {
        if self.contains_id(record.id()) {
            return Err(AppError::Validation(format!(
                "Duplicate id {}",
                record.id()
            )));
        }
        let items = Arc::make_mut(&mut self.items);
        items.push(record);
        Ok(&items[items.len() - 1])
    }
}

pub type AppointmentRegistry = Registry<Appointment>;
pub type ClientRegistry = Registry<Client>;

impl Registry<Appointment> {
    /// Validate a draft and append it as a new scheduled appointment.
    pub fn add(&mut self, id: String, draft: &AppointmentDraft) -> AppResult<&Appointment> {
        draft.validate()?;
        self.append(Appointment::from_draft(id, draft))
    }
}

impl Registry<Client> {
    /// Validate a draft and append it as a new client.
    pub fn add(&mut self, id: String, draft: &ClientDraft) -> AppResult<&Client> {
        draft.validate()?;
        self.append(Client::from_draft(id, draft))
    }
}
