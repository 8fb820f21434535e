//! In-memory activity log of the current session.

use chrono::Local;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: usize,
    pub date: String, // RFC 3339, local time
    pub operation: String,
    pub target: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, operation: &str, target: &str, message: &str) {
        let id = self.entries.len() + 1;
        self.entries.push(LogEntry {
            id,
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
