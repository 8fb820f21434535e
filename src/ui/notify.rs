//! Notification sink used by the controller for user feedback.

use super::messages;
use std::cell::RefCell;
use std::rc::Rc;

pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Prints notifications to the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        messages::success(message);
    }

    fn error(&self, message: &str) {
        messages::error(message);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Keeps every notification in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    sent: Rc<RefCell<Vec<Notification>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.sent.borrow().last().cloned()
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.sent.borrow().iter().filter(|n| n.kind == kind).count()
    }

    fn push(&self, kind: NotificationKind, message: &str) {
        self.sent.borrow_mut().push(Notification {
            kind,
            message: message.to_string(),
        });
    }
}

impl Notifier for MemoryNotifier {
    fn success(&self, message: &str) {
        self.push(NotificationKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.push(NotificationKind::Error, message);
    }
}
