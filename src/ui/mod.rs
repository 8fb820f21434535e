pub mod messages;
pub mod notify;
pub mod render;

pub use notify::{ConsoleNotifier, MemoryNotifier, Notification, NotificationKind, Notifier};
