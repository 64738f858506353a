//! Blocking user interactions the controllers depend on.

/// Synchronous yes/no question (browser `confirm`)
pub trait Confirmation {
    fn confirm(&self, message: &str) -> bool;
}

/// Dismiss-only notification shown after a failed mutation
pub trait Notifier {
    fn error(&self, message: &str);
}
