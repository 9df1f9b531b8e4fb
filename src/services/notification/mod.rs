//! Toast notification slot for brief feedback messages.
//!
//! A single slot: showing a message replaces whatever was there and restarts
//! the dismissal delay. Callers poll with the current instant; an expired
//! toast reads as absent.

use std::time::{Duration, Instant};

use crate::models::settings::DEFAULT_TOAST_DURATION_MS;

/// Types of toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    /// Get the icon for this toast level
    pub fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Warning => "⚠",
            ToastLevel::Error => "✗",
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    /// When the toast should disappear
    pub expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Time left before dismissal.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

/// Holder for the one visible toast.
#[derive(Debug, Clone)]
pub struct ToastSlot {
    current: Option<Toast>,
    duration: Duration,
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }
}

impl ToastSlot {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show `message`, replacing any visible toast and restarting the delay.
    pub fn show(&mut self, message: impl Into<String>, level: ToastLevel, now: Instant) {
        let message = message.into();
        log::debug!("Toast ({:?}): {}", level, message);
        self.current = Some(Toast {
            message,
            level,
            expires_at: now + self.duration,
        });
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, ToastLevel::Success, now);
    }

    pub fn info(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, ToastLevel::Info, now);
    }

    pub fn warning(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, ToastLevel::Warning, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.show(message, ToastLevel::Error, now);
    }

    /// The visible toast, if it has not expired at `now`.
    pub fn current(&self, now: Instant) -> Option<&Toast> {
        self.current.as_ref().filter(|t| !t.is_expired(now))
    }

    /// Drop the toast once its delay has passed.
    pub fn cleanup(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_visible_until_delay_passes() {
        let start = Instant::now();
        let mut slot = ToastSlot::new(Duration::from_secs(3));

        slot.success("Event added", start);

        assert_eq!(slot.current(start).unwrap().message, "Event added");
        assert!(slot.current(start + Duration::from_millis(2999)).is_some());
        assert!(slot.current(start + Duration::from_secs(3)).is_none());
    }

    #[test]
    fn test_new_message_overwrites_and_restarts_delay() {
        let start = Instant::now();
        let mut slot = ToastSlot::new(Duration::from_secs(3));

        slot.success("Event added", start);
        let later = start + Duration::from_secs(2);
        slot.error("Failed to save events", later);

        let at_first_expiry = start + Duration::from_secs(3);
        let toast = slot.current(at_first_expiry).unwrap();
        assert_eq!(toast.message, "Failed to save events");
        assert_eq!(toast.level, ToastLevel::Error);
        assert_eq!(toast.remaining(at_first_expiry), Duration::from_secs(2));
        assert!(slot.current(later + Duration::from_secs(3)).is_none());
    }

    #[test]
    fn test_cleanup_clears_expired_only() {
        let start = Instant::now();
        let mut slot = ToastSlot::new(Duration::from_secs(3));
        slot.info("Hello", start);

        slot.cleanup(start + Duration::from_secs(1));
        assert!(slot.current(start + Duration::from_secs(1)).is_some());

        slot.cleanup(start + Duration::from_secs(4));
        assert!(slot.current(start).is_none());
    }

    #[test]
    fn test_dismiss() {
        let start = Instant::now();
        let mut slot = ToastSlot::default();
        slot.warning("Heads up", start);
        slot.dismiss();
        assert!(slot.current(start).is_none());
        assert_eq!(slot.duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_level_icons() {
        assert_eq!(ToastLevel::Success.icon(), "✓");
        assert_eq!(ToastLevel::Error.icon(), "✗");
    }
}
