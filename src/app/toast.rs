//! Single-slot toast notifications with cancellable auto-dismiss.
//!
//! [`ToastManager`] is a two-state machine: `Idle` (no toast) or `Showing(toast)`.
//! Success and error toasts dismiss themselves after [`AUTO_DISMISS_DELAY`];
//! loading toasts stay until replaced or dismissed.
//!
//! # Timer Handles
//!
//! The manager never runs a timer itself. [`ToastManager::show`] returns a
//! [`ScheduledDismiss`] for the host to arm, and the host reports expiry back with
//! the same [`DismissToken`]. The manager keeps at most one live token; showing a
//! new toast or dismissing the current one invalidates it, so a timer armed for an
//! older toast can never clear a newer one.
//!
//! ```text
//!            show(loading)            show(success|error) ──► arm token N
//!   Idle ───────────────────► Showing ◄────────────────────┐
//!    ▲                           │  │                       │
//!    │      dismiss()            │  └── show(..) ───────────┘ (token N-1 dead)
//!    ├───────────────────────────┘
//!    │      timer_elapsed(N)
//!    └─────────────────────────── Showing (only when N is the live token)
//! ```

use std::time::Duration;

/// Delay before success and error toasts dismiss themselves.
pub const AUTO_DISMISS_DELAY: Duration = Duration::from_millis(4000);

/// Visual and lifetime category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Work in progress. Never auto-dismissed.
    Loading,
    Success,
    Error,
}

/// A notification shown below the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    #[must_use]
    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Loading,
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
        }
    }

    const fn auto_dismisses(&self) -> bool {
        !matches!(self.kind, ToastKind::Loading)
    }
}

/// Identifies one armed dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DismissToken(u64);

/// A dismiss timer the host must arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledDismiss {
    pub token: DismissToken,
    pub after: Duration,
}

/// Owner of the single toast slot and its dismiss timer.
#[derive(Debug, Clone, Default)]
pub struct ToastManager {
    current: Option<Toast>,
    pending: Option<DismissToken>,
    next_token: u64,
}

impl ToastManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The toast currently showing, or `None` when idle.
    #[must_use]
    pub const fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Token of the armed dismiss timer, if any.
    #[must_use]
    pub const fn pending_timer(&self) -> Option<DismissToken> {
        self.pending
    }

    /// Replaces whatever is showing with `toast`.
    ///
    /// Any pending timer is cancelled first. Returns the timer to arm when the
    /// new toast auto-dismisses.
    pub fn show(&mut self, toast: Toast) -> Option<ScheduledDismiss> {
        if let Some(stale) = self.pending.take() {
            tracing::trace!(token = ?stale, "cancelled pending toast dismiss");
        }

        tracing::debug!(kind = ?toast.kind, message = %toast.message, "showing toast");

        let schedule = if toast.auto_dismisses() {
            let token = DismissToken(self.next_token);
            self.next_token = self.next_token.wrapping_add(1);
            self.pending = Some(token);
            Some(ScheduledDismiss {
                token,
                after: AUTO_DISMISS_DELAY,
            })
        } else {
            None
        };

        self.current = Some(toast);
        schedule
    }

    /// Clears the current toast and cancels its timer.
    ///
    /// Returns `false` when already idle.
    pub fn dismiss(&mut self) -> bool {
        self.pending = None;
        self.current.take().is_some()
    }

    /// Handles expiry of the timer identified by `token`.
    ///
    /// Only the live token clears the toast. Returns whether the toast changed.
    pub fn timer_elapsed(&mut self, token: DismissToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            self.current = None;
            tracing::debug!(token = ?token, "toast auto-dismissed");
            true
        } else {
            tracing::trace!(token = ?token, live = ?self.pending, "ignoring stale dismiss timer");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let toasts = ToastManager::new();
        assert!(toasts.is_idle());
        assert!(toasts.pending_timer().is_none());
    }

    #[test]
    fn loading_toast_arms_no_timer() {
        let mut toasts = ToastManager::new();
        assert!(toasts.show(Toast::loading("Sending message...")).is_none());
        assert_eq!(toasts.current().map(|t| t.kind), Some(ToastKind::Loading));
        assert!(toasts.pending_timer().is_none());
    }

    #[test]
    fn success_and_error_arm_the_fixed_delay() {
        let mut toasts = ToastManager::new();
        for toast in [Toast::success("sent"), Toast::error("failed")] {
            let schedule = toasts.show(toast).expect("auto-dismissing toast");
            assert_eq!(schedule.after, Duration::from_millis(4000));
            assert_eq!(toasts.pending_timer(), Some(schedule.token));
        }
    }

    #[test]
    fn live_timer_clears_the_toast() {
        let mut toasts = ToastManager::new();
        let schedule = toasts.show(Toast::error("failed")).unwrap();
        assert!(toasts.timer_elapsed(schedule.token));
        assert!(toasts.is_idle());
        assert!(toasts.pending_timer().is_none());
    }

    #[test]
    fn replaced_toast_timer_never_clears_the_newer_toast() {
        let mut toasts = ToastManager::new();
        let first = toasts.show(Toast::error("A")).unwrap();
        let second = toasts.show(Toast::success("B")).unwrap();
        assert_ne!(first.token, second.token);

        assert!(!toasts.timer_elapsed(first.token));
        assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("B"));

        assert!(toasts.timer_elapsed(second.token));
        assert!(toasts.is_idle());
    }

    #[test]
    fn loading_replacing_error_cancels_its_timer() {
        let mut toasts = ToastManager::new();
        let error = toasts.show(Toast::error("A")).unwrap();
        toasts.show(Toast::loading("B"));
        assert!(toasts.pending_timer().is_none());
        assert!(!toasts.timer_elapsed(error.token));
        assert_eq!(toasts.current().map(|t| t.kind), Some(ToastKind::Loading));
    }

    #[test]
    fn dismiss_cancels_and_is_idempotent() {
        let mut toasts = ToastManager::new();
        let schedule = toasts.show(Toast::success("sent")).unwrap();
        assert!(toasts.dismiss());
        assert!(!toasts.dismiss());
        assert!(!toasts.timer_elapsed(schedule.token));
        assert!(toasts.is_idle());
    }
}
