//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij. It returns a `Vec<Action>` and the
//! plugin shim executes each one in order: sending the relay request, arming a
//! toast dismiss timer, or hiding the pane.
//!
//! # Example
//!
//! ```rust
//! use zcontact::app::{Action, AppState, Event, handle_event};
//!
//! let mut state = AppState::default();
//! let (_render, actions) = handle_event(&mut state, &Event::CloseFocus)?;
//! assert_eq!(actions, vec![Action::CloseFocus]);
//! # Ok::<(), zcontact::ContactError>(())
//! ```

use super::toast::DismissToken;
use crate::relay::RelayRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Sends a prepared relay request.
    ///
    /// The runtime must eventually answer with
    /// [`Event::RelayCompleted`](crate::app::Event::RelayCompleted), whether the
    /// relay responded or the request failed.
    SendRelayRequest(RelayRequest),

    /// Arms a one-shot toast dismiss timer.
    ///
    /// When it fires the runtime sends
    /// [`Event::DismissTimerElapsed`](crate::app::Event::DismissTimerElapsed) with
    /// the same token. Timers are never cancelled at the host; stale tokens are
    /// ignored by the toast manager.
    ScheduleDismiss {
        /// Handle identifying this timer.
        token: DismissToken,
        /// Delay before the timer fires.
        after: Duration,
    },
}
