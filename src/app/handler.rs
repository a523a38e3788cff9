//! Event handling and state transition logic.
//!
//! Every interaction with the form arrives as an [`Event`]: key intents mapped
//! by the plugin shim, explicit field intents from embedders, and completions of
//! the side effects the handler requested earlier (relay replies, fired dismiss
//! timers). [`handle_event`] applies the event to [`AppState`] and returns
//! whether to re-render plus the actions to execute.
//!
//! # Event Types
//!
//! - **Field intents**: `UpdateField`, `BlurField`, `Char`, `Backspace`, `Newline`
//! - **Focus**: `FocusNext`, `FocusPrevious` (both blur the field being left)
//! - **Submission**: `Submit`, `RelayCompleted`
//! - **Toast**: `DismissToast`, `DismissTimerElapsed`, `Escape`
//! - **Presentation**: `ToggleTheme`, `ToggleMenu`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use zcontact::app::{AppState, Event, handle_event};
//! use zcontact::domain::Field;
//!
//! let mut state = AppState::default();
//! let (render, actions) = handle_event(&mut state, &Event::BlurField(Field::Name))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! assert_eq!(state.form.errors.get(Field::Name), Some("Name is required"));
//! # Ok::<(), zcontact::ContactError>(())
//! ```

use super::actions::Action;
use super::state::AppState;
use super::toast::DismissToken;
use crate::domain::{Field, Result};
use crate::relay::RelayReply;

/// Events triggered by user input or by completed side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the value of a field.
    UpdateField {
        /// Field being edited.
        field: Field,
        /// New raw value.
        value: String,
    },
    /// Validates a field after it loses focus.
    BlurField(Field),
    /// Appends a character to the focused field.
    Char(char),
    /// Removes the last character of the focused field.
    Backspace,
    /// Inserts a line break into the message field.
    Newline,

    /// Moves focus to the next field.
    FocusNext,
    /// Moves focus to the previous field.
    FocusPrevious,

    /// Submits the form.
    Submit,
    /// Reports the result of a previously requested relay send.
    RelayCompleted(RelayReply),

    /// Dismisses the current toast.
    DismissToast,
    /// Reports that a previously armed dismiss timer fired.
    DismissTimerElapsed(DismissToken),
    /// Dismisses the toast if one is showing, otherwise closes the pane.
    Escape,

    /// Flips between the dark and light palettes.
    ToggleTheme,
    /// Opens or closes the contact info panel.
    ToggleMenu,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions must be executed in order.
///
/// # Errors
///
/// Reserved for failures in state plumbing; the form workflow itself reports
/// problems through toasts and inline errors rather than `Err`.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::UpdateField { field, value } => {
            state.form.update_field(*field, value.clone());
            Ok((true, vec![]))
        }
        Event::BlurField(field) => {
            state.form.blur_field(*field);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            state.form.push_char(state.focus, *c);
            tracing::trace!(field = %state.focus, char = %c, "field edited");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            let changed = state.form.pop_char(state.focus);
            Ok((changed, vec![]))
        }
        Event::Newline => {
            if state.focus != Field::Message {
                tracing::debug!(field = %state.focus, "newline outside message field, ignoring");
                return Ok((false, vec![]));
            }
            state.form.push_char(Field::Message, '\n');
            Ok((true, vec![]))
        }
        Event::FocusNext => {
            state.move_focus(state.focus.next());
            Ok((true, vec![]))
        }
        Event::FocusPrevious => {
            state.move_focus(state.focus.previous());
            Ok((true, vec![]))
        }
        Event::Submit => {
            if state.form.is_submitting() {
                tracing::debug!("submit while sending, ignoring");
                return Ok((false, vec![]));
            }
            let actions = state.submit();
            Ok((true, actions))
        }
        Event::RelayCompleted(reply) => {
            let was_submitting = state.form.is_submitting();
            let actions = state.relay_completed(reply);
            Ok((was_submitting, actions))
        }
        Event::DismissToast => Ok((state.dismiss_toast(), vec![])),
        Event::DismissTimerElapsed(token) => Ok((state.dismiss_timer_elapsed(*token), vec![])),
        Event::Escape => {
            if state.dismiss_toast() {
                Ok((true, vec![]))
            } else {
                Ok((false, vec![Action::CloseFocus]))
            }
        }
        Event::ToggleTheme => {
            state.toggle_theme();
            Ok((true, vec![]))
        }
        Event::ToggleMenu => {
            state.menu = state.menu.toggled();
            tracing::debug!(menu = ?state.menu, "info panel toggled");
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}
