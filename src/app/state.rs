//! Application state and the submission workflow.
//!
//! [`AppState`] is the top-level coordinator. It owns the form, the toast slot,
//! the submission service, and the presentation flags (focus, theme, info
//! panel), and it implements the multi-step submit workflow that ties them
//! together. Rendering reads the form only through
//! [`AppState::compute_viewmodel`], plus the active palette in `theme`.
//!
//! # Submit Workflow
//!
//! ```text
//! submit ─► already submitting? ── yes ─► ignored
//!              │ no
//!              ▼
//!          validate_all ── invalid ─► error toast, values kept
//!              │ valid
//!              ▼
//!          gate closed, loading toast
//!              │
//!          prepare ── missing ids ─► complete(ConfigurationError)
//!              │ ok
//!              ▼
//!          SendRelayRequest ··· RelayCompleted ─► classify ─► complete(outcome)
//!
//! complete(Ok)  ─► gate open, values + errors reset, success toast
//! complete(Err) ─► gate open, values kept, error toast
//! ```

use super::actions::Action;
use super::form::FormState;
use super::modes::{MenuState, ThemeMode};
use super::toast::{DismissToken, Toast, ToastManager};
use crate::domain::{ContactDetails, Field};
use crate::relay::{RelayReply, SubmissionError, SubmissionOutcome, SubmissionService};
use crate::ui::helpers::field_text_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    FieldView, FooterInfo, FormViewModel, HeaderInfo, InfoPanel, SubmitButton, ToastView,
};

/// Toast shown while the relay request is in flight.
pub const SENDING_MESSAGE: &str = "Sending message...";

/// Toast shown after the relay accepted the message.
pub const SENT_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// Toast shown when submit is attempted with invalid fields.
pub const FIX_ERRORS_MESSAGE: &str = "Please fix the highlighted fields before sending.";

/// Visible rows of the message input.
const MAX_MESSAGE_ROWS: usize = 5;

/// Rows used by everything except the message input body.
const CHROME_ROWS: usize = 17;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Field values, inline errors, and the submission gate.
    pub form: FormState,

    /// Single toast slot.
    pub toast: ToastManager,

    /// Relay submission service built from configuration.
    pub relay: SubmissionService,

    /// Field receiving typed characters.
    pub focus: Field,

    /// Active colour scheme.
    pub theme_mode: ThemeMode,

    /// Palette for `theme_mode`.
    pub theme: Theme,

    /// Contact info panel visibility.
    pub menu: MenuState,

    /// Details listed in the info panel; the email is also offered when
    /// sending fails.
    pub contact: ContactDetails,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SubmissionService::default(), ThemeMode::default(), ContactDetails::default())
    }
}

impl AppState {
    /// Creates state with an empty form, no toast, and focus on `Name`.
    #[must_use]
    pub fn new(relay: SubmissionService, theme_mode: ThemeMode, contact: ContactDetails) -> Self {
        Self {
            form: FormState::new(),
            toast: ToastManager::new(),
            relay,
            focus: Field::Name,
            theme_mode,
            theme: Theme::for_mode(theme_mode),
            menu: MenuState::Closed,
            contact,
        }
    }

    /// Moves focus to `next`, validating the field being left.
    pub fn move_focus(&mut self, next: Field) {
        if next != self.focus {
            self.form.blur_field(self.focus);
            self.focus = next;
        }
    }

    /// Switches between the dark and light palettes.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        self.theme = Theme::for_mode(self.theme_mode);
        tracing::debug!(theme = ?self.theme_mode, "theme toggled");
    }

    /// Shows `toast` and returns the timer action it needs, if any.
    pub fn show_toast(&mut self, toast: Toast) -> Vec<Action> {
        self.toast
            .show(toast)
            .map(|schedule| Action::ScheduleDismiss {
                token: schedule.token,
                after: schedule.after,
            })
            .into_iter()
            .collect()
    }

    /// Clears the toast. Returns whether one was showing.
    pub fn dismiss_toast(&mut self) -> bool {
        self.toast.dismiss()
    }

    /// Forwards a fired dismiss timer to the toast manager.
    pub fn dismiss_timer_elapsed(&mut self, token: DismissToken) -> bool {
        self.toast.timer_elapsed(token)
    }

    /// Starts a submission.
    ///
    /// Returns no actions when a submission is already in flight. Otherwise the
    /// actions are the toast timer (for validation and configuration failures)
    /// or the relay request to send.
    pub fn submit(&mut self) -> Vec<Action> {
        if self.form.is_submitting() {
            tracing::debug!("submission already in flight, ignoring submit");
            return vec![];
        }

        if !self.form.validate_all() {
            let invalid: Vec<&str> = self.form.errors.iter().map(|error| error.field.as_str()).collect();
            tracing::debug!(invalid_fields = ?invalid, "submit blocked by validation");
            return self.show_toast(Toast::error(FIX_ERRORS_MESSAGE));
        }

        self.form.begin_submission();
        let mut actions = self.show_toast(Toast::loading(SENDING_MESSAGE));

        match self.relay.prepare(&self.form.values) {
            Ok(request) => {
                tracing::debug!(endpoint = %request.endpoint, "relay request prepared");
                actions.push(Action::SendRelayRequest(request));
                actions
            }
            Err(error) => self.complete_submission(Err(error)),
        }
    }

    /// Applies the relay's answer to an in-flight submission.
    ///
    /// Replies that arrive with no submission in flight are ignored.
    pub fn relay_completed(&mut self, reply: &RelayReply) -> Vec<Action> {
        if !self.form.is_submitting() {
            tracing::debug!(reply = ?reply, "relay reply with no submission in flight, ignoring");
            return vec![];
        }
        self.complete_submission(SubmissionService::classify(reply))
    }

    /// Ends the in-flight submission with `outcome`.
    ///
    /// Success resets the form; any failure keeps the values for another try.
    pub fn complete_submission(&mut self, outcome: SubmissionOutcome) -> Vec<Action> {
        self.form.end_submission();

        match outcome {
            Ok(()) => {
                tracing::debug!("submission succeeded, resetting form");
                self.form.reset();
                self.focus = Field::Name;
                self.show_toast(Toast::success(SENT_MESSAGE))
            }
            Err(error) => {
                tracing::warn!(error = %error, "submission failed");
                let message = self.failure_message(&error);
                self.show_toast(Toast::error(message))
            }
        }
    }

    fn failure_message(&self, error: &SubmissionError) -> String {
        let message = error.user_message();
        match (error, &self.contact.email) {
            (SubmissionError::Network(_), Some(email)) => {
                format!("{message} You can also email {email} directly.")
            }
            _ => message,
        }
    }

    /// Computes the view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> FormViewModel {
        let input_width = field_text_width(cols);
        let message_rows = rows.saturating_sub(CHROME_ROWS).clamp(1, MAX_MESSAGE_ROWS);

        let fields = Field::ALL
            .iter()
            .map(|&field| {
                let visible_rows = if field == Field::Message { message_rows } else { 1 };
                self.compute_field_view(field, input_width, visible_rows)
            })
            .collect();

        FormViewModel {
            header: HeaderInfo {
                title: " Get In Touch ".to_string(),
                subtitle: "Send me a message".to_string(),
            },
            fields,
            submit: self.compute_submit_button(),
            toast: self.toast.current().map(|toast| ToastView {
                message: toast.message.clone(),
                kind: toast.kind,
            }),
            info_panel: self.compute_info_panel(),
            footer: self.compute_footer(),
        }
    }

    fn compute_field_view(&self, field: Field, width: usize, visible_rows: usize) -> FieldView {
        let value = self.form.values.get(field);
        let is_placeholder = value.is_empty();

        let lines = if is_placeholder {
            vec![field.placeholder().to_string()]
        } else {
            let all: Vec<&str> = value.split('\n').collect();
            let start = all.len().saturating_sub(visible_rows);
            all[start..]
                .iter()
                .map(|line| Self::tail_truncate(line, width))
                .collect()
        };

        FieldView {
            label: field.label(),
            lines,
            rows: visible_rows,
            is_placeholder,
            is_focused: field == self.focus,
            error: self.form.errors.get(field).map(str::to_string),
        }
    }

    fn compute_submit_button(&self) -> SubmitButton {
        if self.form.is_submitting() {
            SubmitButton {
                label: "Sending...",
                enabled: false,
            }
        } else {
            SubmitButton {
                label: "Send Message",
                enabled: true,
            }
        }
    }

    fn compute_info_panel(&self) -> Option<InfoPanel> {
        if self.menu == MenuState::Closed {
            return None;
        }

        let mut lines = vec![
            "Let's connect".to_string(),
            String::new(),
            "I'm always open to discussing new projects,".to_string(),
            "creative ideas, or opportunities. Feel free to reach out!".to_string(),
            String::new(),
        ];
        let entries = self.contact.entries();
        if entries.is_empty() {
            lines.push("Use the form to get in touch.".to_string());
        }
        lines.extend(entries.into_iter().map(|(label, value)| format!("{label}: {value}")));
        lines.push(format!("Theme: {:?}", self.theme_mode));

        Some(InfoPanel { lines })
    }

    fn compute_footer(&self) -> FooterInfo {
        let submit_hint = if self.focus == Field::Message {
            "Ctrl+s: send  Enter: newline"
        } else {
            "Enter: send"
        };
        let escape_hint = if self.toast.is_idle() { "Esc: close" } else { "Esc: dismiss" };

        FooterInfo {
            keybindings: format!(
                "Tab/Shift+Tab: field  {submit_hint}  {escape_hint}  Ctrl+t: theme  F1: info"
            ),
        }
    }

    /// Keeps the last `max_width` characters, prefixed with `...` when cut.
    fn tail_truncate(text: &str, max_width: usize) -> String {
        let count = text.chars().count();
        if count <= max_width {
            return text.to_string();
        }
        let keep = max_width.saturating_sub(3);
        let tail: String = text.chars().skip(count - keep).collect();
        format!("...{tail}")
    }
}
