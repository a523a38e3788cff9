//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zcontact library and the Zellij plugin
//! system. It translates host events into library [`Event`]s and executes the
//! returned [`Action`]s with host calls; all form behavior lives in the library.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, `Timer`,
//!    `PermissionRequestResult`
//! 3. **Update**: Map events, delegate to `handle_event`, execute actions
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(..)` → field edits, focus moves, submit, toggles (see keybindings)
//! - `WebRequestResult` → `Event::RelayCompleted` (only for submission requests)
//! - `Timer` → `Event::DismissTimerElapsed` for the oldest armed token
//!
//! # Keybindings
//!
//! - Printable characters / `Backspace`: Edit the focused field
//! - `Enter`: Newline in the message field, submit elsewhere
//! - `Ctrl+s`: Submit
//! - `Tab`/`Down`, `Shift+Tab`/`Up`: Move focus
//! - `Esc`: Dismiss the toast, or close the pane when none is showing
//! - `Ctrl+t`: Toggle dark/light theme
//! - `F1`: Toggle the contact info panel

#![allow(clippy::multiple_crate_versions)]

use std::collections::{BTreeMap, VecDeque};
use zellij_tile::prelude::*;

use zcontact::app::DismissToken;
use zcontact::domain::Field;
use zcontact::relay::{RelayReply, RelayRequest, TraceContext};
use zcontact::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with the host-side bookkeeping the library
/// cannot do itself.
#[derive(Default)]
struct State {
    /// Core application state from library layer.
    app: zcontact::AppState,

    /// Dismiss tokens in the order their timers were armed.
    ///
    /// Zellij timers cannot be cancelled and carry no payload; every dismiss
    /// timer uses the same delay, so they fire in arming order.
    armed_timers: VecDeque<DismissToken>,

    /// Whether the host granted `WebAccess`.
    ///
    /// The host silently drops `web_request` without it, so no reply would ever
    /// arrive for the submission.
    web_access_granted: bool,
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess` to reach the relay endpoint.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = zcontact::observability::init_tracing(&config) {
            eprintln!("zcontact: tracing disabled: {e}");
        }

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            theme = ?config.theme,
            contact_details = config.contact.entries().len(),
            "parsed configuration"
        );
        self.app = zcontact::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, headers, body, context) => {
                match Self::map_web_request_result(status, &headers, &body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => match self.armed_timers.pop_front() {
                Some(token) => Event::DismissTimerElapsed(token),
                None => {
                    tracing::debug!("timer fired with no armed dismiss token");
                    return false;
                }
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.handle_permission_result(status);
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        zcontact::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs `event` through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                let mut render = should_render;
                for action in actions {
                    render |= self.execute_action(action);
                }
                render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('s') => Some(Event::Submit),
                BareKey::Char('t') => Some(Event::ToggleTheme),
                _ => None,
            };
        }

        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::FocusPrevious);
        }

        Some(match key.bare_key {
            BareKey::Tab | BareKey::Down => Event::FocusNext,
            BareKey::Up => Event::FocusPrevious,
            BareKey::Enter if self.app.focus == Field::Message => Event::Newline,
            BareKey::Enter => Event::Submit,
            BareKey::Esc => Event::Escape,
            BareKey::F(1) => Event::ToggleMenu,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Maps a finished web request to a relay reply.
    ///
    /// Requests not issued for a submission are ignored.
    fn map_web_request_result(
        status: u16,
        headers: &BTreeMap<String, String>,
        body: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if !context.contains_key(RelayRequest::SUBMISSION_KEY) {
            tracing::debug!(status, "ignoring web request result without submission marker");
            return None;
        }

        if let Some(trace) = TraceContext::from_context(context) {
            tracing::debug!(
                trace_id = %trace.trace_id,
                parent_span_id = %trace.parent_span_id,
                status,
                "relay reply received"
            );
        }

        Some(Event::RelayCompleted(RelayReply::from_web_result(status, headers, body)))
    }

    fn handle_permission_result(&mut self, status: PermissionStatus) {
        self.web_access_granted = matches!(status, PermissionStatus::Granted);
        if self.web_access_granted {
            tracing::debug!("web access granted");
        } else {
            tracing::warn!("web access denied - submissions will fail without reaching the relay");
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// Returns `true` when executing the action changed state that needs a
    /// re-render (an unsendable request completes the submission right away).
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::CloseFocus => {
                hide_self();
                false
            }
            Action::ScheduleDismiss { token, after } => {
                self.armed_timers.push_back(token);
                set_timeout(after.as_secs_f64());
                false
            }
            Action::SendRelayRequest(_) if !self.web_access_granted => {
                tracing::warn!("relay request without web access, failing submission");
                self.dispatch(&Event::RelayCompleted(RelayReply::web_access_denied()))
            }
            Action::SendRelayRequest(request) => match request.body() {
                Ok(body) => {
                    web_request(
                        &request.endpoint,
                        HttpVerb::Post,
                        request.headers(),
                        body,
                        request.context(),
                    );
                    false
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to encode relay request");
                    self.dispatch(&Event::RelayCompleted(RelayReply::TransportFailed {
                        message: e.to_string(),
                    }))
                }
            },
        }
    }
}
