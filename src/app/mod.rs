//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain, relay,
//! and UI layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Relay replies / timers ──────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Field values, inline errors, and the submission gate
//! - [`handler`]: Event processing and state transition coordinator
//! - [`modes`]: Theme and info panel flags
//! - [`state`]: Central state container, submit workflow, view model computation
//! - [`toast`]: Single-slot toast manager with cancellable dismiss timers
//!
//! # Example
//!
//! ```rust
//! use zcontact::app::{AppState, Event, handle_event};
//!
//! let mut state = AppState::default();
//! handle_event(&mut state, &Event::Char('J'))?;
//! assert_eq!(state.form.values.name, "J");
//! # Ok::<(), zcontact::ContactError>(())
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;
pub mod toast;


pub use actions::Action;
pub use form::FormState;
pub use handler::{handle_event, Event};
pub use modes::{MenuState, ThemeMode};
pub use state::AppState;
pub use toast::{DismissToken, ScheduledDismiss, Toast, ToastKind, ToastManager, AUTO_DISMISS_DELAY};
