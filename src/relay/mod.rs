//! Message relay layer.
//!
//! This module replaces a server-side mail handler with an external relay
//! (an EmailJS-compatible HTTP endpoint). It is split in two so it fits both an
//! event-driven host and a plain async caller:
//!
//! - [`request`]: Relay identifiers, wire payload, and the prepared [`RelayRequest`]
//! - [`service`]: [`SubmissionService`] (prepare, classify, async submit) and the
//!   [`SubmissionError`] taxonomy
//!
//! Under Zellij the request is sent with `web_request` and the reply returns as
//! a separate event, so the app layer calls [`SubmissionService::prepare`] and
//! [`SubmissionService::classify`] on either side of that round trip. Callers
//! with an async runtime use [`SubmissionService::submit`] with a
//! [`RelayTransport`].

pub mod request;
pub mod service;

pub use request::{RelayConfig, RelayPayload, RelayRequest, TemplateParams, TraceContext, RELAY_ENDPOINT};
pub use service::{
    RelayReply, RelayTransport, SubmissionError, SubmissionOutcome, SubmissionService,
    REAUTH_REQUIRED_STATUS, TRANSPORT_FAILURE_STATUS, WEB_ACCESS_DENIED,
};
