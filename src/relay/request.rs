//! Relay request construction.
//!
//! Builds the EmailJS-compatible POST request from the configured identifiers and
//! the visitor's form values. The request is transport-neutral: the plugin shim
//! hands it to Zellij's `web_request`, tests hand it to an in-memory transport.

use crate::domain::{FormValues, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed relay endpoint for message delivery.
pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Recipient name injected into every template.
pub const RECIPIENT_NAME: &str = "Site Owner";

/// Identifiers required by the relay service.
///
/// Each identifier is optional at parse time; [`RelayConfig::missing`] reports
/// which ones are absent so the submission can fail with a configuration error
/// instead of sending a request that the relay would reject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayConfig {
    /// EmailJS service identifier.
    pub service_id: Option<String>,

    /// EmailJS template identifier.
    pub template_id: Option<String>,

    /// EmailJS public key, sent as `user_id`.
    pub public_key: Option<String>,
}

impl RelayConfig {
    /// Names of required identifiers that are absent or blank.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }
}

/// Template variables forwarded to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
}

/// JSON body of a relay send request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPayload {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

impl RelayPayload {
    /// Builds the payload from already-checked identifiers and the form values.
    ///
    /// Replies go to the sender, so `reply_to` mirrors `from_email`.
    #[must_use]
    pub fn new(service_id: &str, template_id: &str, user_id: &str, values: &FormValues) -> Self {
        Self {
            service_id: service_id.to_string(),
            template_id: template_id.to_string(),
            user_id: user_id.to_string(),
            template_params: TemplateParams {
                from_name: values.name.clone(),
                from_email: values.email.clone(),
                message: values.message.clone(),
                to_name: RECIPIENT_NAME.to_string(),
                reply_to: values.email.clone(),
            },
        }
    }
}

/// Distributed tracing context carried alongside a relay request.
///
/// Captures the current trace and span IDs from OpenTelemetry so the span that
/// handles the relay reply can be tied back to the span that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the submitting span.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Context key for the trace ID in a web request context map.
    pub const TRACE_ID_KEY: &'static str = "trace_id";

    /// Context key for the parent span ID in a web request context map.
    pub const PARENT_SPAN_ID_KEY: &'static str = "parent_span_id";

    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span is not
    /// sampled.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            tracing::trace!("span context is not valid, relay request carries no trace context");
            None
        }
    }

    /// Reads a trace context back out of a web request context map.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        Some(Self {
            trace_id: context.get(Self::TRACE_ID_KEY)?.clone(),
            parent_span_id: context.get(Self::PARENT_SPAN_ID_KEY)?.clone(),
        })
    }
}

/// A fully prepared relay request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    /// Target URL.
    pub endpoint: String,

    /// Request body before JSON encoding.
    pub payload: RelayPayload,

    /// Trace context of the submitting span, if tracing is active.
    pub trace_context: Option<TraceContext>,
}

impl RelayRequest {
    /// Context key marking a web request as a contact form submission.
    pub const SUBMISSION_KEY: &'static str = "zcontact";

    /// Creates a request to [`RELAY_ENDPOINT`] with the current trace context.
    #[must_use]
    pub fn new(payload: RelayPayload) -> Self {
        Self {
            endpoint: RELAY_ENDPOINT.to_string(),
            payload,
            trace_context: TraceContext::from_current(),
        }
    }

    /// HTTP headers to send with the request.
    #[must_use]
    pub fn headers(&self) -> BTreeMap<String, String> {
        BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())])
    }

    /// JSON-encoded request body.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Serialization`](crate::ContactError::Serialization)
    /// if the payload cannot be encoded.
    pub fn body(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&self.payload)?)
    }

    /// Correlation context handed back by the host with the response.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::from([(Self::SUBMISSION_KEY.to_string(), "submission".to_string())]);
        if let Some(trace) = &self.trace_context {
            context.insert(TraceContext::TRACE_ID_KEY.to_string(), trace.trace_id.clone());
            context.insert(TraceContext::PARENT_SPAN_ID_KEY.to_string(), trace.parent_span_id.clone());
        }
        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> RelayConfig {
        RelayConfig {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("pk_123".to_string()),
        }
    }

    #[test]
    fn missing_lists_absent_and_blank_identifiers() {
        assert!(configured().missing().is_empty());

        let config = RelayConfig {
            template_id: Some("   ".to_string()),
            public_key: None,
            ..configured()
        };
        assert_eq!(config.missing(), vec!["template_id", "public_key"]);
        assert_eq!(RelayConfig::default().missing().len(), 3);
    }

    #[test]
    fn body_has_relay_wire_shape() {
        let values = FormValues::new("Ada", "ada@example.com", "Hello from the terminal");
        let request = RelayRequest::new(RelayPayload::new("service_abc", "template_xyz", "pk_123", &values));

        let body: serde_json::Value = serde_json::from_slice(&request.body().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello from the terminal",
                    "to_name": RECIPIENT_NAME,
                    "reply_to": "ada@example.com",
                }
            })
        );
        assert_eq!(request.endpoint, RELAY_ENDPOINT);
        assert_eq!(
            request.headers().get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn context_round_trips_trace_ids() {
        let mut request = RelayRequest::new(RelayPayload::new("s", "t", "k", &FormValues::default()));
        request.trace_context = Some(TraceContext {
            trace_id: "0af7651916cd43dd8448eb211c80319c".to_string(),
            parent_span_id: "b7ad6b7169203331".to_string(),
        });

        let context = request.context();
        assert!(context.contains_key(RelayRequest::SUBMISSION_KEY));
        assert_eq!(TraceContext::from_context(&context), request.trace_context);
    }
}
