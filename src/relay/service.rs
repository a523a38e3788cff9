//! Submission service and outcome classification.
//!
//! [`SubmissionService`] owns the relay identifiers. It turns form values into a
//! [`RelayRequest`] (failing early when identifiers are missing) and classifies
//! whatever came back into a [`SubmissionOutcome`]. Nothing here panics or returns
//! a crate error: every failure path ends as a [`SubmissionError`].

use super::request::{RelayConfig, RelayPayload, RelayRequest};
use crate::domain::FormValues;
use futures_util::future::BoxFuture;
use std::collections::BTreeMap;
use thiserror::Error;

/// HTTP status the relay uses when the linked email account must be re-authorised.
pub const REAUTH_REQUIRED_STATUS: u16 = 412;

/// Status Zellij reports, with no response headers, for a request that never
/// produced an HTTP response.
pub const TRANSPORT_FAILURE_STATUS: u16 = 400;

/// Failure text used when the host refuses network access to the plugin.
pub const WEB_ACCESS_DENIED: &str = "web access permission not granted";

/// Classified submission failures.
///
/// `Display` is the diagnostic form written to logs; [`SubmissionError::user_message`]
/// is the text shown in the error toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Required relay identifiers are missing. No request was sent.
    #[error("relay is not configured, missing: {}", missing.join(", "))]
    Configuration {
        /// Names of the absent identifiers.
        missing: Vec<&'static str>,
    },

    /// The relay answered with a non-2xx status other than 412.
    #[error("relay responded with HTTP {status}")]
    Http {
        /// Response status code.
        status: u16,
    },

    /// The relay's email account connection has expired (HTTP 412).
    #[error("relay account authorisation expired (HTTP 412)")]
    ReauthRequired,

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
}

impl SubmissionError {
    /// Human-readable toast text for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { .. } => {
                "Email service is not configured. Please try again later.".to_string()
            }
            Self::Http { status } => {
                format!("Failed to send message (HTTP {status}). Please try again.")
            }
            Self::ReauthRequired => {
                "Email service needs to be reconnected. Please reconnect the email account and try again."
                    .to_string()
            }
            Self::Network(_) => "Failed to send message. Please try again.".to_string(),
        }
    }
}

/// Result of one submission attempt.
pub type SubmissionOutcome = std::result::Result<(), SubmissionError>;

/// What the transport observed for a relay request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayReply {
    /// An HTTP response arrived.
    Response {
        /// Response status code.
        status: u16,
        /// Response body, lossily decoded, kept for diagnostics.
        body: String,
    },

    /// The request failed below HTTP (DNS, TLS, connectivity, encoding).
    TransportFailed {
        /// Description of the underlying failure.
        message: String,
    },
}

impl RelayReply {
    /// Interprets a host web request result.
    ///
    /// A status of 400 with an empty header map is the host's report of a
    /// request that failed below HTTP; its body holds the error text. A real
    /// 400 response always carries headers.
    #[must_use]
    pub fn from_web_result(status: u16, headers: &BTreeMap<String, String>, body: &[u8]) -> Self {
        let body = String::from_utf8_lossy(body).into_owned();
        if status == TRANSPORT_FAILURE_STATUS && headers.is_empty() {
            Self::TransportFailed { message: body }
        } else {
            Self::Response { status, body }
        }
    }

    /// Reply for a request the host will not send because the plugin lacks
    /// network permission.
    #[must_use]
    pub fn web_access_denied() -> Self {
        Self::TransportFailed {
            message: WEB_ACCESS_DENIED.to_string(),
        }
    }
}

/// Sends relay requests.
///
/// Implementations must report every failure as
/// [`RelayReply::TransportFailed`] rather than panicking.
pub trait RelayTransport {
    /// Sends `request` and resolves once the relay answered or the attempt failed.
    fn send<'a>(&'a self, request: &'a RelayRequest) -> BoxFuture<'a, RelayReply>;
}

/// Performs contact form submissions against the relay.
#[derive(Debug, Clone, Default)]
pub struct SubmissionService {
    config: RelayConfig,
}

impl SubmissionService {
    #[must_use]
    pub const fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Builds the relay request for `values`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Configuration`] when any required identifier is
    /// absent or blank.
    pub fn prepare(&self, values: &FormValues) -> Result<RelayRequest, SubmissionError> {
        let missing = self.config.missing();
        let (Some(service_id), Some(template_id), Some(public_key), true) = (
            self.config.service_id.as_deref(),
            self.config.template_id.as_deref(),
            self.config.public_key.as_deref(),
            missing.is_empty(),
        ) else {
            tracing::warn!(missing = ?missing, "relay identifiers missing, not sending");
            return Err(SubmissionError::Configuration { missing });
        };

        let payload = RelayPayload::new(service_id, template_id, public_key, values);
        Ok(RelayRequest::new(payload))
    }

    /// Maps a transport observation onto a submission outcome.
    ///
    /// # Errors
    ///
    /// Returns the classified [`SubmissionError`] for anything but a 2xx response.
    pub fn classify(reply: &RelayReply) -> SubmissionOutcome {
        match reply {
            RelayReply::Response { status, .. } if (200..300).contains(status) => {
                tracing::debug!(status = status, "relay accepted message");
                Ok(())
            }
            RelayReply::Response { status, body } if *status == REAUTH_REQUIRED_STATUS => {
                tracing::warn!(status = status, body = %body, "relay requires account reconnection");
                Err(SubmissionError::ReauthRequired)
            }
            RelayReply::Response { status, body } => {
                tracing::warn!(status = status, body = %body, "relay rejected message");
                Err(SubmissionError::Http { status: *status })
            }
            RelayReply::TransportFailed { message } => {
                tracing::warn!(error = %message, "relay request failed before a response");
                Err(SubmissionError::Network(message.clone()))
            }
        }
    }

    /// Prepares, sends, and classifies one submission.
    ///
    /// No request reaches `transport` when identifiers are missing.
    ///
    /// # Errors
    ///
    /// Returns the classified [`SubmissionError`] on any failure.
    pub async fn submit<T>(&self, transport: &T, values: &FormValues) -> SubmissionOutcome
    where
        T: RelayTransport + ?Sized,
    {
        let request = self.prepare(values)?;
        let reply = transport.send(&request).await;
        Self::classify(&reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::FutureExt;
    use std::sync::Mutex;

    struct CannedTransport {
        reply: RelayReply,
        sent: Mutex<Vec<RelayRequest>>,
    }

    impl CannedTransport {
        fn new(reply: RelayReply) -> Self {
            Self {
                reply,
                sent: Mutex::new(Vec::new()),
            }
        }

        fn responding(status: u16) -> Self {
            Self::new(RelayReply::Response {
                status,
                body: String::new(),
            })
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    impl RelayTransport for CannedTransport {
        fn send<'a>(&'a self, request: &'a RelayRequest) -> BoxFuture<'a, RelayReply> {
            self.sent.lock().unwrap().push(request.clone());
            let reply = self.reply.clone();
            async move { reply }.boxed()
        }
    }

    fn service() -> SubmissionService {
        SubmissionService::new(RelayConfig {
            service_id: Some("service_abc".to_string()),
            template_id: Some("template_xyz".to_string()),
            public_key: Some("pk_123".to_string()),
        })
    }

    fn values() -> FormValues {
        FormValues::new("Ada", "ada@example.com", "Hello from the terminal")
    }

    fn run(service: &SubmissionService, transport: &CannedTransport) -> SubmissionOutcome {
        service
            .submit(transport, &values())
            .now_or_never()
            .expect("canned transport resolves immediately")
    }

    #[test]
    fn success_statuses_resolve_ok() {
        for status in [200, 201, 204, 299] {
            let transport = CannedTransport::responding(status);
            assert_eq!(run(&service(), &transport), Ok(()));
            assert_eq!(transport.sent_count(), 1);
        }
    }

    #[test]
    fn status_412_requires_reconnection() {
        let transport = CannedTransport::responding(412);
        let error = run(&service(), &transport).unwrap_err();
        assert_eq!(error, SubmissionError::ReauthRequired);
        assert!(error.user_message().contains("reconnect"));
    }

    #[test]
    fn other_statuses_carry_the_code() {
        for status in [400, 404, 500, 302] {
            let transport = CannedTransport::responding(status);
            let error = run(&service(), &transport).unwrap_err();
            assert_eq!(error, SubmissionError::Http { status });
            assert!(error.user_message().contains(&status.to_string()));
        }
    }

    #[test]
    fn transport_failure_becomes_network_error() {
        let transport = CannedTransport::new(RelayReply::TransportFailed {
            message: "dns error: no such host".to_string(),
        });
        let error = run(&service(), &transport).unwrap_err();
        assert_eq!(error, SubmissionError::Network("dns error: no such host".to_string()));
        assert_eq!(error.user_message(), "Failed to send message. Please try again.");
    }

    #[test]
    fn missing_identifier_skips_the_network() {
        let unconfigured = SubmissionService::new(RelayConfig {
            public_key: None,
            ..service().config().clone()
        });
        let transport = CannedTransport::responding(200);

        let error = run(&unconfigured, &transport).unwrap_err();
        assert_eq!(
            error,
            SubmissionError::Configuration {
                missing: vec!["public_key"]
            }
        );
        assert_eq!(transport.sent_count(), 0);
    }

    #[test]
    fn sent_request_carries_form_values() {
        let transport = CannedTransport::responding(200);
        run(&service(), &transport).unwrap();

        let sent = transport.sent.lock().unwrap();
        let params = &sent[0].payload.template_params;
        assert_eq!(params.from_name, "Ada");
        assert_eq!(params.reply_to, "ada@example.com");
        assert_eq!(sent[0].payload.user_id, "pk_123");
    }

    fn headers() -> BTreeMap<String, String> {
        BTreeMap::from([("content-type".to_string(), "application/json".to_string())])
    }

    #[test]
    fn web_result_400_with_headers_is_an_http_error() {
        let reply = RelayReply::from_web_result(400, &headers(), b"The user_id parameter is required");
        assert_eq!(
            reply,
            RelayReply::Response {
                status: 400,
                body: "The user_id parameter is required".to_string()
            }
        );
        assert_eq!(SubmissionService::classify(&reply), Err(SubmissionError::Http { status: 400 }));
    }

    #[test]
    fn web_result_400_without_headers_is_a_network_error() {
        let reply = RelayReply::from_web_result(400, &BTreeMap::new(), b"error sending request: dns error");
        assert_eq!(
            SubmissionService::classify(&reply),
            Err(SubmissionError::Network("error sending request: dns error".to_string()))
        );
    }

    #[test]
    fn web_result_412_and_2xx() {
        let reauth = RelayReply::from_web_result(412, &headers(), b"");
        assert_eq!(SubmissionService::classify(&reauth), Err(SubmissionError::ReauthRequired));

        let ok = RelayReply::from_web_result(200, &headers(), b"OK");
        assert_eq!(SubmissionService::classify(&ok), Ok(()));

        let headerless_ok = RelayReply::from_web_result(200, &BTreeMap::new(), b"OK");
        assert_eq!(SubmissionService::classify(&headerless_ok), Ok(()));
    }

    #[test]
    fn denied_web_access_is_a_network_error() {
        assert_eq!(
            SubmissionService::classify(&RelayReply::web_access_denied()),
            Err(SubmissionError::Network(WEB_ACCESS_DENIED.to_string()))
        );
    }
}
