//! HTTP delivery of encoded write requests.

use std::time::Duration;

use surf::http::auth::BasicAuth;
use surf::{Body, Url};

use crate::debug::DEBUG;
use crate::encode;
use crate::error::{debug_error, WriteError};
use crate::series::SampleSeries;

const CONTENT_TYPE: &str = "application/x-protobuf";
const CONTENT_ENCODING: &str = "snappy";
const PROTOCOL_VERSION: &str = "0.1.0";

/// How long to wait for the whole request/response cycle.
/// Override with `RemoteWrite::with_timeout`.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A configured remote write endpoint.
///
/// Owns a pooled HTTP client; construct once and reuse across calls.
/// Configuration is immutable after construction and every method takes
/// `&self`, so a shared instance may be used concurrently. Nothing here
/// retries: one call is one delivery attempt.
pub struct RemoteWrite {
    client: surf::Client,
    url: Url,
    headers: Vec<(String, String)>,
    timeout: Duration,
}

impl RemoteWrite {
    pub fn new(url: &str) -> Result<RemoteWrite, WriteError> {
        let url = Url::parse(url)
            .map_err(|err| WriteError::Validation(format!("invalid remote write url: {}", err)))?;
        Ok(RemoteWrite {
            client: surf::Client::new(),
            url,
            headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a default header sent with every request.
    ///
    /// The protocol's mandatory headers always win over headers set here.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Authenticate with HTTP basic auth.
    pub fn with_basic_auth(self, username: &str, password: &str) -> Self {
        let auth = BasicAuth::new(username, password);
        let value = auth.value();
        self.with_header("authorization", value.as_str())
    }

    /// Authenticate with a bearer token.
    pub fn with_bearer_token(self, token: &str) -> Self {
        self.with_header("authorization", &format!("Bearer {}", token))
    }

    /// Deliver one encoded payload.
    ///
    /// Any HTTP response, success or rejection, yields `Ok`; the errors
    /// are reserved for requests that never completed (`Transport`,
    /// `Timeout`). Use [`WriteResponse::into_result`] for the error view
    /// of a rejection.
    pub async fn send(&self, payload: Vec<u8>) -> Result<WriteResponse, WriteError> {
        match self.send_inner(payload).await {
            Ok(response) => {
                DEBUG.write_succeeded();
                Ok(response)
            }
            Err(err) => {
                DEBUG.write_failed();
                debug_error(&err);
                Err(err)
            }
        }
    }

    async fn send_inner(&self, payload: Vec<u8>) -> Result<WriteResponse, WriteError> {
        // Caller headers go first so the protocol headers can't be displaced
        let mut request = self.client.post(&self.url);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let request = request
            .header("Content-Encoding", CONTENT_ENCODING)
            .header("Content-Type", CONTENT_TYPE)
            .header("X-Prometheus-Remote-Write-Version", PROTOCOL_VERSION)
            .body(Body::from_bytes(payload));

        // One timeout covers the whole exchange, response body included
        async_std::future::timeout(self.timeout, async move {
            let mut response = request.await.map_err(WriteError::Transport)?;
            let status = u16::from(response.status());
            let body = response.body_string().await.unwrap_or_default();
            Ok(WriteResponse {
                status,
                body: if body.is_empty() { None } else { Some(body) },
            })
        })
        .await
        .map_err(|_| WriteError::Timeout)?
    }

    /// Encode and deliver a batch of series in one call.
    ///
    /// Unlike [`send`](RemoteWrite::send), a non-2xx response is returned
    /// as `WriteError::Rejected`.
    pub async fn write(&self, series: &[SampleSeries]) -> Result<WriteResponse, WriteError> {
        let payload = encode::encode(series)?;
        self.send(payload).await?.into_result()
    }
}

/// The outcome of one delivery attempt that reached the server.
#[derive(Clone, Debug)]
pub struct WriteResponse {
    status: u16,
    body: Option<String>,
}

impl WriteResponse {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Whether the server accepted the write (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Convert a rejection into its error form, passing a success through.
    ///
    /// By remote write convention a 429 or 5xx rejection is retryable by
    /// the caller and other 4xx are not; that decision stays with the
    /// caller, only the status and body are surfaced here.
    pub fn into_result(self) -> Result<WriteResponse, WriteError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(WriteError::Rejected {
                status: self.status,
                body: self.body,
            })
        }
    }
}
