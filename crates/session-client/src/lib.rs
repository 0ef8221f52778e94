//! Session Store Client
//!
//! Thin HTTP client the detector uses to talk to the remote session store:
//! a preflight session check before the detection loop starts, and a
//! fire-and-forget alert notification when the state machine triggers.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Default request timeout: a stalled or absent server must not hang the
/// detector startup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Session client error types
#[derive(Error, Debug)]
pub enum SessionClientError {
    #[error("Session store unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Invalid session store URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Deserialize)]
struct SessionStatusBody {
    session_active: bool,
}

#[derive(Debug, Deserialize)]
struct AlertBody {
    alert: bool,
}

/// Client for the session store's request/response surface
pub struct SessionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SessionClient {
    /// Create a client against `base_url` (e.g. "http://localhost:5000")
    /// with the default 2-second timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SessionClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SessionClientError> {
        let base_url = base_url.into();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(SessionClientError::InvalidUrl(base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SessionClientError::Unreachable)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Preflight check: is a driving session active?
    ///
    /// An unreachable store is an error; the caller decides whether that
    /// aborts startup.
    pub async fn session_active(&self) -> Result<bool, SessionClientError> {
        let url = format!("{}/api/v1/session/status", self.base_url);
        let body: SessionStatusBody = self.http.get(&url).send().await?.json().await?;
        debug!("Session status: active={}", body.session_active);
        Ok(body.session_active)
    }

    /// Notify the store of a drowsiness alert.
    ///
    /// Returns the alert flag the store reports back (false when the store
    /// dropped the alert because no session was active). Callers in the
    /// detection loop spawn this fire-and-forget and only log failures.
    pub async fn report_alert(&self) -> Result<bool, SessionClientError> {
        let url = format!("{}/api/v1/alerts/report", self.base_url);
        let body: AlertBody = self.http.post(&url).send().await?.json().await?;
        info!("Alert reported to session store: alert={}", body.alert);
        Ok(body.alert)
    }

    /// Read the current alert flag without mutating it
    pub async fn current_alert(&self) -> Result<bool, SessionClientError> {
        let url = format!("{}/api/v1/alerts/current", self.base_url);
        let body: AlertBody = self.http.get(&url).send().await?.json().await?;
        Ok(body.alert)
    }
}
