//! Session and alert state
//!
//! The only shared mutable state in the system. One async mutex guards the
//! session flag, the alert flag, and the expiry task handle; every handler
//! and the expiry task itself mutate the state under that lock, so a timer
//! firing exactly as a new alert arrives can never interleave partial
//! updates.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Alert auto-expiry when no further alert arrives
pub const DEFAULT_ALERT_EXPIRY: Duration = Duration::from_secs(10);

#[derive(Debug, Default)]
struct SessionState {
    session_active: bool,
    alert: bool,
    expiry_task: Option<JoinHandle<()>>,
}

/// Owner of the session/alert flags, exposing only the defined operations
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<SessionState>>,
    alert_expiry: Duration,
}

impl SessionStore {
    pub fn new(alert_expiry: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionState::default())),
            alert_expiry,
        }
    }

    /// Mark a driving session active
    pub async fn start_session(&self) -> bool {
        let mut state = self.inner.lock().await;
        state.session_active = true;
        info!("Driving session started");
        state.session_active
    }

    /// End the driving session: force-clears the alert and cancels any
    /// pending expiry.
    pub async fn stop_session(&self) -> bool {
        let mut state = self.inner.lock().await;
        state.session_active = false;
        state.alert = false;
        if let Some(task) = state.expiry_task.take() {
            task.abort();
        }
        info!("Driving session stopped");
        state.session_active
    }

    /// Record a drowsiness alert.
    ///
    /// Dropped while no session is active. Otherwise sets the alert flag
    /// and cancel-and-rearms the single-shot expiry timer, so repeated
    /// alerts slide the expiry forward instead of stacking timers.
    pub async fn report_alert(&self) -> bool {
        let mut state = self.inner.lock().await;
        if !state.session_active {
            info!("Alert ignored: no active driving session");
            return state.alert;
        }

        state.alert = true;
        info!("Drowsiness alert raised");

        if let Some(task) = state.expiry_task.take() {
            task.abort();
        }
        let inner = Arc::clone(&self.inner);
        let expiry = self.alert_expiry;
        state.expiry_task = Some(tokio::spawn(async move {
            tokio::time::sleep(expiry).await;
            let mut state = inner.lock().await;
            state.alert = false;
            state.expiry_task = None;
            debug!("Drowsiness alert auto-expired");
        }));

        state.alert
    }

    /// Current alert flag, no mutation
    pub async fn alert(&self) -> bool {
        self.inner.lock().await.alert
    }

    /// Current session flag, no mutation
    pub async fn session_active(&self) -> bool {
        self.inner.lock().await.session_active
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_EXPIRY)
    }
}
