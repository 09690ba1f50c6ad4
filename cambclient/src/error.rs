//! Client error kinds and error value helpers.
//!
//! ```rust
//! use cambclient::{CambError, CambErrorKind, JobId};
//!
//! let missing = CambError::missing_credential("no api key");
//! assert_eq!(missing.kind, CambErrorKind::MissingCredential);
//! assert!(!missing.retryable);
//!
//! let timeout = CambError::polling_timeout(JobId::from(42_u64), 5);
//! assert_eq!(timeout.attempts, Some(5));
//! assert!(timeout.retryable);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::JobId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CambErrorKind {
    Validation,
    MissingCredential,
    Transport,
    RemoteJobFailed,
    PollingTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CambError {
    pub kind: CambErrorKind,
    pub message: String,
    pub retryable: bool,
    pub status: Option<u16>,
    pub body: Option<String>,
    pub job_id: Option<JobId>,
    pub attempts: Option<u32>,
}

impl CambError {
    pub fn new(kind: CambErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
            status: None,
            body: None,
            job_id: None,
            attempts: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(CambErrorKind::Validation, message, false)
    }

    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(CambErrorKind::MissingCredential, message, false)
    }

    /// Connection-level failure with no HTTP status attached.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(CambErrorKind::Transport, message, true)
    }

    /// A response body that could not be decoded into the expected shape.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(CambErrorKind::Transport, message, false)
    }

    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let retryable = status == 429 || status >= 500;
        let message = if body.trim().is_empty() {
            format!("CAMB AI request failed with status {status}")
        } else {
            format!("CAMB AI request failed with status {status}: {}", body.trim())
        };

        Self {
            status: Some(status),
            body: Some(body),
            ..Self::new(CambErrorKind::Transport, message, retryable)
        }
    }

    pub fn remote_job_failed(job_id: JobId, diagnostic: impl Into<String>) -> Self {
        let diagnostic = diagnostic.into();
        Self {
            job_id: Some(job_id.clone()),
            ..Self::new(
                CambErrorKind::RemoteJobFailed,
                format!("job {job_id} failed: {diagnostic}"),
                false,
            )
        }
    }

    pub fn polling_timeout(job_id: JobId, attempts: u32) -> Self {
        Self {
            job_id: Some(job_id.clone()),
            attempts: Some(attempts),
            ..Self::new(
                CambErrorKind::PollingTimeout,
                format!("job {job_id} did not reach a terminal state after {attempts} status checks"),
                true,
            )
        }
    }

    pub fn with_job_id(mut self, job_id: JobId) -> Self {
        self.job_id = Some(job_id);
        self
    }
}

impl Display for CambError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for CambError {}
