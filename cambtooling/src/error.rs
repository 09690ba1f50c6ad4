//! Tool execution errors and classifications.

use std::error::Error;
use std::fmt::{Display, Formatter};

use cambclient::{CambError, CambErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolErrorKind {
    Validation,
    MissingCredential,
    Transport,
    RemoteJobFailed,
    PollingTimeout,
    NotFound,
    Io,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
    pub retryable: bool,
    pub status: Option<u16>,
    pub job_id: Option<String>,
    pub attempts: Option<u32>,
    pub stage: Option<String>,
    pub tool_name: Option<String>,
    pub tool_call_id: Option<String>,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable,
            status: None,
            job_id: None,
            attempts: None,
            stage: None,
            tool_name: None,
            tool_call_id: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Validation, message, false)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::NotFound, message, false)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ToolErrorKind::Io, message, false)
    }

    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = Some(tool_name.into());
        self
    }

    pub fn with_tool_call_id(mut self, tool_call_id: impl Into<String>) -> Self {
        self.tool_call_id = Some(tool_call_id.into());
        self
    }

    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    pub fn is_user_error(&self) -> bool {
        matches!(
            self.kind,
            ToolErrorKind::Validation | ToolErrorKind::NotFound | ToolErrorKind::MissingCredential
        )
    }
}

impl From<CambError> for ToolError {
    fn from(error: CambError) -> Self {
        let kind = match error.kind {
            CambErrorKind::Validation => ToolErrorKind::Validation,
            CambErrorKind::MissingCredential => ToolErrorKind::MissingCredential,
            CambErrorKind::Transport => ToolErrorKind::Transport,
            CambErrorKind::RemoteJobFailed => ToolErrorKind::RemoteJobFailed,
            CambErrorKind::PollingTimeout => ToolErrorKind::PollingTimeout,
        };

        Self {
            status: error.status,
            job_id: error.job_id.map(|job_id| job_id.to_string()),
            attempts: error.attempts,
            ..Self::new(kind, error.message, error.retryable)
        }
    }
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut context = Vec::new();
        if let Some(tool_name) = &self.tool_name {
            context.push(format!("tool={tool_name}"));
        }
        if let Some(tool_call_id) = &self.tool_call_id {
            context.push(format!("call_id={tool_call_id}"));
        }
        if let Some(stage) = &self.stage {
            context.push(format!("stage={stage}"));
        }

        if context.is_empty() {
            write!(f, "{:?}: {}", self.kind, self.message)
        } else {
            write!(f, "{:?} [{}]: {}", self.kind, context.join(", "), self.message)
        }
    }
}

impl Error for ToolError {}

#[cfg(test)]
mod tests {
    use cambclient::JobId;

    use super::*;

    #[test]
    fn helper_methods_report_retryable_and_user_error() {
        let timeout = ToolError::from(CambError::polling_timeout(JobId::new("t"), 3));
        assert!(timeout.is_retryable());
        assert!(!timeout.is_user_error());

        let invalid = ToolError::validation("bad args");
        assert!(!invalid.is_retryable());
        assert!(invalid.is_user_error());
    }

    #[test]
    fn client_errors_keep_their_context() {
        let error = ToolError::from(CambError::http_status(500, "boom").with_job_id(JobId::new("j-1")));

        assert_eq!(error.kind, ToolErrorKind::Transport);
        assert_eq!(error.status, Some(500));
        assert_eq!(error.job_id.as_deref(), Some("j-1"));
        assert!(error.retryable);
    }

    #[test]
    fn context_fields_are_included_in_display() {
        let error = ToolError::not_found("missing")
            .with_tool_name("camb_tts")
            .with_tool_call_id("call_1")
            .with_stage("synthesis");

        let rendered = error.to_string();
        assert!(rendered.contains("camb_tts"));
        assert!(rendered.contains("call_1"));
        assert!(rendered.contains("stage=synthesis"));
    }
}
