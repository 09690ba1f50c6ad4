//! Tracing-based observability hooks for job polling and tool execution.
//!
//! ```rust
//! use cambobserve::TracingObservabilityHooks;
//! use cambtooling::ToolRuntimeHooks;
//!
//! fn accepts_tool_hooks(_hooks: &dyn ToolRuntimeHooks) {}
//!
//! let hooks = TracingObservabilityHooks;
//! accepts_tool_hooks(&hooks);
//! ```

use std::time::Duration;

use cambclient::{CambError, JobId, JobPollHooks, JobStatus};
use cambtooling::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObservabilityHooks;

impl JobPollHooks for TracingObservabilityHooks {
    fn on_poll_start(&self, operation: &str, job_id: &JobId) {
        tracing::info!(phase = "job", event = "poll_start", operation, job_id = %job_id);
    }

    fn on_poll_attempt(&self, operation: &str, job_id: &JobId, attempt: u32, status: JobStatus) {
        tracing::debug!(
            phase = "job",
            event = "poll_attempt",
            operation,
            job_id = %job_id,
            attempt,
            status = ?status
        );
    }

    fn on_job_succeeded(&self, operation: &str, job_id: &JobId, attempts: u32) {
        tracing::info!(
            phase = "job",
            event = "succeeded",
            operation,
            job_id = %job_id,
            attempts
        );
    }

    fn on_job_failed(&self, operation: &str, job_id: &JobId, attempts: u32, error: &CambError) {
        tracing::error!(
            phase = "job",
            event = "failed",
            operation,
            job_id = %job_id,
            attempts,
            error_kind = ?error.kind,
            retryable = error.retryable,
            error = %error
        );
    }
}

impl ToolRuntimeHooks for TracingObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        tracing::info!(
            phase = "tool",
            event = "execution_start",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            session_id = %context.session_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str())
        );
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        _result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        tracing::info!(
            phase = "tool",
            event = "execution_success",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            session_id = %context.session_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str()),
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        tracing::error!(
            phase = "tool",
            event = "execution_failure",
            tool_name = tool_call.name,
            tool_call_id = tool_call.id,
            session_id = %context.session_id,
            trace_id = context.trace_id.as_ref().map(|id| id.as_str()),
            elapsed_ms = elapsed.as_millis() as u64,
            stage = error.stage.as_deref(),
            error_kind = ?error.kind,
            retryable = error.retryable,
            error = %error
        );
    }
}
