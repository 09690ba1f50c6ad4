//! Metrics-based observability hooks for job polling and tool execution.
//!
//! ```rust
//! use cambclient::JobPollHooks;
//! use cambobserve::MetricsObservabilityHooks;
//!
//! fn accepts_poll_hooks(_hooks: &dyn JobPollHooks) {}
//!
//! let hooks = MetricsObservabilityHooks;
//! accepts_poll_hooks(&hooks);
//! ```

use std::time::Duration;

use cambclient::{CambError, JobId, JobPollHooks, JobStatus};
use cambtooling::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsObservabilityHooks;

impl JobPollHooks for MetricsObservabilityHooks {
    fn on_poll_start(&self, operation: &str, _job_id: &JobId) {
        metrics::counter!("camb_job_poll_start_total", "operation" => operation.to_string())
            .increment(1);
    }

    fn on_poll_attempt(&self, operation: &str, _job_id: &JobId, _attempt: u32, status: JobStatus) {
        metrics::counter!(
            "camb_job_poll_attempt_total",
            "operation" => operation.to_string(),
            "status" => format!("{status:?}")
        )
        .increment(1);
    }

    fn on_job_succeeded(&self, operation: &str, _job_id: &JobId, attempts: u32) {
        metrics::counter!("camb_job_success_total", "operation" => operation.to_string())
            .increment(1);
        metrics::histogram!(
            "camb_job_attempts_per_success",
            "operation" => operation.to_string()
        )
        .record(attempts as f64);
    }

    fn on_job_failed(&self, operation: &str, _job_id: &JobId, attempts: u32, error: &CambError) {
        metrics::counter!(
            "camb_job_failure_total",
            "operation" => operation.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "camb_job_attempts_per_failure",
            "operation" => operation.to_string()
        )
        .record(attempts as f64);
    }
}

impl ToolRuntimeHooks for MetricsObservabilityHooks {
    fn on_execution_start(&self, tool_call: &ToolCall, _context: &ToolExecutionContext) {
        metrics::counter!(
            "camb_tool_execution_start_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "camb_tool_execution_success_total",
            "tool_name" => tool_call.name.clone()
        )
        .increment(1);
        metrics::histogram!(
            "camb_tool_execution_duration_seconds",
            "tool_name" => tool_call.name.clone(),
            "status" => "success"
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        metrics::counter!(
            "camb_tool_execution_failure_total",
            "tool_name" => tool_call.name.clone(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
        metrics::histogram!(
            "camb_tool_execution_duration_seconds",
            "tool_name" => tool_call.name.clone(),
            "status" => "failure"
        )
        .record(elapsed.as_secs_f64());
    }
}
