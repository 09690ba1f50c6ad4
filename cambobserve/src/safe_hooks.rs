use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use cambclient::{CambError, JobId, JobPollHooks, JobStatus};
use cambtooling::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult, ToolRuntimeHooks};

/// Contains panics raised by the wrapped poll hooks.
pub struct SafePollHooks<H> {
    inner: H,
}

impl<H> SafePollHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> JobPollHooks for SafePollHooks<H>
where
    H: JobPollHooks,
{
    fn on_poll_start(&self, operation: &str, job_id: &JobId) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_poll_start(operation, job_id)
        }));
    }

    fn on_poll_attempt(&self, operation: &str, job_id: &JobId, attempt: u32, status: JobStatus) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_poll_attempt(operation, job_id, attempt, status)
        }));
    }

    fn on_job_succeeded(&self, operation: &str, job_id: &JobId, attempts: u32) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_job_succeeded(operation, job_id, attempts)
        }));
    }

    fn on_job_failed(&self, operation: &str, job_id: &JobId, attempts: u32, error: &CambError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_job_failed(operation, job_id, attempts, error)
        }));
    }
}

pub struct SafeToolHooks<H> {
    inner: H,
}

impl<H> SafeToolHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ToolRuntimeHooks for SafeToolHooks<H>
where
    H: ToolRuntimeHooks,
{
    fn on_execution_start(&self, tool_call: &ToolCall, context: &ToolExecutionContext) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_execution_start(tool_call, context)
        }));
    }

    fn on_execution_success(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        result: &ToolExecutionResult,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_execution_success(tool_call, context, result, elapsed)
        }));
    }

    fn on_execution_failure(
        &self,
        tool_call: &ToolCall,
        context: &ToolExecutionContext,
        error: &ToolError,
        elapsed: Duration,
    ) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner
                .on_execution_failure(tool_call, context, error, elapsed)
        }));
    }
}
