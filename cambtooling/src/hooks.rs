//! Runtime hooks for tool execution lifecycle events.
//!
//! ```rust
//! use cambtooling::{NoopToolRuntimeHooks, ToolRuntimeHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn ToolRuntimeHooks) {}
//!
//! let hooks = NoopToolRuntimeHooks;
//! assert_hooks_trait(&hooks);
//! ```

use std::time::Duration;

use crate::{ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult};

/// Callbacks fired by [`crate::DefaultToolRuntime`] around every call.
///
/// Exactly one of `on_execution_success` / `on_execution_failure` follows each
/// `on_execution_start`, including for unknown tools and malformed arguments.
/// `elapsed` covers validation, network calls and job polling.
pub trait ToolRuntimeHooks: Send + Sync {
    fn on_execution_start(&self, _tool_call: &ToolCall, _context: &ToolExecutionContext) {}

    fn on_execution_success(
        &self,
        _tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _result: &ToolExecutionResult,
        _elapsed: Duration,
    ) {
    }

    /// `error` already carries the tool name and call id.
    fn on_execution_failure(
        &self,
        _tool_call: &ToolCall,
        _context: &ToolExecutionContext,
        _error: &ToolError,
        _elapsed: Duration,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopToolRuntimeHooks;

impl ToolRuntimeHooks for NoopToolRuntimeHooks {}
