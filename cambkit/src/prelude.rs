//! Common imports for most cambkit applications.

pub use crate::{
    build_runtime, build_runtime_from_env, build_runtime_with, parse_tool_name,
    selection_from_names, session_context, tool_call,
};
pub use crate::{camb_call, camb_tools};
pub use crate::{
    BoxFuture, CambClient, CambConfig, CambError, CambErrorKind, CambToolkit, DefaultToolRuntime,
    Observability, OutputFormat, RuntimeBundle, Tool, ToolCall, ToolDefinition, ToolError,
    ToolErrorKind, ToolExecutionContext, ToolExecutionResult, ToolOutput, ToolRegistry,
    ToolRuntime, ToolSelection,
};
