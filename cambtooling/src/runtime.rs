//! Tool runtime trait and default registry-backed executor.

use std::sync::Arc;
use std::time::Instant;

use crate::{
    NoopToolRuntimeHooks, ToolCall, ToolError, ToolExecutionContext, ToolExecutionResult,
    ToolFuture, ToolRegistry, ToolRuntimeHooks,
};

pub trait ToolRuntime: Send + Sync {
    fn execute<'a>(
        &'a self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolFuture<'a, Result<ToolExecutionResult, ToolError>>;
}

#[derive(Clone)]
pub struct DefaultToolRuntime {
    registry: Arc<ToolRegistry>,
    hooks: Arc<dyn ToolRuntimeHooks>,
}

impl DefaultToolRuntime {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self {
            registry,
            hooks: Arc::new(NoopToolRuntimeHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ToolRuntimeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn registry(&self) -> Arc<ToolRegistry> {
        Arc::clone(&self.registry)
    }
}

impl Default for DefaultToolRuntime {
    fn default() -> Self {
        Self::new(Arc::new(ToolRegistry::new()))
    }
}

impl ToolRuntime for DefaultToolRuntime {
    fn execute<'a>(
        &'a self,
        tool_call: ToolCall,
        context: ToolExecutionContext,
    ) -> ToolFuture<'a, Result<ToolExecutionResult, ToolError>> {
        Box::pin(async move {
            self.hooks.on_execution_start(&tool_call, &context);
            let started = Instant::now();

            let outcome = match self.registry.get(&tool_call.name) {
                Some(tool) => tool.invoke(&tool_call.arguments).await,
                None => Err(ToolError::not_found(format!(
                    "tool '{}' is not registered",
                    tool_call.name
                ))),
            };

            match outcome {
                Ok(output) => {
                    let result = ToolExecutionResult::from_call(&tool_call, output);
                    self.hooks
                        .on_execution_success(&tool_call, &context, &result, started.elapsed());
                    Ok(result)
                }
                Err(error) => {
                    let error = error
                        .with_tool_name(tool_call.name.clone())
                        .with_tool_call_id(tool_call.id.clone());
                    self.hooks
                        .on_execution_failure(&tool_call, &context, &error, started.elapsed());
                    Err(error)
                }
            }
        })
    }
}

impl std::fmt::Debug for DefaultToolRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultToolRuntime")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
