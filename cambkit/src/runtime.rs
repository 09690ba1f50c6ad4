//! Runtime wiring helpers that attach observability to the client and tools.

use std::sync::Arc;

use crate::{
    CambClient, CambConfig, CambToolkit, DefaultToolRuntime, JobPollHooks,
    MetricsObservabilityHooks, SafePollHooks, SafeToolHooks, ToolError, ToolRuntimeHooks,
    ToolSelection, TracingObservabilityHooks,
};

/// Hook set installed on both the job poller and the tool runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Observability {
    Off,
    #[default]
    Tracing,
    Metrics,
}

#[derive(Clone)]
pub struct RuntimeBundle {
    pub client: CambClient,
    pub toolkit: CambToolkit,
    pub runtime: DefaultToolRuntime,
}

pub fn build_runtime(
    config: CambConfig,
    selection: ToolSelection,
) -> Result<RuntimeBundle, ToolError> {
    Ok(build_runtime_with(
        CambClient::from_config(config)?,
        selection,
        Observability::default(),
    ))
}

/// Resolves `CAMB_API_KEY` and builds a traced runtime with default settings.
pub fn build_runtime_from_env(selection: ToolSelection) -> Result<RuntimeBundle, ToolError> {
    build_runtime(CambConfig::from_env()?, selection)
}

pub fn build_runtime_with(
    client: CambClient,
    selection: ToolSelection,
    observability: Observability,
) -> RuntimeBundle {
    let (poll_hooks, tool_hooks) = observability_hooks(observability);

    let client = match poll_hooks {
        Some(hooks) => client.with_poll_hooks(hooks),
        None => client,
    };
    let toolkit = CambToolkit::new(client.clone(), selection);
    let runtime = match tool_hooks {
        Some(hooks) => toolkit.runtime().with_hooks(hooks),
        None => toolkit.runtime(),
    };

    RuntimeBundle {
        client,
        toolkit,
        runtime,
    }
}

type HookPair = (
    Option<Arc<dyn JobPollHooks>>,
    Option<Arc<dyn ToolRuntimeHooks>>,
);

fn observability_hooks(observability: Observability) -> HookPair {
    match observability {
        Observability::Off => (None, None),
        Observability::Tracing => (
            Some(Arc::new(SafePollHooks::new(TracingObservabilityHooks))),
            Some(Arc::new(SafeToolHooks::new(TracingObservabilityHooks))),
        ),
        Observability::Metrics => (
            Some(Arc::new(SafePollHooks::new(MetricsObservabilityHooks))),
            Some(Arc::new(SafeToolHooks::new(MetricsObservabilityHooks))),
        ),
    }
}
