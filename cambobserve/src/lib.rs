//! Observability hooks for job polling and tool execution.
//!
//! ```rust
//! use cambobserve::{MetricsObservabilityHooks, SafePollHooks, TracingObservabilityHooks};
//!
//! let _poll_hooks = SafePollHooks::new(TracingObservabilityHooks);
//! let _metrics = MetricsObservabilityHooks;
//! ```

mod metrics_hooks;
mod safe_hooks;
mod tracing_hooks;

pub use metrics_hooks::MetricsObservabilityHooks;
pub use safe_hooks::{SafePollHooks, SafeToolHooks};
pub use tracing_hooks::TracingObservabilityHooks;

pub mod prelude {
    pub use crate::{
        MetricsObservabilityHooks, SafePollHooks, SafeToolHooks, TracingObservabilityHooks,
    };
}
