//! Unified facade over the cambkit workspace crates.
//!
//! Re-exports the CAMB AI client, the eight agent tools with their toolkit and
//! runtime, and the observability hooks. Most applications only need this
//! crate.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use cambkit::{CambConfig, ToolSelection, build_runtime};
//!
//! let config = CambConfig::builder()
//!     .api_key("camb-key")
//!     .poll_interval(Duration::from_secs(1))
//!     .build()
//!     .expect("config should build");
//!
//! let bundle = build_runtime(config, ToolSelection::default()).expect("runtime should build");
//! assert_eq!(bundle.toolkit.get_tools().len(), 8);
//! ```

mod macros;

pub mod prelude;
pub mod runtime;
pub mod util;

pub use cambclient;
pub use cambcommon;
pub use cambobserve;
pub use cambtooling;
pub use serde_json;

pub use cambclient::{
    API_KEY_ENV, AudioClip, AudioFormat, CambClient, CambConfig, CambConfigBuilder, CambError,
    CambErrorKind, CambHttpTransport, CambTransport, ClientFuture, HttpRequest, HttpResponse,
    Job, JobId, JobKind, JobPollHooks, JobPoller, JobStatus, PollPolicy, SecretString,
    Transcription, Voice,
};
pub use cambcommon::{BoxFuture, MetadataMap, SessionId, TraceId};
pub use cambobserve::{
    MetricsObservabilityHooks, SafePollHooks, SafeToolHooks, TracingObservabilityHooks,
};
pub use cambtooling::{
    AUDIO_SEPARATION_TOOL_NAME, AudioSeparationTool, CambToolkit, DefaultToolRuntime,
    NoopToolRuntimeHooks, OutputFormat, TEXT_TO_SOUND_TOOL_NAME, TRANSCRIPTION_TOOL_NAME,
    TRANSLATED_TTS_TOOL_NAME, TRANSLATION_TOOL_NAME, TTS_TOOL_NAME, TextToSoundTool, Tool,
    ToolCall, ToolDefinition, ToolError, ToolErrorKind, ToolExecutionContext,
    ToolExecutionResult, ToolFuture, ToolOutput, ToolRegistry, ToolRuntime, ToolRuntimeHooks,
    ToolSelection, TranscriptionTool, TranslatedTtsTool, TranslationTool, TtsTool,
    VOICE_CLONE_TOOL_NAME, VOICE_LIST_TOOL_NAME, VoiceCloneTool, VoiceListTool,
};

pub use runtime::{
    Observability, RuntimeBundle, build_runtime, build_runtime_from_env, build_runtime_with,
};
pub use util::{parse_tool_name, selection_from_names, session_context, tool_call};
