//! CAMB AI capabilities exposed as agent tools.
//!
//! Each tool validates a JSON argument object, calls the CAMB AI API through a
//! shared [`cambclient::CambClient`] and shapes the response into a
//! [`ToolOutput`]. [`CambToolkit`] bundles a selection of them.
//!
//! ```rust
//! use std::time::Duration;
//!
//! use cambclient::CambConfig;
//! use cambtooling::{CambToolkit, ToolSelection};
//!
//! let config = CambConfig::builder()
//!     .api_key("camb-key")
//!     .poll_interval(Duration::from_millis(10))
//!     .build()
//!     .expect("config should build");
//!
//! let toolkit = CambToolkit::from_config(config, ToolSelection::none().tts(true))
//!     .expect("toolkit should build");
//! let names = toolkit
//!     .get_tools()
//!     .iter()
//!     .map(|tool| tool.definition().name)
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(names, vec!["camb_tts".to_string()]);
//! ```

mod args;
mod error;
mod hooks;
mod output;
mod registry;
mod runtime;
mod tool;
mod toolkit;
pub mod tools;
mod types;

pub mod prelude {
    pub use crate::{
        CambToolkit, DefaultToolRuntime, OutputFormat, Tool, ToolCall, ToolDefinition, ToolError,
        ToolErrorKind, ToolExecutionContext, ToolExecutionResult, ToolFuture, ToolOutput,
        ToolRegistry, ToolRuntime, ToolRuntimeHooks, ToolSelection,
    };
}

pub use args::{
    AudioInput, parse_input, parse_json_value, read_audio_file, require_char_len,
    require_non_empty, require_one_of, require_range,
};
pub use error::{ToolError, ToolErrorKind};
pub use hooks::{NoopToolRuntimeHooks, ToolRuntimeHooks};
pub use output::{encode_base64, shape_audio};
pub use registry::ToolRegistry;
pub use runtime::{DefaultToolRuntime, ToolRuntime};
pub use tool::{Tool, ToolFuture};
pub use toolkit::{CambToolkit, ToolSelection};
pub use tools::{
    AUDIO_SEPARATION_TOOL_NAME, AudioSeparationTool, TEXT_TO_SOUND_TOOL_NAME, TRANSCRIPTION_TOOL_NAME,
    TRANSLATED_TTS_TOOL_NAME, TRANSLATION_TOOL_NAME, TTS_TOOL_NAME, TextToSoundTool,
    TranscriptionTool, TranslatedTtsTool, TranslationTool, TtsTool, VOICE_CLONE_TOOL_NAME,
    VOICE_LIST_TOOL_NAME, VoiceCloneTool, VoiceListTool,
};
pub use types::{
    OutputFormat, ToolCall, ToolDefinition, ToolExecutionContext, ToolExecutionResult, ToolOutput,
};
