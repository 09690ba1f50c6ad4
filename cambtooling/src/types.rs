//! Tool definitions, call envelopes, execution context, and shaped outputs.

use std::path::PathBuf;

use cambcommon::{MetadataMap, SessionId, TraceId};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema for the tool's input object.
    pub input_schema: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: String,
}

impl ToolCall {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolExecutionContext {
    pub session_id: SessionId,
    pub trace_id: Option<TraceId>,
    pub metadata: MetadataMap,
}

impl ToolExecutionContext {
    pub fn new(session_id: impl Into<SessionId>) -> Self {
        Self {
            session_id: session_id.into(),
            trace_id: None,
            metadata: MetadataMap::new(),
        }
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<TraceId>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Result handed back to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    FilePath(PathBuf),
    Bytes(Vec<u8>),
    Base64(String),
    Text(String),
    Json(Value),
}

impl ToolOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Base64(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// String rendering for hosts that only accept text results.
    ///
    /// Raw bytes have no faithful text form and are reported by length.
    pub fn render(&self) -> String {
        match self {
            Self::FilePath(path) => path.display().to_string(),
            Self::Bytes(bytes) => format!("<{} bytes of audio>", bytes.len()),
            Self::Base64(text) | Self::Text(text) => text.clone(),
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToolExecutionResult {
    pub tool_call_id: String,
    pub output: ToolOutput,
}

impl ToolExecutionResult {
    pub fn new(tool_call_id: impl Into<String>, output: ToolOutput) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            output,
        }
    }

    pub fn from_call(call: &ToolCall, output: ToolOutput) -> Self {
        Self::new(call.id.clone(), output)
    }
}

/// Requested shape for audio-producing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    FilePath,
    Base64,
    Bytes,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FilePath => "file_path",
            Self::Base64 => "base64",
            Self::Bytes => "bytes",
        }
    }
}
