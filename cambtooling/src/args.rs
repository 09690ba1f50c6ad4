//! JSON argument parsing and input validation helpers for tools.
//!
//! ```rust
//! use cambtooling::{parse_input, parse_json_value, require_range};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Args {
//!     speed: f32,
//! }
//!
//! let value = parse_json_value(r#"{"speed":1.5,"extra":true}"#).expect("json should parse");
//! let args: Args = parse_input(value).expect("args should parse");
//! require_range("speed", args.speed, 0.5, 2.0).expect("speed in range");
//! ```

use std::fmt::Display;
use std::path::Path;

use cambclient::AudioSource;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ToolError;

pub fn parse_json_value(args_json: &str) -> Result<Value, ToolError> {
    serde_json::from_str(args_json)
        .map_err(|err| ToolError::validation(format!("invalid JSON arguments: {err}")))
}

/// Deserializes an argument object into a tool input struct.
///
/// `null` is treated as an empty object. Unknown keys are ignored.
pub fn parse_input<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        Value::Object(map) => Value::Object(map),
        other => {
            return Err(ToolError::validation(format!(
                "expected JSON object arguments, got {other}"
            )));
        }
    };

    serde_json::from_value(args)
        .map_err(|err| ToolError::validation(format!("invalid arguments: {err}")))
}

pub fn require_non_empty(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::validation(format!("'{field}' must not be empty")));
    }
    Ok(())
}

pub fn require_char_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), ToolError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ToolError::validation(format!(
            "'{field}' must be between {min} and {max} characters, got {len}"
        )));
    }
    Ok(())
}

pub fn require_range<T>(field: &str, value: T, min: T, max: T) -> Result<(), ToolError>
where
    T: PartialOrd + Display + Copy,
{
    if !(value >= min && value <= max) {
        return Err(ToolError::validation(format!(
            "'{field}' must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

pub fn require_one_of<T>(field: &str, value: T, allowed: &[T]) -> Result<(), ToolError>
where
    T: PartialEq + Display + Copy,
{
    if !allowed.contains(&value) {
        let allowed = allowed
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ToolError::validation(format!(
            "'{field}' must be one of [{allowed}], got {value}"
        )));
    }
    Ok(())
}

/// Audio reference supplied by the caller, before any file has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioInput {
    Url(String),
    File(String),
}

impl AudioInput {
    /// Exactly one of the two sources must be present and non-blank.
    pub fn from_fields(
        audio_url: Option<&str>,
        audio_file_path: Option<&str>,
    ) -> Result<Self, ToolError> {
        let audio_url = audio_url.map(str::trim).filter(|value| !value.is_empty());
        let audio_file_path = audio_file_path
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match (audio_url, audio_file_path) {
            (Some(url), None) => Ok(Self::Url(url.to_string())),
            (None, Some(path)) => Ok(Self::File(path.to_string())),
            (None, None) => Err(ToolError::validation(
                "either 'audio_url' or 'audio_file_path' must be provided",
            )),
            (Some(_), Some(_)) => Err(ToolError::validation(
                "provide only one of 'audio_url' or 'audio_file_path', not both",
            )),
        }
    }

    pub async fn into_source(self) -> Result<AudioSource, ToolError> {
        match self {
            Self::Url(url) => Ok(AudioSource::Url(url)),
            Self::File(path) => {
                let (file_name, bytes) = read_audio_file(&path).await?;
                Ok(AudioSource::File { file_name, bytes })
            }
        }
    }
}

pub async fn read_audio_file(path: &str) -> Result<(String, Vec<u8>), ToolError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| ToolError::io(format!("failed to read audio file '{path}': {err}")))?;
    let file_name = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("audio")
        .to_string();
    Ok((file_name, bytes))
}
