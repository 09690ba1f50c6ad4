use cambclient::{
    CambClient, CambConfig, DEFAULT_LANGUAGE, DEFAULT_VOICE_ID, SpeechModel, TtsRequest,
};
use serde::Deserialize;
use serde_json::{Value, json};

use super::definition;
use crate::{
    OutputFormat, Tool, ToolDefinition, ToolError, ToolFuture, ToolOutput, parse_input,
    require_char_len, require_non_empty, require_range, shape_audio,
};

pub const TTS_TOOL_NAME: &str = "camb_tts";

const MIN_TEXT_CHARS: usize = 3;
const MAX_TEXT_CHARS: usize = 3000;
const MIN_SPEED: f32 = 0.5;
const MAX_SPEED: f32 = 2.0;

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_voice_id() -> u64 {
    DEFAULT_VOICE_ID
}

fn default_speed() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
struct TtsInput {
    text: String,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default = "default_voice_id")]
    voice_id: u64,
    #[serde(default)]
    speech_model: SpeechModel,
    #[serde(default)]
    output_format: OutputFormat,
    #[serde(default = "default_speed")]
    speed: f32,
    #[serde(default)]
    user_instructions: Option<String>,
}

impl TtsInput {
    fn validate(&self) -> Result<(), ToolError> {
        require_char_len("text", &self.text, MIN_TEXT_CHARS, MAX_TEXT_CHARS)?;
        require_non_empty("language", &self.language)?;
        require_range("speed", self.speed, MIN_SPEED, MAX_SPEED)
    }

    fn into_request(self) -> TtsRequest {
        TtsRequest {
            text: self.text,
            language: self.language,
            voice_id: self.voice_id,
            speech_model: self.speech_model,
            speed: self.speed,
            user_instructions: self.user_instructions,
        }
    }
}

/// Converts text to speech in one synchronous call.
#[derive(Debug, Clone)]
pub struct TtsTool {
    client: CambClient,
}

impl TtsTool {
    pub fn new(client: CambClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: CambConfig) -> Result<Self, ToolError> {
        Ok(Self::new(CambClient::from_config(config)?))
    }

    async fn run(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: TtsInput = parse_input(args)?;
        input.validate()?;

        let output_format = input.output_format;
        let clip = self.client.tts(&input.into_request()).await?;
        shape_audio(clip, output_format).await
    }
}

impl Tool for TtsTool {
    fn definition(&self) -> ToolDefinition {
        definition(
            TTS_TOOL_NAME,
            "Convert text to speech using CAMB AI. Supports 140+ languages and multiple voice \
             models. Returns audio as a file path, base64 string, or raw bytes.",
            json!({
                "type": "object",
                "properties": {
                    "text": {
                        "type": "string",
                        "minLength": MIN_TEXT_CHARS,
                        "maxLength": MAX_TEXT_CHARS,
                        "description": "Text to convert to speech (3-3000 characters)."
                    },
                    "language": {
                        "type": "string",
                        "default": DEFAULT_LANGUAGE,
                        "description": "BCP-47 language code such as 'en-us' or 'es-es'."
                    },
                    "voice_id": {
                        "type": "integer",
                        "default": DEFAULT_VOICE_ID,
                        "description": "Voice to use. List voices with camb_voice_list."
                    },
                    "speech_model": {
                        "type": "string",
                        "enum": ["mars-flash", "mars-pro", "mars-instruct"],
                        "default": "mars-flash"
                    },
                    "output_format": {
                        "type": "string",
                        "enum": ["file_path", "base64", "bytes"],
                        "default": "file_path"
                    },
                    "speed": {
                        "type": "number",
                        "minimum": MIN_SPEED,
                        "maximum": MAX_SPEED,
                        "default": 1.0
                    },
                    "user_instructions": {
                        "type": "string",
                        "description": "Delivery instructions, only used by mars-instruct."
                    }
                },
                "required": ["text"]
            }),
        )
    }

    fn execute<'a>(&'a self, args: Value) -> ToolFuture<'a, Result<ToolOutput, ToolError>> {
        Box::pin(self.run(args))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ToolErrorKind;

    fn parsed(args: Value) -> Result<(), ToolError> {
        parse_input::<TtsInput>(args)?.validate()
    }

    #[test]
    fn text_length_bounds_are_enforced() {
        assert!(parsed(json!({"text": "abc"})).is_ok());
        assert_eq!(
            parsed(json!({"text": "ab"})).expect_err("too short").kind,
            ToolErrorKind::Validation
        );
        assert!(parsed(json!({"text": "a".repeat(3000)})).is_ok());
        assert!(parsed(json!({"text": "a".repeat(3001)})).is_err());
        assert!(parsed(json!({})).is_err());
    }

    #[test]
    fn speed_boundaries_are_inclusive() {
        assert!(parsed(json!({"text": "hello", "speed": 0.5})).is_ok());
        assert!(parsed(json!({"text": "hello", "speed": 2.0})).is_ok());
        assert!(parsed(json!({"text": "hello", "speed": 0.49})).is_err());
        assert!(parsed(json!({"text": "hello", "speed": 2.01})).is_err());
    }

    #[test]
    fn unknown_models_and_formats_are_rejected() {
        assert!(parsed(json!({"text": "hello", "speech_model": "mars-ultra"})).is_err());
        assert!(parsed(json!({"text": "hello", "output_format": "wav"})).is_err());
    }
}
