use cambclient::{AudioType, CambClient, CambConfig, JobKind, TextToSoundRequest};
use serde::Deserialize;
use serde_json::{Value, json};

use super::definition;
use crate::{
    OutputFormat, Tool, ToolDefinition, ToolError, ToolFuture, ToolOutput, parse_input,
    require_non_empty, shape_audio,
};

pub const TEXT_TO_SOUND_TOOL_NAME: &str = "camb_text_to_sound";

#[derive(Debug, Deserialize)]
struct TextToSoundInput {
    prompt: String,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    audio_type: Option<AudioType>,
    #[serde(default)]
    output_format: OutputFormat,
}

impl TextToSoundInput {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("prompt", &self.prompt)?;
        if let Some(duration) = self.duration
            && !(duration > 0.0 && duration.is_finite())
        {
            return Err(ToolError::validation(format!(
                "'duration' must be greater than 0, got {duration}"
            )));
        }
        if self.output_format == OutputFormat::Bytes {
            return Err(ToolError::validation(
                "'output_format' must be one of [file_path, base64], got bytes",
            ));
        }
        Ok(())
    }
}

/// Generates music or sound effects from a text prompt.
#[derive(Debug, Clone)]
pub struct TextToSoundTool {
    client: CambClient,
}

impl TextToSoundTool {
    pub fn new(client: CambClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: CambConfig) -> Result<Self, ToolError> {
        Ok(Self::new(CambClient::from_config(config)?))
    }

    async fn run(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: TextToSoundInput = parse_input(args)?;
        input.validate()?;

        let job_id = self
            .client
            .submit_text_to_sound(&TextToSoundRequest {
                prompt: input.prompt,
                duration: input.duration,
                audio_type: input.audio_type,
            })
            .await?;
        let job = self
            .client
            .wait_for_job(JobKind::TextToSound, &job_id)
            .await?;
        let clip = self.client.text_to_sound_result(&job).await?;

        shape_audio(clip.into_playable(), input.output_format).await
    }
}

impl Tool for TextToSoundTool {
    fn definition(&self) -> ToolDefinition {
        definition(
            TEXT_TO_SOUND_TOOL_NAME,
            "Generate sounds, music, or soundscapes from text descriptions using CAMB AI. \
             Describe the audio you want and optionally specify duration and type. Returns \
             an audio file.",
            json!({
                "type": "object",
                "properties": {
                    "prompt": {
                        "type": "string",
                        "description": "Description of the sound or music to generate."
                    },
                    "duration": {
                        "type": "number",
                        "exclusiveMinimum": 0,
                        "description": "Length of the audio in seconds."
                    },
                    "audio_type": {"type": "string", "enum": ["music", "sound"]},
                    "output_format": {
                        "type": "string",
                        "enum": ["file_path", "base64"],
                        "default": "file_path"
                    }
                },
                "required": ["prompt"]
            }),
        )
    }

    fn execute<'a>(&'a self, args: Value) -> ToolFuture<'a, Result<ToolOutput, ToolError>> {
        Box::pin(self.run(args))
    }
}
