use cambclient::{CambClient, CambConfig, JobKind, TranscriptionRequest};
use serde::Deserialize;
use serde_json::{Value, json};

use super::{definition, to_json};
use crate::{AudioInput, Tool, ToolDefinition, ToolError, ToolFuture, ToolOutput, parse_input};

pub const TRANSCRIPTION_TOOL_NAME: &str = "camb_transcription";

#[derive(Debug, Deserialize)]
struct TranscriptionInput {
    language: u32,
    #[serde(default)]
    audio_url: Option<String>,
    #[serde(default)]
    audio_file_path: Option<String>,
}

/// Speech to text with speaker identification, run as a polled job.
#[derive(Debug, Clone)]
pub struct TranscriptionTool {
    client: CambClient,
}

impl TranscriptionTool {
    pub fn new(client: CambClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: CambConfig) -> Result<Self, ToolError> {
        Ok(Self::new(CambClient::from_config(config)?))
    }

    async fn run(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: TranscriptionInput = parse_input(args)?;
        let audio = AudioInput::from_fields(
            input.audio_url.as_deref(),
            input.audio_file_path.as_deref(),
        )?;

        let request = TranscriptionRequest {
            language: input.language,
            source: audio.into_source().await?,
        };
        let job_id = self.client.submit_transcription(&request).await?;
        let job = self
            .client
            .wait_for_job(JobKind::Transcription, &job_id)
            .await?;
        let transcription = self.client.transcription_result(&job).await?;

        Ok(ToolOutput::Json(to_json(&transcription)?))
    }
}

impl Tool for TranscriptionTool {
    fn definition(&self) -> ToolDefinition {
        definition(
            TRANSCRIPTION_TOOL_NAME,
            "Transcribe audio to text using CAMB AI. Supports audio URLs or local files. \
             Returns the transcription with segments and speaker identification.",
            json!({
                "type": "object",
                "properties": {
                    "language": {
                        "type": "integer",
                        "description": "Language code of the audio. 1=English, 2=Spanish, 3=French, 4=German, 5=Italian."
                    },
                    "audio_url": {
                        "type": "string",
                        "description": "URL of the audio. Provide either audio_url or audio_file_path."
                    },
                    "audio_file_path": {
                        "type": "string",
                        "description": "Local path of the audio. Provide either audio_url or audio_file_path."
                    }
                },
                "required": ["language"]
            }),
        )
    }

    fn execute<'a>(&'a self, args: Value) -> ToolFuture<'a, Result<ToolOutput, ToolError>> {
        Box::pin(self.run(args))
    }
}
