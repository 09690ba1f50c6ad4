use cambclient::{CambClient, CambConfig, JobKind};
use serde::Deserialize;
use serde_json::{Value, json};

use super::definition;
use crate::{AudioInput, Tool, ToolDefinition, ToolError, ToolFuture, ToolOutput, parse_input};

pub const AUDIO_SEPARATION_TOOL_NAME: &str = "camb_audio_separation";

#[derive(Debug, Deserialize)]
struct AudioSeparationInput {
    #[serde(default)]
    audio_url: Option<String>,
    #[serde(default)]
    audio_file_path: Option<String>,
}

/// Splits speech from background audio.
#[derive(Debug, Clone)]
pub struct AudioSeparationTool {
    client: CambClient,
}

impl AudioSeparationTool {
    pub fn new(client: CambClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: CambConfig) -> Result<Self, ToolError> {
        Ok(Self::new(CambClient::from_config(config)?))
    }

    async fn run(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: AudioSeparationInput = parse_input(args)?;
        let audio = AudioInput::from_fields(
            input.audio_url.as_deref(),
            input.audio_file_path.as_deref(),
        )?;

        let source = audio.into_source().await?;
        let job_id = self.client.submit_audio_separation(&source).await?;
        let job = self
            .client
            .wait_for_job(JobKind::AudioSeparation, &job_id)
            .await?;
        let separated = self.client.audio_separation_result(&job).await?;

        Ok(ToolOutput::Json(json!({
            "vocals": separated.vocals,
            "background": separated.background,
            "status": "completed",
        })))
    }
}

impl Tool for AudioSeparationTool {
    fn definition(&self) -> ToolDefinition {
        definition(
            AUDIO_SEPARATION_TOOL_NAME,
            "Separate vocals and speech from background audio using CAMB AI. Provide an audio \
             URL or file path. Returns locations of the vocals and background tracks.",
            json!({
                "type": "object",
                "properties": {
                    "audio_url": {
                        "type": "string",
                        "description": "URL of the audio. Provide either audio_url or audio_file_path."
                    },
                    "audio_file_path": {
                        "type": "string",
                        "description": "Local path of the audio. Provide either audio_url or audio_file_path."
                    }
                }
            }),
        )
    }

    fn execute<'a>(&'a self, args: Value) -> ToolFuture<'a, Result<ToolOutput, ToolError>> {
        Box::pin(self.run(args))
    }
}
