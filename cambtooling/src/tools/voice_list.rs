use cambclient::{CambClient, CambConfig};
use serde::Deserialize;
use serde_json::{Value, json};

use super::definition;
use crate::{Tool, ToolDefinition, ToolError, ToolFuture, ToolOutput, parse_input};

pub const VOICE_LIST_TOOL_NAME: &str = "camb_voice_list";

#[derive(Debug, Deserialize)]
struct VoiceListInput {}

#[derive(Debug, Clone)]
pub struct VoiceListTool {
    client: CambClient,
}

impl VoiceListTool {
    pub fn new(client: CambClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: CambConfig) -> Result<Self, ToolError> {
        Ok(Self::new(CambClient::from_config(config)?))
    }

    async fn run(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let VoiceListInput {} = parse_input(args)?;

        let voices = self
            .client
            .list_voices()
            .await?
            .into_iter()
            .map(|voice| {
                json!({
                    "id": voice.id,
                    "name": voice.name,
                    "gender": voice.gender_label(),
                    "age": voice.age,
                    "language": voice.language,
                })
            })
            .collect();
        Ok(ToolOutput::Json(Value::Array(voices)))
    }
}

impl Tool for VoiceListTool {
    fn definition(&self) -> ToolDefinition {
        definition(
            VOICE_LIST_TOOL_NAME,
            "List all available voices from CAMB AI. Returns voice IDs, names, genders, ages, \
             and languages. Use this to find the right voice_id for TTS tools.",
            json!({"type": "object", "properties": {}}),
        )
    }

    fn execute<'a>(&'a self, args: Value) -> ToolFuture<'a, Result<ToolOutput, ToolError>> {
        Box::pin(self.run(args))
    }
}
