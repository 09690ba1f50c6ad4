use cambclient::{
    CambClient, CambConfig, CambError, JobKind, ResultRef, VoiceCloneRequest,
    VoiceCloneSubmission,
};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::definition;
use crate::{
    Tool, ToolDefinition, ToolError, ToolFuture, ToolOutput, parse_input, read_audio_file,
    require_non_empty, require_one_of,
};

pub const VOICE_CLONE_TOOL_NAME: &str = "camb_voice_clone";

const GENDER_CODES: [u8; 4] = [0, 1, 2, 9];

#[derive(Debug, Deserialize)]
struct VoiceCloneInput {
    voice_name: String,
    audio_file_path: String,
    gender: u8,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    age: Option<u32>,
    #[serde(default)]
    language: Option<u32>,
}

impl VoiceCloneInput {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("voice_name", &self.voice_name)?;
        require_non_empty("audio_file_path", &self.audio_file_path)?;
        require_one_of("gender", self.gender, &GENDER_CODES)
    }
}

/// Creates a custom voice from an audio sample.
///
/// The minimum sample length is enforced by the service.
#[derive(Debug, Clone)]
pub struct VoiceCloneTool {
    client: CambClient,
}

impl VoiceCloneTool {
    pub fn new(client: CambClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: CambConfig) -> Result<Self, ToolError> {
        Ok(Self::new(CambClient::from_config(config)?))
    }

    async fn run(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: VoiceCloneInput = parse_input(args)?;
        input.validate()?;

        let (file_name, bytes) = read_audio_file(input.audio_file_path.trim()).await?;
        let request = VoiceCloneRequest {
            voice_name: input.voice_name,
            gender: input.gender,
            file_name,
            bytes,
            description: input.description,
            age: input.age,
            language: input.language,
        };

        let (voice_id, message) = match self.client.create_custom_voice(&request).await? {
            VoiceCloneSubmission::Ready { voice_id, message } => (voice_id, message),
            VoiceCloneSubmission::Pending(job_id) => {
                let job = self
                    .client
                    .wait_for_job(JobKind::VoiceClone, &job_id)
                    .await?;
                match job.result_ref {
                    Some(ResultRef::VoiceId(voice_id)) => (voice_id, job.message),
                    _ => {
                        return Err(ToolError::from(
                            CambError::decode(format!(
                                "voice clone job {job_id} completed without a voice_id"
                            ))
                            .with_job_id(job_id),
                        ));
                    }
                }
            }
        };

        let mut output = Map::new();
        output.insert("voice_id".to_string(), json!(voice_id));
        output.insert("voice_name".to_string(), json!(request.voice_name));
        output.insert("status".to_string(), json!("created"));
        if let Some(message) = message {
            output.insert("message".to_string(), json!(message));
        }
        Ok(ToolOutput::Json(Value::Object(output)))
    }
}

impl Tool for VoiceCloneTool {
    fn definition(&self) -> ToolDefinition {
        definition(
            VOICE_CLONE_TOOL_NAME,
            "Clone a voice from an audio sample using CAMB AI. Requires 2+ seconds of audio. \
             Returns the new voice ID that can be used with TTS tools. Gender: 1=Male, \
             2=Female, 0=Not Specified, 9=Not Applicable.",
            json!({
                "type": "object",
                "properties": {
                    "voice_name": {"type": "string", "description": "Name for the new voice."},
                    "audio_file_path": {
                        "type": "string",
                        "description": "Path to an audio sample of 2+ seconds."
                    },
                    "gender": {"type": "integer", "enum": GENDER_CODES},
                    "description": {"type": "string"},
                    "age": {"type": "integer"},
                    "language": {"type": "integer"}
                },
                "required": ["voice_name", "audio_file_path", "gender"]
            }),
        )
    }

    fn execute<'a>(&'a self, args: Value) -> ToolFuture<'a, Result<ToolOutput, ToolError>> {
        Box::pin(self.run(args))
    }
}
