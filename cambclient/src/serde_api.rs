//! CAMB AI HTTP payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    AudioSource, CambError, FormPart, Job, JobId, JobStatus, ResultRef, SeparatedAudio,
    SpeechModel, TextToSoundRequest, TranscriptSegment, Transcription, TranscriptionRequest,
    TranslatedTtsRequest, TranslationRequest, TtsRequest, Voice, VoiceCloneRequest,
    VoiceCloneSubmission,
};

pub(crate) fn decode<T>(body: &[u8], what: &str) -> Result<T, CambError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_slice(body)
        .map_err(|err| CambError::decode(format!("invalid {what} response: {err}")))
}

pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Value, CambError> {
    serde_json::to_value(value).map_err(|err| CambError::validation(err.to_string()))
}

fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_job_id(value: &Value) -> Option<JobId> {
    match value {
        Value::Number(number) => Some(JobId::new(number.to_string())),
        Value::String(text) if !text.trim().is_empty() => Some(JobId::new(text.trim())),
        _ => None,
    }
}

/// Some finished jobs only report where their audio lives, either as a bare
/// URL message or inside a message object.
fn value_as_url(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if text.starts_with("http") => Some(text.clone()),
        Value::Object(object) => ["output_url", "audio_url", "url"]
            .iter()
            .filter_map(|key| object.get(*key).and_then(Value::as_str))
            .find(|url| !url.trim().is_empty())
            .map(ToString::to_string),
        _ => None,
    }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) if text.trim().is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiTtsRequest<'a> {
    pub text: &'a str,
    pub language: &'a str,
    pub voice_id: u64,
    pub speech_model: SpeechModel,
    pub output_configuration: ApiOutputConfiguration,
    pub voice_settings: ApiVoiceSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_instructions: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiOutputConfiguration {
    pub format: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiVoiceSettings {
    pub speed: f32,
}

impl<'a> From<&'a TtsRequest> for ApiTtsRequest<'a> {
    fn from(request: &'a TtsRequest) -> Self {
        let user_instructions = match request.speech_model {
            SpeechModel::MarsInstruct => request
                .user_instructions
                .as_deref()
                .filter(|value| !value.trim().is_empty()),
            _ => None,
        };

        Self {
            text: &request.text,
            language: &request.language,
            voice_id: request.voice_id,
            speech_model: request.speech_model,
            output_configuration: ApiOutputConfiguration { format: "wav" },
            voice_settings: ApiVoiceSettings {
                speed: request.speed,
            },
            user_instructions,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiTranslationRequest<'a> {
    pub text: &'a str,
    pub source_language: u32,
    pub target_language: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<u8>,
}

impl<'a> From<&'a TranslationRequest> for ApiTranslationRequest<'a> {
    fn from(request: &'a TranslationRequest) -> Self {
        Self {
            text: &request.text,
            source_language: request.source_language,
            target_language: request.target_language,
            formality: request.formality,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiTranslatedTtsRequest<'a> {
    pub text: &'a str,
    pub voice_id: u64,
    pub source_language: u32,
    pub target_language: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formality: Option<u8>,
}

impl<'a> From<&'a TranslatedTtsRequest> for ApiTranslatedTtsRequest<'a> {
    fn from(request: &'a TranslatedTtsRequest) -> Self {
        Self {
            text: &request.text,
            voice_id: request.voice_id,
            source_language: request.source_language,
            target_language: request.target_language,
            formality: request.formality,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ApiTextToSoundRequest<'a> {
    pub prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_type: Option<crate::AudioType>,
}

impl<'a> From<&'a TextToSoundRequest> for ApiTextToSoundRequest<'a> {
    fn from(request: &'a TextToSoundRequest) -> Self {
        Self {
            prompt: &request.prompt,
            duration: request.duration,
            audio_type: request.audio_type,
        }
    }
}

fn source_part(source: &AudioSource) -> FormPart {
    match source {
        AudioSource::Url(url) => FormPart::text("audio_url", url),
        AudioSource::File { file_name, bytes } => {
            FormPart::file("media_file", file_name.clone(), bytes.clone())
        }
    }
}

pub(crate) fn transcription_form(request: &TranscriptionRequest) -> Vec<FormPart> {
    vec![
        FormPart::text("language", request.language),
        source_part(&request.source),
    ]
}

pub(crate) fn audio_separation_form(source: &AudioSource) -> Vec<FormPart> {
    vec![source_part(source)]
}

pub(crate) fn voice_clone_form(request: &VoiceCloneRequest) -> Vec<FormPart> {
    let mut parts = vec![
        FormPart::text("voice_name", &request.voice_name),
        FormPart::text("gender", request.gender),
        FormPart::file("file", request.file_name.clone(), request.bytes.clone()),
    ];
    if let Some(description) = request
        .description
        .as_deref()
        .filter(|value| !value.trim().is_empty())
    {
        parts.push(FormPart::text("description", description));
    }
    if let Some(age) = request.age {
        parts.push(FormPart::text("age", age));
    }
    if let Some(language) = request.language {
        parts.push(FormPart::text("language", language));
    }
    parts
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiTaskCreated {
    #[serde(default)]
    pub task_id: Option<Value>,
    #[serde(default)]
    pub voice_id: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl ApiTaskCreated {
    pub fn job_id(&self) -> Result<JobId, CambError> {
        self.task_id
            .as_ref()
            .and_then(value_as_job_id)
            .ok_or_else(|| CambError::decode("submit response did not include a task_id"))
    }

    /// Voice creation either answers with the new voice or with a task to poll.
    pub fn into_voice_submission(self) -> Result<VoiceCloneSubmission, CambError> {
        let voice_id = self
            .voice_id
            .as_ref()
            .or(self.id.as_ref())
            .and_then(value_as_u64);

        if let Some(voice_id) = voice_id {
            return Ok(VoiceCloneSubmission::Ready {
                voice_id,
                message: self.message.as_ref().and_then(value_as_text),
            });
        }

        self.job_id().map(VoiceCloneSubmission::Pending).map_err(|_| {
            CambError::decode("voice creation response held neither a voice_id nor a task_id")
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiTaskStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub run_id: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub voice_id: Option<Value>,
    #[serde(default)]
    pub output_url: Option<String>,
}

impl ApiTaskStatus {
    pub fn into_job(self, job_id: JobId) -> Job {
        let status = self
            .status
            .as_deref()
            .map(JobStatus::parse)
            .unwrap_or(JobStatus::Pending);

        let result_ref = if let Some(voice_id) = self.voice_id.as_ref().and_then(value_as_u64) {
            Some(ResultRef::VoiceId(voice_id))
        } else if let Some(run_id) = self.run_id.as_ref().and_then(value_as_u64) {
            Some(ResultRef::RunId(run_id))
        } else {
            self.output_url
                .filter(|url| !url.trim().is_empty())
                .or_else(|| self.message.as_ref().and_then(value_as_url))
                .map(ResultRef::Url)
        };

        let message = self
            .error
            .as_ref()
            .and_then(value_as_text)
            .or_else(|| self.message.as_ref().and_then(value_as_text));

        Job {
            id: job_id,
            status,
            result_ref,
            message,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiVoice {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub voice_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<i64>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub language: Option<Value>,
}

impl From<ApiVoice> for Voice {
    fn from(value: ApiVoice) -> Self {
        Self {
            id: value.id.as_ref().and_then(value_as_u64),
            name: value
                .voice_name
                .or(value.name)
                .unwrap_or_else(|| "Unknown".to_string()),
            gender: value.gender.unwrap_or(0),
            age: value.age.filter(|age| !age.is_null()),
            language: value.language.filter(|language| !language.is_null()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSegment {
    #[serde(default)]
    pub start: Option<f64>,
    #[serde(default)]
    pub end: Option<f64>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub speaker: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiTranscription {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub segments: Vec<ApiSegment>,
    #[serde(default)]
    pub speakers: Option<Vec<Value>>,
}

impl From<ApiTranscription> for Transcription {
    fn from(value: ApiTranscription) -> Self {
        let segments = value
            .segments
            .into_iter()
            .map(|segment| TranscriptSegment {
                start: segment.start.unwrap_or(0.0),
                end: segment.end.unwrap_or(0.0),
                text: segment.text.unwrap_or_default(),
                speaker: segment.speaker.as_ref().and_then(value_as_speaker),
            })
            .collect::<Vec<_>>();

        // Speakers reported by the service win; otherwise collect them from
        // the segments in order of first appearance.
        let speakers = match value.speakers {
            Some(speakers) => speakers.iter().filter_map(value_as_speaker).collect(),
            None => {
                let mut speakers: Vec<String> = Vec::new();
                for speaker in segments.iter().filter_map(|segment| segment.speaker.as_ref()) {
                    if !speakers.contains(speaker) {
                        speakers.push(speaker.clone());
                    }
                }
                speakers
            }
        };

        Self {
            text: value.text.unwrap_or_default(),
            segments,
            speakers,
        }
    }
}

fn value_as_speaker(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiSeparation {
    #[serde(default)]
    pub vocals_url: Option<String>,
    #[serde(default)]
    pub voice_url: Option<String>,
    #[serde(default)]
    pub background_url: Option<String>,
    #[serde(default)]
    pub instrumental_url: Option<String>,
}

impl From<ApiSeparation> for SeparatedAudio {
    fn from(value: ApiSeparation) -> Self {
        Self {
            vocals: value.vocals_url.or(value.voice_url),
            background: value.background_url.or(value.instrumental_url),
        }
    }
}

/// Translation answers arrive as plain text, a JSON object with `text`, a JSON
/// string, or a JSON array of chunks.
pub(crate) fn translation_text(body: &[u8]) -> String {
    let raw = String::from_utf8_lossy(body);
    let trimmed = raw.trim();

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(text)) => text,
        Ok(Value::Object(object)) => match object.get("text") {
            Some(Value::String(text)) => text.clone(),
            _ => trimmed.to_string(),
        },
        Ok(Value::Array(chunks)) => chunks
            .iter()
            .filter_map(|chunk| match chunk {
                Value::String(text) => Some(text.as_str()),
                Value::Object(object) => object.get("text").and_then(Value::as_str),
                _ => None,
            })
            .collect(),
        _ => trimmed.to_string(),
    }
}
