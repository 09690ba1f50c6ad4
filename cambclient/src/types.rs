//! Typed requests and results for the CAMB AI endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::JobId;

pub const DEFAULT_LANGUAGE: &str = "en-us";
pub const DEFAULT_VOICE_ID: u64 = 147_320;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpeechModel {
    #[default]
    MarsFlash,
    MarsPro,
    MarsInstruct,
}

impl SpeechModel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MarsFlash => "mars-flash",
            Self::MarsPro => "mars-pro",
            Self::MarsInstruct => "mars-instruct",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TtsRequest {
    pub text: String,
    pub language: String,
    pub voice_id: u64,
    pub speech_model: SpeechModel,
    pub speed: f32,
    /// Only forwarded when `speech_model` is `MarsInstruct`.
    pub user_instructions: Option<String>,
}

impl TtsRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            voice_id: DEFAULT_VOICE_ID,
            speech_model: SpeechModel::default(),
            speed: 1.0,
            user_instructions: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_voice_id(mut self, voice_id: u64) -> Self {
        self.voice_id = voice_id;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source_language: u32,
    pub target_language: u32,
    pub formality: Option<u8>,
}

/// Translation and synthesis performed as one remote job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedTtsRequest {
    pub text: String,
    pub source_language: u32,
    pub target_language: u32,
    pub voice_id: u64,
    pub formality: Option<u8>,
}

/// Where an uploaded job reads its audio from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    Url(String),
    File { file_name: String, bytes: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRequest {
    pub language: u32,
    pub source: AudioSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioType {
    Music,
    Sound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextToSoundRequest {
    pub prompt: String,
    pub duration: Option<f64>,
    pub audio_type: Option<AudioType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceCloneRequest {
    pub voice_name: String,
    pub gender: u8,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub description: Option<String>,
    pub age: Option<u32>,
    pub language: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    pub id: Option<u64>,
    pub name: String,
    pub gender: i64,
    pub age: Option<Value>,
    pub language: Option<Value>,
}

impl Voice {
    pub fn gender_label(&self) -> &'static str {
        gender_label(self.gender)
    }
}

pub fn gender_label(code: i64) -> &'static str {
    match code {
        0 => "not_specified",
        1 => "male",
        2 => "female",
        9 => "not_applicable",
        _ => "unknown",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub speaker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transcription {
    pub text: String,
    pub segments: Vec<TranscriptSegment>,
    pub speakers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatedAudio {
    pub vocals: Option<String>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceCloneSubmission {
    Ready {
        voice_id: u64,
        message: Option<String>,
    },
    Pending(JobId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speech_models_use_kebab_case_names() {
        assert_eq!(
            serde_json::to_value(SpeechModel::MarsInstruct).expect("serialize"),
            Value::String("mars-instruct".to_string())
        );
        assert_eq!(
            serde_json::from_value::<SpeechModel>(Value::String("mars-pro".to_string()))
                .expect("deserialize"),
            SpeechModel::MarsPro
        );
        assert_eq!(SpeechModel::default().as_str(), "mars-flash");
    }

    #[test]
    fn gender_codes_map_to_labels() {
        assert_eq!(gender_label(0), "not_specified");
        assert_eq!(gender_label(1), "male");
        assert_eq!(gender_label(2), "female");
        assert_eq!(gender_label(9), "not_applicable");
        assert_eq!(gender_label(5), "unknown");
    }

    #[test]
    fn tts_request_defaults() {
        let request = TtsRequest::new("Hello there");
        assert_eq!(request.language, "en-us");
        assert_eq!(request.voice_id, 147_320);
        assert_eq!(request.speed, 1.0);
        assert_eq!(request.user_instructions, None);
    }
}
