//! The eight CAMB AI tools.

mod audio_separation;
mod text_to_sound;
mod transcription;
mod translated_tts;
mod translation;
mod tts;
mod voice_clone;
mod voice_list;

use cambclient::CambError;
use serde::Serialize;
use serde_json::Value;

use crate::{ToolDefinition, ToolError};

pub use audio_separation::{AUDIO_SEPARATION_TOOL_NAME, AudioSeparationTool};
pub use text_to_sound::{TEXT_TO_SOUND_TOOL_NAME, TextToSoundTool};
pub use transcription::{TRANSCRIPTION_TOOL_NAME, TranscriptionTool};
pub use translated_tts::{TRANSLATED_TTS_TOOL_NAME, TranslatedTtsTool, default_locale};
pub use translation::{TRANSLATION_TOOL_NAME, TranslationTool};
pub use tts::{TTS_TOOL_NAME, TtsTool};
pub use voice_clone::{VOICE_CLONE_TOOL_NAME, VoiceCloneTool};
pub use voice_list::{VOICE_LIST_TOOL_NAME, VoiceListTool};

pub(crate) const FORMALITY_LEVELS: [u8; 2] = [1, 2];

fn definition(name: &str, description: &str, schema: Value) -> ToolDefinition {
    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: schema.to_string(),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|err| ToolError::from(CambError::decode(err.to_string())))
}
