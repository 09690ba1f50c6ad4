//! Small convenience constructors for common types.

use serde_json::Value;

use crate::{
    AUDIO_SEPARATION_TOOL_NAME, SessionId, TEXT_TO_SOUND_TOOL_NAME, TRANSCRIPTION_TOOL_NAME,
    TRANSLATED_TTS_TOOL_NAME, TRANSLATION_TOOL_NAME, TTS_TOOL_NAME, ToolCall, ToolError,
    ToolExecutionContext, ToolSelection, VOICE_CLONE_TOOL_NAME, VOICE_LIST_TOOL_NAME,
};

pub fn tool_call(id: impl Into<String>, name: impl Into<String>, arguments: &Value) -> ToolCall {
    ToolCall::new(id, name, arguments.to_string())
}

pub fn session_context(session_id: impl Into<SessionId>) -> ToolExecutionContext {
    ToolExecutionContext::new(session_id)
}

/// Resolves a tool name or short alias to its registered name.
pub fn parse_tool_name(value: &str) -> Option<&'static str> {
    let value = value.trim().to_ascii_lowercase();
    let value = value.strip_prefix("camb_").unwrap_or(&value);
    match value.replace('-', "_").as_str() {
        "tts" | "speech" => Some(TTS_TOOL_NAME),
        "translated_tts" => Some(TRANSLATED_TTS_TOOL_NAME),
        "translation" | "translate" => Some(TRANSLATION_TOOL_NAME),
        "transcription" | "transcribe" => Some(TRANSCRIPTION_TOOL_NAME),
        "voice_list" | "voices" => Some(VOICE_LIST_TOOL_NAME),
        "voice_clone" | "clone" => Some(VOICE_CLONE_TOOL_NAME),
        "text_to_sound" | "sound" => Some(TEXT_TO_SOUND_TOOL_NAME),
        "audio_separation" | "separation" => Some(AUDIO_SEPARATION_TOOL_NAME),
        _ => None,
    }
}

/// Builds a selection from tool names, e.g. a comma-separated config value.
pub fn selection_from_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<ToolSelection, ToolError> {
    let mut selection = ToolSelection::none();
    for name in names.into_iter().filter(|name| !name.trim().is_empty()) {
        selection = match parse_tool_name(name) {
            Some(TTS_TOOL_NAME) => selection.tts(true),
            Some(TRANSLATED_TTS_TOOL_NAME) => selection.translated_tts(true),
            Some(TRANSLATION_TOOL_NAME) => selection.translation(true),
            Some(TRANSCRIPTION_TOOL_NAME) => selection.transcription(true),
            Some(VOICE_LIST_TOOL_NAME) => selection.voice_list(true),
            Some(VOICE_CLONE_TOOL_NAME) => selection.voice_clone(true),
            Some(TEXT_TO_SOUND_TOOL_NAME) => selection.text_to_sound(true),
            Some(AUDIO_SEPARATION_TOOL_NAME) => selection.audio_separation(true),
            _ => {
                return Err(ToolError::validation(format!(
                    "unknown tool name '{}'",
                    name.trim()
                )));
            }
        };
    }
    Ok(selection)
}
