use cambclient::{
    AudioClip, CambClient, CambConfig, CambError, DEFAULT_VOICE_ID, JobKind, SpeechModel,
    TranslatedTtsRequest, TranslationRequest, TtsRequest,
};
use serde::Deserialize;
use serde_json::{Value, json};

use super::{FORMALITY_LEVELS, definition};
use crate::{
    OutputFormat, Tool, ToolDefinition, ToolError, ToolFuture, ToolOutput, parse_input,
    require_non_empty, require_one_of, shape_audio,
};

pub const TRANSLATED_TTS_TOOL_NAME: &str = "camb_translated_tts";

const TRANSLATION_STAGE: &str = "translation";
const SYNTHESIS_STAGE: &str = "synthesis";
const REMOTE_JOB_STAGE: &str = "remote_job";

/// Speech locale used for a CAMB AI integer language code when the caller
/// does not pass `target_locale`. Codes outside this table are translated
/// and spoken by the service's own translated-TTS job.
pub fn default_locale(language: u32) -> Option<&'static str> {
    let locale = match language {
        1 => "en-us",
        2 => "es-es",
        3 => "fr-fr",
        4 => "de-de",
        5 => "it-it",
        6 => "pt-br",
        7 => "nl-nl",
        8 => "ru-ru",
        9 => "ja-jp",
        10 => "ko-kr",
        11 => "zh-cn",
        _ => return None,
    };
    Some(locale)
}

fn default_voice_id() -> u64 {
    DEFAULT_VOICE_ID
}

#[derive(Debug, Deserialize)]
struct TranslatedTtsInput {
    text: String,
    source_language: u32,
    target_language: u32,
    #[serde(default = "default_voice_id")]
    voice_id: u64,
    #[serde(default)]
    output_format: OutputFormat,
    #[serde(default)]
    formality: Option<u8>,
    #[serde(default)]
    target_locale: Option<String>,
}

impl TranslatedTtsInput {
    /// Returns the synthesis locale, or `None` when the remote job should
    /// handle the whole request.
    fn validate(&self) -> Result<Option<String>, ToolError> {
        require_non_empty("text", &self.text)?;
        if self.output_format == OutputFormat::Bytes {
            return Err(ToolError::validation(
                "'output_format' must be one of [file_path, base64], got bytes",
            ));
        }
        if let Some(formality) = self.formality {
            require_one_of("formality", formality, &FORMALITY_LEVELS)?;
        }
        Ok(self.resolve_locale())
    }

    fn resolve_locale(&self) -> Option<String> {
        self.target_locale
            .as_deref()
            .map(str::trim)
            .filter(|locale| !locale.is_empty())
            .or_else(|| default_locale(self.target_language))
            .map(ToString::to_string)
    }
}

/// Translates text, then speaks the translation with the chosen voice.
///
/// Failures report the stage (`translation` or `synthesis`) that produced them.
/// Languages without a known speech locale run as one remote job instead,
/// whose failures report the `remote_job` stage.
#[derive(Debug, Clone)]
pub struct TranslatedTtsTool {
    client: CambClient,
}

impl TranslatedTtsTool {
    pub fn new(client: CambClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: CambConfig) -> Result<Self, ToolError> {
        Ok(Self::new(CambClient::from_config(config)?))
    }

    async fn run(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: TranslatedTtsInput = parse_input(args)?;
        let clip = match input.validate()? {
            Some(locale) => self.translate_then_speak(&input, locale).await?,
            None => self
                .remote_job(&input)
                .await
                .map_err(|error| ToolError::from(error).with_stage(REMOTE_JOB_STAGE))?,
        };

        shape_audio(clip.into_playable(), input.output_format)
            .await
            .map_err(|error| error.with_stage(SYNTHESIS_STAGE))
    }

    async fn translate_then_speak(
        &self,
        input: &TranslatedTtsInput,
        locale: String,
    ) -> Result<AudioClip, ToolError> {
        let translated = self
            .client
            .translate(&TranslationRequest {
                text: input.text.clone(),
                source_language: input.source_language,
                target_language: input.target_language,
                formality: input.formality,
            })
            .await
            .map_err(|error| ToolError::from(error).with_stage(TRANSLATION_STAGE))?;

        let request = TtsRequest {
            text: translated,
            language: locale,
            voice_id: input.voice_id,
            speech_model: SpeechModel::default(),
            speed: 1.0,
            user_instructions: None,
        };
        self.client
            .tts(&request)
            .await
            .map_err(|error| ToolError::from(error).with_stage(SYNTHESIS_STAGE))
    }

    async fn remote_job(&self, input: &TranslatedTtsInput) -> Result<AudioClip, CambError> {
        let job_id = self
            .client
            .submit_translated_tts(&TranslatedTtsRequest {
                text: input.text.clone(),
                source_language: input.source_language,
                target_language: input.target_language,
                voice_id: input.voice_id,
                formality: input.formality,
            })
            .await?;
        let job = self
            .client
            .wait_for_job(JobKind::TranslatedTts, &job_id)
            .await?;
        self.client.translated_tts_result(&job).await
    }
}

impl Tool for TranslatedTtsTool {
    fn definition(&self) -> ToolDefinition {
        definition(
            TRANSLATED_TTS_TOOL_NAME,
            "Translate text and convert it to speech in one step. Provide source text, source \
             language, target language, and voice ID. Returns audio of the translated text \
             spoken in the target language.",
            json!({
                "type": "object",
                "properties": {
                    "text": {"type": "string", "description": "Text to translate and speak."},
                    "source_language": {
                        "type": "integer",
                        "description": "Source language code. 1=English, 2=Spanish, 3=French."
                    },
                    "target_language": {
                        "type": "integer",
                        "description": "Target language code for the output speech."
                    },
                    "voice_id": {"type": "integer", "default": DEFAULT_VOICE_ID},
                    "output_format": {
                        "type": "string",
                        "enum": ["file_path", "base64"],
                        "default": "file_path"
                    },
                    "formality": {
                        "type": "integer",
                        "enum": FORMALITY_LEVELS,
                        "description": "1=formal, 2=informal."
                    },
                    "target_locale": {
                        "type": "string",
                        "description": "BCP-47 locale for synthesis, e.g. 'es-mx'. Derived from target_language when omitted; languages without a known locale are translated and spoken in one remote job."
                    }
                },
                "required": ["text", "source_language", "target_language"]
            }),
        )
    }

    fn execute<'a>(&'a self, args: Value) -> ToolFuture<'a, Result<ToolOutput, ToolError>> {
        Box::pin(self.run(args))
    }
}
