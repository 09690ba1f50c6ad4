use cambclient::{CambClient, CambConfig, TranslationRequest};
use serde::Deserialize;
use serde_json::{Value, json};

use super::{FORMALITY_LEVELS, definition};
use crate::{
    Tool, ToolDefinition, ToolError, ToolFuture, ToolOutput, parse_input, require_non_empty,
    require_one_of,
};

pub const TRANSLATION_TOOL_NAME: &str = "camb_translation";

#[derive(Debug, Deserialize)]
struct TranslationInput {
    text: String,
    source_language: u32,
    target_language: u32,
    #[serde(default)]
    formality: Option<u8>,
}

impl TranslationInput {
    fn validate(&self) -> Result<(), ToolError> {
        require_non_empty("text", &self.text)?;
        if let Some(formality) = self.formality {
            require_one_of("formality", formality, &FORMALITY_LEVELS)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TranslationTool {
    client: CambClient,
}

impl TranslationTool {
    pub fn new(client: CambClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: CambConfig) -> Result<Self, ToolError> {
        Ok(Self::new(CambClient::from_config(config)?))
    }

    async fn run(&self, args: Value) -> Result<ToolOutput, ToolError> {
        let input: TranslationInput = parse_input(args)?;
        input.validate()?;

        let text = self
            .client
            .translate(&TranslationRequest {
                text: input.text,
                source_language: input.source_language,
                target_language: input.target_language,
                formality: input.formality,
            })
            .await?;
        Ok(ToolOutput::Text(text))
    }
}

impl Tool for TranslationTool {
    fn definition(&self) -> ToolDefinition {
        definition(
            TRANSLATION_TOOL_NAME,
            "Translate text between 140+ languages using CAMB AI. Provide source and target \
             language codes (integers) and the text to translate. Common codes: 1=English, \
             2=Spanish, 3=French, 4=German, 5=Italian.",
            json!({
                "type": "object",
                "properties": {
                    "text": {"type": "string", "description": "Text to translate."},
                    "source_language": {
                        "type": "integer",
                        "description": "Source language code. 1=English, 2=Spanish, 3=French, 4=German, 5=Italian, 6=Portuguese, 7=Dutch, 8=Russian, 9=Japanese, 10=Korean, 11=Chinese."
                    },
                    "target_language": {
                        "type": "integer",
                        "description": "Target language code, same table as source_language."
                    },
                    "formality": {
                        "type": "integer",
                        "enum": FORMALITY_LEVELS,
                        "description": "1=formal, 2=informal."
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
