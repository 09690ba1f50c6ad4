//! Flag-filtered bundle of the CAMB AI tools sharing one client.
//!
//! ```rust
//! use cambtooling::ToolSelection;
//!
//! let selection = ToolSelection::none().tts(true).voice_list(true);
//! assert_eq!(selection.enabled_count(), 2);
//! assert_eq!(ToolSelection::default().enabled_count(), 8);
//! ```

use std::sync::Arc;

use cambclient::{CambClient, CambConfig};

use crate::tools::{
    AudioSeparationTool, TextToSoundTool, TranscriptionTool, TranslatedTtsTool, TranslationTool,
    TtsTool, VoiceCloneTool, VoiceListTool,
};
use crate::{DefaultToolRuntime, Tool, ToolError, ToolRegistry};

/// One inclusion flag per tool. Everything is included by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSelection {
    pub tts: bool,
    pub translated_tts: bool,
    pub translation: bool,
    pub transcription: bool,
    pub voice_list: bool,
    pub voice_clone: bool,
    pub text_to_sound: bool,
    pub audio_separation: bool,
}

impl Default for ToolSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl ToolSelection {
    pub fn all() -> Self {
        Self {
            tts: true,
            translated_tts: true,
            translation: true,
            transcription: true,
            voice_list: true,
            voice_clone: true,
            text_to_sound: true,
            audio_separation: true,
        }
    }

    pub fn none() -> Self {
        Self {
            tts: false,
            translated_tts: false,
            translation: false,
            transcription: false,
            voice_list: false,
            voice_clone: false,
            text_to_sound: false,
            audio_separation: false,
        }
    }

    pub fn tts(mut self, include: bool) -> Self {
        self.tts = include;
        self
    }

    pub fn translated_tts(mut self, include: bool) -> Self {
        self.translated_tts = include;
        self
    }

    pub fn translation(mut self, include: bool) -> Self {
        self.translation = include;
        self
    }

    pub fn transcription(mut self, include: bool) -> Self {
        self.transcription = include;
        self
    }

    pub fn voice_list(mut self, include: bool) -> Self {
        self.voice_list = include;
        self
    }

    pub fn voice_clone(mut self, include: bool) -> Self {
        self.voice_clone = include;
        self
    }

    pub fn text_to_sound(mut self, include: bool) -> Self {
        self.text_to_sound = include;
        self
    }

    pub fn audio_separation(mut self, include: bool) -> Self {
        self.audio_separation = include;
        self
    }

    pub fn enabled_count(&self) -> usize {
        [
            self.tts,
            self.translated_tts,
            self.translation,
            self.transcription,
            self.voice_list,
            self.voice_clone,
            self.text_to_sound,
            self.audio_separation,
        ]
        .into_iter()
        .filter(|included| *included)
        .count()
    }
}

#[derive(Debug, Clone)]
pub struct CambToolkit {
    client: CambClient,
    selection: ToolSelection,
}

impl CambToolkit {
    pub fn new(client: CambClient, selection: ToolSelection) -> Self {
        Self { client, selection }
    }

    pub fn from_config(config: CambConfig, selection: ToolSelection) -> Result<Self, ToolError> {
        Ok(Self::new(CambClient::from_config(config)?, selection))
    }

    /// Resolves the api key from `CAMB_API_KEY` with default settings.
    pub fn from_env(selection: ToolSelection) -> Result<Self, ToolError> {
        Self::from_config(CambConfig::from_env()?, selection)
    }

    pub fn client(&self) -> &CambClient {
        &self.client
    }

    pub fn selection(&self) -> ToolSelection {
        self.selection
    }

    /// Included tools in declaration order.
    pub fn get_tools(&self) -> Vec<Arc<dyn Tool>> {
        let selection = self.selection;
        let client = &self.client;
        let mut tools: Vec<Arc<dyn Tool>> = Vec::with_capacity(selection.enabled_count());

        if selection.tts {
            tools.push(Arc::new(TtsTool::new(client.clone())));
        }
        if selection.translated_tts {
            tools.push(Arc::new(TranslatedTtsTool::new(client.clone())));
        }
        if selection.translation {
            tools.push(Arc::new(TranslationTool::new(client.clone())));
        }
        if selection.transcription {
            tools.push(Arc::new(TranscriptionTool::new(client.clone())));
        }
        if selection.voice_list {
            tools.push(Arc::new(VoiceListTool::new(client.clone())));
        }
        if selection.voice_clone {
            tools.push(Arc::new(VoiceCloneTool::new(client.clone())));
        }
        if selection.text_to_sound {
            tools.push(Arc::new(TextToSoundTool::new(client.clone())));
        }
        if selection.audio_separation {
            tools.push(Arc::new(AudioSeparationTool::new(client.clone())));
        }

        tools
    }

    pub fn registry(&self) -> ToolRegistry {
        ToolRegistry::from_tools(self.get_tools())
    }

    pub fn runtime(&self) -> DefaultToolRuntime {
        DefaultToolRuntime::new(Arc::new(self.registry()))
    }
}
