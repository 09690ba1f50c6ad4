//! CAMB AI client layer: configuration, transport, typed endpoints and job polling.
//!
//! ```rust
//! use cambclient::{CambConfig, JobKind, PollPolicy};
//!
//! let config = CambConfig::builder()
//!     .api_key("camb-test-key")
//!     .build()
//!     .expect("config should resolve");
//!
//! let policy = PollPolicy::from_config(&config);
//! assert_eq!(policy.max_attempts, 60);
//! assert_eq!(JobKind::Transcription.submit_path(), "transcribe");
//! ```

mod audio;
mod client;
mod config;
mod credentials;
mod error;
mod job;
mod poller;
mod serde_api;
mod transport;
mod types;

pub mod prelude;

pub use cambcommon::BoxFuture;

pub type ClientFuture<'a, T> = BoxFuture<'a, T>;

pub use audio::{AudioClip, AudioFormat};
pub use client::{API_KEY_HEADER, CambClient};
pub use config::{
    CambConfig, CambConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MAX_POLL_ATTEMPTS,
    DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT,
};
pub use credentials::{API_KEY_ENV, SecretString, resolve_api_key};
pub use error::{CambError, CambErrorKind};
pub use job::{Job, JobId, JobKind, JobStatus, ResultRef};
pub use poller::{JobPollHooks, JobPoller, NoopPollHooks, PollPolicy, poll_job};
#[cfg(feature = "http-transport")]
pub use transport::CambHttpTransport;
pub use transport::{CambTransport, FormPart, HttpMethod, HttpRequest, HttpResponse, RequestBody};
pub use types::{
    AudioSource, AudioType, DEFAULT_LANGUAGE, DEFAULT_VOICE_ID, SeparatedAudio, SpeechModel,
    TextToSoundRequest, TranscriptSegment, Transcription, TranscriptionRequest,
    TranslatedTtsRequest, TranslationRequest, TtsRequest, Voice, VoiceCloneRequest,
    VoiceCloneSubmission, gender_label,
};
