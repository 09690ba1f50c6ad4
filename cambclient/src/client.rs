//! Typed CAMB AI endpoint calls over a pluggable transport.

use std::sync::Arc;

use crate::serde_api::{
    ApiSeparation, ApiTaskCreated, ApiTaskStatus, ApiTextToSoundRequest, ApiTranscription,
    ApiTranslatedTtsRequest, ApiTranslationRequest, ApiTtsRequest, ApiVoice, audio_separation_form, decode, encode,
    transcription_form, translation_text, voice_clone_form,
};
use crate::{
    AudioClip, AudioSource, CambConfig, CambError, CambTransport, FormPart, HttpRequest,
    HttpResponse, Job, JobId, JobKind, JobPollHooks, JobPoller, NoopPollHooks, PollPolicy,
    ResultRef, SeparatedAudio, TextToSoundRequest, Transcription, TranscriptionRequest,
    TranslatedTtsRequest, TranslationRequest, TtsRequest, Voice, VoiceCloneRequest,
    VoiceCloneSubmission,
};

pub const API_KEY_HEADER: &str = "x-api-key";

const TTS_PATH: &str = "tts-stream";
const TRANSLATION_PATH: &str = "translation/stream";
const LIST_VOICES_PATH: &str = "list-voices";

#[derive(Clone)]
pub struct CambClient {
    config: Arc<CambConfig>,
    transport: Arc<dyn CambTransport>,
    poll_hooks: Arc<dyn JobPollHooks>,
}

impl CambClient {
    pub fn new(config: CambConfig, transport: Arc<dyn CambTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            poll_hooks: Arc::new(NoopPollHooks),
        }
    }

    #[cfg(feature = "http-transport")]
    pub fn from_config(config: CambConfig) -> Result<Self, CambError> {
        let transport = crate::CambHttpTransport::from_config(&config)?;
        Ok(Self::new(config, Arc::new(transport)))
    }

    pub fn with_poll_hooks(mut self, hooks: Arc<dyn JobPollHooks>) -> Self {
        self.poll_hooks = hooks;
        self
    }

    pub fn config(&self) -> &CambConfig {
        &self.config
    }

    pub fn poller(&self) -> JobPoller {
        JobPoller::new(PollPolicy::from_config(&self.config)).with_hooks(self.poll_hooks.clone())
    }

    /// Synthesizes speech in a single synchronous call.
    pub async fn tts(&self, request: &TtsRequest) -> Result<AudioClip, CambError> {
        let body = encode(&ApiTtsRequest::from(request))?;
        let response = self
            .execute(HttpRequest::post_json(self.config.endpoint(TTS_PATH), body))
            .await?;
        Ok(AudioClip::detect(response.body, response.content_type.as_deref()))
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, CambError> {
        let body = encode(&ApiTranslationRequest::from(request))?;
        let response = self
            .execute(HttpRequest::post_json(
                self.config.endpoint(TRANSLATION_PATH),
                body,
            ))
            .await?;

        let text = translation_text(&response.body);
        if text.trim().is_empty() {
            return Err(CambError::decode("translation response contained no text"));
        }
        Ok(text)
    }

    pub async fn list_voices(&self) -> Result<Vec<Voice>, CambError> {
        let response = self
            .execute(HttpRequest::get(self.config.endpoint(LIST_VOICES_PATH)))
            .await?;
        let voices: Vec<ApiVoice> = decode(&response.body, "list-voices")?;
        Ok(voices.into_iter().map(Voice::from).collect())
    }

    pub async fn submit_transcription(
        &self,
        request: &TranscriptionRequest,
    ) -> Result<JobId, CambError> {
        self.submit_form(JobKind::Transcription, transcription_form(request))
            .await
    }

    /// Submits translation and synthesis as a single remote job.
    pub async fn submit_translated_tts(
        &self,
        request: &TranslatedTtsRequest,
    ) -> Result<JobId, CambError> {
        self.submit_json(
            JobKind::TranslatedTts,
            encode(&ApiTranslatedTtsRequest::from(request))?,
        )
        .await
    }

    pub async fn submit_text_to_sound(
        &self,
        request: &TextToSoundRequest,
    ) -> Result<JobId, CambError> {
        self.submit_json(
            JobKind::TextToSound,
            encode(&ApiTextToSoundRequest::from(request))?,
        )
        .await
    }

    pub async fn submit_audio_separation(&self, source: &AudioSource) -> Result<JobId, CambError> {
        self.submit_form(JobKind::AudioSeparation, audio_separation_form(source))
            .await
    }

    /// Submits a voice sample. The answer is either the created voice or a
    /// task that must be polled with [`JobKind::VoiceClone`].
    pub async fn create_custom_voice(
        &self,
        request: &VoiceCloneRequest,
    ) -> Result<VoiceCloneSubmission, CambError> {
        let response = self
            .execute(HttpRequest::post_multipart(
                self.config.endpoint(JobKind::VoiceClone.submit_path()),
                voice_clone_form(request),
            ))
            .await?;
        decode::<ApiTaskCreated>(&response.body, JobKind::VoiceClone.operation())?
            .into_voice_submission()
    }

    /// Reads the current state of a submitted job once.
    pub async fn job_status(&self, kind: JobKind, job_id: &JobId) -> Result<Job, CambError> {
        let response = self
            .execute(HttpRequest::get(
                self.config.endpoint(&kind.status_path(job_id)),
            ))
            .await
            .map_err(|error| error.with_job_id(job_id.clone()))?;
        let status: ApiTaskStatus = decode(&response.body, "task status")
            .map_err(|error| error.with_job_id(job_id.clone()))?;
        Ok(status.into_job(job_id.clone()))
    }

    /// Polls `job_id` with the configured policy until it reaches a terminal state.
    pub async fn wait_for_job(&self, kind: JobKind, job_id: &JobId) -> Result<Job, CambError> {
        self.poller()
            .poll(kind.operation(), job_id, |job_id| async move {
                self.job_status(kind, &job_id).await
            })
            .await
    }

    pub async fn transcription_result(&self, job: &Job) -> Result<Transcription, CambError> {
        let response = self.job_output(JobKind::Transcription, job).await?;
        let api: ApiTranscription = decode(&response.body, "transcription result")
            .map_err(|error| error.with_job_id(job.id.clone()))?;
        Ok(Transcription::from(api))
    }

    pub async fn translated_tts_result(&self, job: &Job) -> Result<AudioClip, CambError> {
        let response = self.job_output(JobKind::TranslatedTts, job).await?;
        Ok(AudioClip::detect(response.body, response.content_type.as_deref()))
    }

    pub async fn text_to_sound_result(&self, job: &Job) -> Result<AudioClip, CambError> {
        let response = self.job_output(JobKind::TextToSound, job).await?;
        Ok(AudioClip::detect(response.body, response.content_type.as_deref()))
    }

    pub async fn audio_separation_result(&self, job: &Job) -> Result<SeparatedAudio, CambError> {
        let response = self.job_output(JobKind::AudioSeparation, job).await?;
        let api: ApiSeparation = decode(&response.body, "audio separation result")
            .map_err(|error| error.with_job_id(job.id.clone()))?;
        Ok(SeparatedAudio::from(api))
    }

    async fn submit_form(&self, kind: JobKind, parts: Vec<FormPart>) -> Result<JobId, CambError> {
        let response = self
            .execute(HttpRequest::post_multipart(
                self.config.endpoint(kind.submit_path()),
                parts,
            ))
            .await?;
        decode::<ApiTaskCreated>(&response.body, kind.operation())?.job_id()
    }

    async fn submit_json(&self, kind: JobKind, body: serde_json::Value) -> Result<JobId, CambError> {
        let response = self
            .execute(HttpRequest::post_json(
                self.config.endpoint(kind.submit_path()),
                body,
            ))
            .await?;
        decode::<ApiTaskCreated>(&response.body, kind.operation())?.job_id()
    }

    /// Fetches what a finished job points at: the run's result endpoint, or
    /// an absolute URL reported in its status.
    async fn job_output(&self, kind: JobKind, job: &Job) -> Result<HttpResponse, CambError> {
        let request = match &job.result_ref {
            Some(ResultRef::RunId(run_id)) => {
                let path = kind.result_path(*run_id).ok_or_else(|| {
                    CambError::validation(format!("{kind} jobs do not expose a result endpoint"))
                })?;
                HttpRequest::get(self.config.endpoint(&path))
            }
            Some(ResultRef::Url(url)) => HttpRequest::get(url.as_str()),
            Some(ResultRef::VoiceId(_)) | None => {
                return Err(CambError::decode(format!(
                    "job {} completed without a result reference",
                    job.id
                ))
                .with_job_id(job.id.clone()));
            }
        };
        self.execute(request)
            .await
            .map_err(|error| error.with_job_id(job.id.clone()))
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, CambError> {
        let request = self.authorize(request);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(CambError::http_status(response.status, response.text()));
        }
        Ok(response)
    }

    /// The api key is only attached to requests addressed to the configured base URL.
    fn authorize(&self, request: HttpRequest) -> HttpRequest {
        if is_under_base(&request.url, self.config.base_url()) {
            request.with_header(API_KEY_HEADER, self.config.api_key().expose())
        } else {
            request
        }
    }
}

/// `url` must equal `base` or continue it at a path, query or fragment
/// boundary, so `https://api.test` never matches `https://api.test.other`.
fn is_under_base(url: &str, base: &str) -> bool {
    let base = base.trim_end_matches('/');
    match url.strip_prefix(base) {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}

impl std::fmt::Debug for CambClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CambClient")
            .field("base_url", &self.config.base_url())
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
