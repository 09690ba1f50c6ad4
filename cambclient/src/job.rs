//! Remote job identity, status, and result references.
//!
//! ```rust
//! use cambclient::{JobId, JobStatus};
//!
//! assert_eq!(JobId::from(17_u64).as_str(), "17");
//! assert_eq!(JobStatus::parse("SUCCESS"), JobStatus::Succeeded);
//! assert_eq!(JobStatus::parse("in_progress"), JobStatus::Running);
//! assert!(JobStatus::parse("error").is_terminal());
//! ```

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for JobId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for JobId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl JobStatus {
    /// Maps a remote status label onto the client state machine.
    ///
    /// Unknown labels are treated as still pending.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" | "succeeded" | "completed" | "complete" | "done" => Self::Succeeded,
            "failed" | "failure" | "error" | "timeout" => Self::Failed,
            "running" | "in_progress" | "processing" => Self::Running,
            _ => Self::Pending,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultRef {
    RunId(u64),
    Url(String),
    VoiceId(u64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: JobId,
    pub status: JobStatus,
    pub result_ref: Option<ResultRef>,
    pub message: Option<String>,
}

impl Job {
    pub fn new(id: impl Into<JobId>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            status,
            result_ref: None,
            message: None,
        }
    }

    pub fn with_result_ref(mut self, result_ref: ResultRef) -> Self {
        self.result_ref = Some(result_ref);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn run_id(&self) -> Option<u64> {
        match self.result_ref {
            Some(ResultRef::RunId(run_id)) => Some(run_id),
            _ => None,
        }
    }
}

/// Asynchronous endpoint families that follow the submit-then-poll flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    Transcription,
    TranslatedTts,
    TextToSound,
    AudioSeparation,
    VoiceClone,
}

impl JobKind {
    pub fn operation(self) -> &'static str {
        match self {
            Self::Transcription => "transcription",
            Self::TranslatedTts => "translated_tts",
            Self::TextToSound => "text_to_sound",
            Self::AudioSeparation => "audio_separation",
            Self::VoiceClone => "voice_clone",
        }
    }

    pub fn submit_path(self) -> &'static str {
        match self {
            Self::Transcription => "transcribe",
            Self::TranslatedTts => "translated-tts",
            Self::TextToSound => "text-to-sound",
            Self::AudioSeparation => "audio-separation",
            Self::VoiceClone => "create-custom-voice",
        }
    }

    pub fn status_path(self, job_id: &JobId) -> String {
        format!("{}/{}", self.submit_path(), job_id)
    }

    /// Result lookup path; voice cloning reports its result inline.
    pub fn result_path(self, run_id: u64) -> Option<String> {
        match self {
            Self::Transcription => Some(format!("transcription-result/{run_id}")),
            Self::TranslatedTts => Some(format!("tts-result/{run_id}")),
            Self::TextToSound => Some(format!("text-to-sound-result/{run_id}")),
            Self::AudioSeparation => Some(format!("audio-separation-result/{run_id}")),
            Self::VoiceClone => None,
        }
    }
}

impl Display for JobKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.operation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_map_case_insensitively() {
        assert_eq!(JobStatus::parse("completed"), JobStatus::Succeeded);
        assert_eq!(JobStatus::parse("FAILED"), JobStatus::Failed);
        assert_eq!(JobStatus::parse("Processing"), JobStatus::Running);
        assert_eq!(JobStatus::parse("PENDING"), JobStatus::Pending);
        assert_eq!(JobStatus::parse("something-new"), JobStatus::Pending);
        assert!(!JobStatus::Running.is_terminal());
    }

    #[test]
    fn job_kind_paths_are_stable() {
        let job_id = JobId::new("abc");
        assert_eq!(JobKind::Transcription.status_path(&job_id), "transcribe/abc");
        assert_eq!(
            JobKind::AudioSeparation.result_path(9).as_deref(),
            Some("audio-separation-result/9")
        );
        assert_eq!(JobKind::VoiceClone.result_path(9), None);
        assert_eq!(
            JobKind::TranslatedTts.status_path(&job_id),
            "translated-tts/abc"
        );
        assert_eq!(
            JobKind::TranslatedTts.result_path(3).as_deref(),
            Some("tts-result/3")
        );
        assert_eq!(JobKind::TextToSound.to_string(), "text_to_sound");
    }

    #[test]
    fn run_id_only_reads_run_references() {
        let job = Job::new("1", JobStatus::Succeeded).with_result_ref(ResultRef::RunId(5));
        assert_eq!(job.run_id(), Some(5));

        let url_job = Job::new("2", JobStatus::Succeeded)
            .with_result_ref(ResultRef::Url("https://example.test/a.wav".to_string()));
        assert_eq!(url_job.run_id(), None);
    }
}
