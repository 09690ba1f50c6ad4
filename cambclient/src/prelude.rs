//! Common `cambclient` imports for downstream crates.

pub use crate::{
    AudioClip, AudioFormat, AudioSource, CambClient, CambConfig, CambError, CambErrorKind,
    CambTransport, Job, JobId, JobKind, JobPollHooks, JobPoller, JobStatus, PollPolicy,
    ResultRef, SpeechModel, TtsRequest,
};
pub use cambcommon::BoxFuture;
