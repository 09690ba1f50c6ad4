//! Fixed-interval job polling and its operational hook contract.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_timer::Delay;

use crate::{CambConfig, CambError, Job, JobId, JobStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn from_config(config: &CambConfig) -> Self {
        Self::new(config.poll_interval(), config.max_poll_attempts())
    }

    /// Upper bound on time spent waiting between status checks.
    pub fn max_wait(&self) -> Duration {
        self.interval * self.max_attempts.saturating_sub(1)
    }
}

pub trait JobPollHooks: Send + Sync {
    fn on_poll_start(&self, _operation: &str, _job_id: &JobId) {}

    fn on_poll_attempt(&self, _operation: &str, _job_id: &JobId, _attempt: u32, _status: JobStatus) {
    }

    fn on_job_succeeded(&self, _operation: &str, _job_id: &JobId, _attempts: u32) {}

    fn on_job_failed(&self, _operation: &str, _job_id: &JobId, _attempts: u32, _error: &CambError) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPollHooks;

impl JobPollHooks for NoopPollHooks {}

/// Drives a submitted job to a terminal state.
///
/// Status checks are separated by `policy.interval`; no wait happens after the
/// last check. Errors returned by `check` end polling immediately.
pub async fn poll_job<Check, CheckFuture, Sleep, SleepFuture>(
    operation: &str,
    job_id: &JobId,
    policy: &PollPolicy,
    hooks: &dyn JobPollHooks,
    mut check: Check,
    mut sleep: Sleep,
) -> Result<Job, CambError>
where
    Check: FnMut(JobId) -> CheckFuture,
    CheckFuture: Future<Output = Result<Job, CambError>>,
    Sleep: FnMut(Duration) -> SleepFuture,
    SleepFuture: Future<Output = ()>,
{
    hooks.on_poll_start(operation, job_id);
    let mut attempt = 1;

    loop {
        let job = match check(job_id.clone()).await {
            Ok(job) => job,
            Err(error) => {
                let error = if error.job_id.is_some() {
                    error
                } else {
                    error.with_job_id(job_id.clone())
                };
                hooks.on_job_failed(operation, job_id, attempt, &error);
                return Err(error);
            }
        };
        hooks.on_poll_attempt(operation, job_id, attempt, job.status);

        match job.status {
            JobStatus::Succeeded => {
                hooks.on_job_succeeded(operation, job_id, attempt);
                return Ok(job);
            }
            JobStatus::Failed => {
                let diagnostic = job
                    .message
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string());
                let error = CambError::remote_job_failed(job_id.clone(), diagnostic);
                hooks.on_job_failed(operation, job_id, attempt, &error);
                return Err(error);
            }
            JobStatus::Pending | JobStatus::Running => {}
        }

        if attempt >= policy.max_attempts {
            let error = CambError::polling_timeout(job_id.clone(), attempt);
            hooks.on_job_failed(operation, job_id, attempt, &error);
            return Err(error);
        }

        sleep(policy.interval).await;
        attempt += 1;
    }
}

/// Poller bound to a policy and hooks, waiting on a real timer.
#[derive(Clone)]
pub struct JobPoller {
    policy: PollPolicy,
    hooks: Arc<dyn JobPollHooks>,
}

impl JobPoller {
    pub fn new(policy: PollPolicy) -> Self {
        Self {
            policy,
            hooks: Arc::new(NoopPollHooks),
        }
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn JobPollHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    pub async fn poll<Check, CheckFuture>(
        &self,
        operation: &str,
        job_id: &JobId,
        check: Check,
    ) -> Result<Job, CambError>
    where
        Check: FnMut(JobId) -> CheckFuture,
        CheckFuture: Future<Output = Result<Job, CambError>>,
    {
        poll_job(
            operation,
            job_id,
            &self.policy,
            self.hooks.as_ref(),
            check,
            Delay::new,
        )
        .await
    }
}

impl std::fmt::Debug for JobPoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobPoller")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::{CambErrorKind, ResultRef};

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl JobPollHooks for RecordingHooks {
        fn on_poll_start(&self, operation: &str, job_id: &JobId) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("start:{operation}:{job_id}"));
        }

        fn on_poll_attempt(&self, operation: &str, _job_id: &JobId, attempt: u32, status: JobStatus) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("attempt:{operation}:{attempt}:{status:?}"));
        }

        fn on_job_succeeded(&self, operation: &str, _job_id: &JobId, attempts: u32) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("success:{operation}:{attempts}"));
        }

        fn on_job_failed(&self, operation: &str, _job_id: &JobId, attempts: u32, error: &CambError) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("failure:{operation}:{attempts}:{:?}", error.kind));
        }
    }

    struct ScriptedStatus {
        statuses: Mutex<VecDeque<Result<Job, CambError>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedStatus {
        fn new(statuses: Vec<Result<Job, CambError>>) -> Self {
            Self {
                statuses: Mutex::new(statuses.into()),
                calls: Mutex::new(0),
            }
        }

        fn next(&self, job_id: JobId) -> Result<Job, CambError> {
            *self.calls.lock().expect("calls lock") += 1;
            self.statuses
                .lock()
                .expect("statuses lock")
                .pop_front()
                .unwrap_or_else(|| Ok(Job::new(job_id, JobStatus::Pending)))
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().expect("calls lock")
        }
    }

    fn pending() -> Result<Job, CambError> {
        Ok(Job::new("job-1", JobStatus::Pending))
    }

    #[tokio::test]
    async fn returns_succeeded_job_after_pending_checks() {
        let script = ScriptedStatus::new(vec![
            pending(),
            Ok(Job::new("job-1", JobStatus::Running)),
            Ok(Job::new("job-1", JobStatus::Succeeded).with_result_ref(ResultRef::RunId(77))),
        ]);
        let hooks = RecordingHooks::default();
        let sleeps = Mutex::new(Vec::new());
        let policy = PollPolicy::new(Duration::from_millis(250), 10);

        let job = poll_job(
            "transcription",
            &JobId::new("job-1"),
            &policy,
            &hooks,
            |job_id| {
                let next = script.next(job_id);
                async move { next }
            },
            |delay| {
                sleeps.lock().expect("sleep lock").push(delay);
                async {}
            },
        )
        .await
        .expect("job should succeed");

        assert_eq!(job.run_id(), Some(77));
        assert_eq!(script.calls(), 3);
        assert_eq!(
            sleeps.lock().expect("sleep lock").clone(),
            vec![Duration::from_millis(250), Duration::from_millis(250)]
        );

        let events = hooks.events.lock().expect("events lock").clone();
        assert_eq!(events.first().map(String::as_str), Some("start:transcription:job-1"));
        assert!(events.contains(&"attempt:transcription:2:Running".to_string()));
        assert!(events.contains(&"success:transcription:3".to_string()));
    }

    #[tokio::test]
    async fn times_out_after_max_attempts() {
        let script = ScriptedStatus::new(Vec::new());
        let hooks = RecordingHooks::default();
        let sleeps = Mutex::new(0_u32);
        let policy = PollPolicy::new(Duration::ZERO, 5);

        let error = poll_job(
            "text_to_sound",
            &JobId::new("job-9"),
            &policy,
            &hooks,
            |job_id| {
                let next = script.next(job_id);
                async move { next }
            },
            |_| {
                *sleeps.lock().expect("sleep lock") += 1;
                async {}
            },
        )
        .await
        .expect_err("polling should time out");

        assert_eq!(error.kind, CambErrorKind::PollingTimeout);
        assert_eq!(error.attempts, Some(5));
        assert_eq!(error.job_id, Some(JobId::new("job-9")));
        assert_eq!(script.calls(), 5);
        assert_eq!(*sleeps.lock().expect("sleep lock"), 4);
        assert!(
            hooks
                .events
                .lock()
                .expect("events lock")
                .contains(&"failure:text_to_sound:5:PollingTimeout".to_string())
        );
    }

    #[tokio::test]
    async fn failed_status_stops_on_first_check() {
        let script = ScriptedStatus::new(vec![Ok(
            Job::new("job-2", JobStatus::Failed).with_message("unsupported codec")
        )]);

        let error = poll_job(
            "audio_separation",
            &JobId::new("job-2"),
            &PollPolicy::new(Duration::ZERO, 5),
            &NoopPollHooks,
            |job_id| {
                let next = script.next(job_id);
                async move { next }
            },
            |_| async {},
        )
        .await
        .expect_err("failed job should error");

        assert_eq!(error.kind, CambErrorKind::RemoteJobFailed);
        assert!(error.message.contains("unsupported codec"));
        assert_eq!(script.calls(), 1);
    }

    #[tokio::test]
    async fn transport_errors_propagate_without_retry() {
        let script = ScriptedStatus::new(vec![
            pending(),
            Err(CambError::http_status(502, "bad gateway")),
            Ok(Job::new("job-3", JobStatus::Succeeded)),
        ]);

        let error = poll_job(
            "transcription",
            &JobId::new("job-3"),
            &PollPolicy::new(Duration::ZERO, 5),
            &NoopPollHooks,
            |job_id| {
                let next = script.next(job_id);
                async move { next }
            },
            |_| async {},
        )
        .await
        .expect_err("transport error should propagate");

        assert_eq!(error.kind, CambErrorKind::Transport);
        assert_eq!(error.status, Some(502));
        assert_eq!(error.job_id, Some(JobId::new("job-3")));
        assert_eq!(script.calls(), 2);
    }

    #[test]
    fn policy_clamps_attempts_and_bounds_wait() {
        let policy = PollPolicy::new(Duration::from_secs(2), 0);
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.max_wait(), Duration::ZERO);

        let policy = PollPolicy::new(Duration::from_secs(2), 4);
        assert_eq!(policy.max_wait(), Duration::from_secs(6));
    }

    #[tokio::test]
    async fn job_poller_uses_real_timer_between_checks() {
        let script = ScriptedStatus::new(vec![
            pending(),
            Ok(Job::new("job-4", JobStatus::Succeeded)),
        ]);
        let poller = JobPoller::new(PollPolicy::new(Duration::from_millis(1), 3));

        let job = poller
            .poll("voice_clone", &JobId::new("job-4"), |job_id| {
                let next = script.next(job_id);
                async move { next }
            })
            .await
            .expect("job should succeed");

        assert_eq!(job.status, JobStatus::Succeeded);
        assert_eq!(script.calls(), 2);
    }
}
