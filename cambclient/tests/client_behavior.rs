use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use cambclient::{
    AudioFormat, AudioSource, CambClient, CambConfig, CambError, CambErrorKind, CambTransport,
    ClientFuture, FormPart, HttpMethod, HttpRequest, HttpResponse, Job, JobId, JobKind,
    JobStatus, RequestBody, ResultRef, TextToSoundRequest, TranscriptionRequest,
    TranslatedTtsRequest, TranslationRequest, TtsRequest, VoiceCloneRequest,
    VoiceCloneSubmission,
};
use serde_json::json;

#[derive(Debug, Default)]
struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, CambError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<Result<HttpResponse, CambError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl CambTransport for ScriptedTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> ClientFuture<'a, Result<HttpResponse, CambError>> {
        Box::pin(async move {
            self.requests.lock().expect("requests lock").push(request);
            self.responses
                .lock()
                .expect("responses lock")
                .pop_front()
                .unwrap_or_else(|| Err(CambError::transport("no scripted response")))
        })
    }
}

fn config() -> CambConfig {
    CambConfig::builder()
        .api_key("camb-test-key")
        .base_url("https://camb.test/apis")
        .poll_interval(Duration::from_millis(1))
        .max_poll_attempts(3)
        .build_with_env(|_| None)
        .expect("config should build")
}

fn client(transport: Arc<ScriptedTransport>) -> CambClient {
    CambClient::new(config(), transport)
}

#[tokio::test]
async fn tts_sends_api_key_and_returns_exact_payload() {
    let transport = ScriptedTransport::new(vec![Ok(HttpResponse::new(
        200,
        b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec(),
    )
    .with_content_type("audio/wav"))]);

    let clip = client(transport.clone())
        .tts(&TtsRequest::new("Hello, world!"))
        .await
        .expect("tts should succeed");

    assert_eq!(clip.format, AudioFormat::Wav);
    assert_eq!(clip.bytes, b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec());

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, "https://camb.test/apis/tts-stream");
    assert_eq!(requests[0].header("x-api-key"), Some("camb-test-key"));
    match &requests[0].body {
        RequestBody::Json(body) => {
            assert_eq!(body["text"], json!("Hello, world!"));
            assert_eq!(body["language"], json!("en-us"));
            assert_eq!(body["voice_id"], json!(147320));
        }
        other => panic!("unexpected body: {other:?}"),
    }
}

#[tokio::test]
async fn non_success_status_keeps_status_and_body() {
    let transport = ScriptedTransport::new(vec![Ok(HttpResponse::new(
        401,
        "{\"detail\":\"invalid api key\"}",
    ))]);

    let error = client(transport)
        .list_voices()
        .await
        .expect_err("401 should fail");

    assert_eq!(error.kind, CambErrorKind::Transport);
    assert_eq!(error.status, Some(401));
    assert_eq!(error.body.as_deref(), Some("{\"detail\":\"invalid api key\"}"));
    assert!(!error.retryable);
}

#[tokio::test]
async fn translation_accepts_plain_text_bodies() {
    let transport = ScriptedTransport::new(vec![Ok(HttpResponse::new(200, "Hola, ¿cómo estás?"))]);

    let text = client(transport.clone())
        .translate(&TranslationRequest {
            text: "Hello, how are you?".to_string(),
            source_language: 1,
            target_language: 2,
            formality: None,
        })
        .await
        .expect("translation should succeed");

    assert_eq!(text, "Hola, ¿cómo estás?");
    let requests = transport.requests();
    assert_eq!(requests[0].url, "https://camb.test/apis/translation/stream");
    match &requests[0].body {
        RequestBody::Json(body) => assert!(body.get("formality").is_none()),
        other => panic!("unexpected body: {other:?}"),
    }
}

#[tokio::test]
async fn transcription_flow_submits_polls_and_fetches_result() {
    let transport = ScriptedTransport::new(vec![
        Ok(HttpResponse::json(200, &json!({"task_id": "tr-1"}))),
        Ok(HttpResponse::json(200, &json!({"status": "PENDING"}))),
        Ok(HttpResponse::json(200, &json!({"status": "SUCCESS", "run_id": 55}))),
        Ok(HttpResponse::json(
            200,
            &json!({"text": "hi", "segments": [{"start": 0.0, "end": 0.4, "text": "hi", "speaker": "S1"}]}),
        )),
    ]);
    let client = client(transport.clone());

    let job_id = client
        .submit_transcription(&TranscriptionRequest {
            language: 1,
            source: AudioSource::Url("https://media.test/a.mp3".to_string()),
        })
        .await
        .expect("submit should succeed");
    assert_eq!(job_id, JobId::new("tr-1"));

    let job = client
        .wait_for_job(JobKind::Transcription, &job_id)
        .await
        .expect("job should succeed");
    assert_eq!(job.result_ref, Some(ResultRef::RunId(55)));

    let transcription = client
        .transcription_result(&job)
        .await
        .expect("result should decode");
    assert_eq!(transcription.text, "hi");
    assert_eq!(transcription.speakers, vec!["S1".to_string()]);

    let urls = transport
        .requests()
        .into_iter()
        .map(|request| request.url)
        .collect::<Vec<_>>();
    assert_eq!(
        urls,
        vec![
            "https://camb.test/apis/transcribe",
            "https://camb.test/apis/transcribe/tr-1",
            "https://camb.test/apis/transcribe/tr-1",
            "https://camb.test/apis/transcription-result/55",
        ]
    );

    let requests = transport.requests();
    match &requests[0].body {
        RequestBody::Multipart(parts) => {
            assert!(parts.contains(&FormPart::text("language", 1)));
            assert!(parts.contains(&FormPart::text("audio_url", "https://media.test/a.mp3")));
        }
        other => panic!("unexpected body: {other:?}"),
    }
}

#[tokio::test]
async fn wait_for_job_times_out_with_configured_attempts() {
    let transport = ScriptedTransport::new(vec![
        Ok(HttpResponse::json(200, &json!({"status": "running"}))),
        Ok(HttpResponse::json(200, &json!({"status": "running"}))),
        Ok(HttpResponse::json(200, &json!({"status": "running"}))),
    ]);

    let error = client(transport.clone())
        .wait_for_job(JobKind::TextToSound, &JobId::new("snd-1"))
        .await
        .expect_err("job should time out");

    assert_eq!(error.kind, CambErrorKind::PollingTimeout);
    assert_eq!(error.attempts, Some(3));
    assert_eq!(error.job_id, Some(JobId::new("snd-1")));
    assert_eq!(transport.requests().len(), 3);
}

#[tokio::test]
async fn status_transport_errors_carry_job_id() {
    let transport = ScriptedTransport::new(vec![Ok(HttpResponse::new(503, "unavailable"))]);

    let error = client(transport)
        .job_status(JobKind::AudioSeparation, &JobId::new("sep-4"))
        .await
        .expect_err("503 should fail");

    assert_eq!(error.status, Some(503));
    assert!(error.retryable);
    assert_eq!(error.job_id, Some(JobId::new("sep-4")));
}

#[tokio::test]
async fn text_to_sound_submits_json_and_returns_raw_result() {
    let transport = ScriptedTransport::new(vec![
        Ok(HttpResponse::json(200, &json!({"task_id": 9}))),
        Ok(HttpResponse::new(200, vec![0_u8, 1, 2, 3])),
    ]);
    let client = client(transport.clone());

    let job_id = client
        .submit_text_to_sound(&TextToSoundRequest {
            prompt: "rain on a tin roof".to_string(),
            duration: Some(5.0),
            audio_type: None,
        })
        .await
        .expect("submit should succeed");
    assert_eq!(job_id.as_str(), "9");

    let job = Job::new(job_id, JobStatus::Succeeded).with_result_ref(ResultRef::RunId(12));
    let clip = client
        .text_to_sound_result(&job)
        .await
        .expect("result should download");
    assert_eq!(clip.format, AudioFormat::Pcm);
    assert_eq!(clip.bytes, vec![0, 1, 2, 3]);

    match &transport.requests()[0].body {
        RequestBody::Json(body) => {
            assert_eq!(body["prompt"], json!("rain on a tin roof"));
            assert_eq!(body["duration"], json!(5.0));
            assert!(body.get("audio_type").is_none());
        }
        other => panic!("unexpected body: {other:?}"),
    }
}

#[tokio::test]
async fn custom_voice_reports_immediate_or_pending_result() {
    let transport = ScriptedTransport::new(vec![
        Ok(HttpResponse::json(200, &json!({"voice_id": 321}))),
        Ok(HttpResponse::json(200, &json!({"task_id": "vc-2"}))),
    ]);
    let client = client(transport);
    let request = VoiceCloneRequest {
        voice_name: "Narrator".to_string(),
        gender: 2,
        file_name: "sample.wav".to_string(),
        bytes: vec![1, 2, 3],
        description: None,
        age: None,
        language: None,
    };

    assert_eq!(
        client.create_custom_voice(&request).await.expect("first"),
        VoiceCloneSubmission::Ready {
            voice_id: 321,
            message: None
        }
    );
    assert_eq!(
        client.create_custom_voice(&request).await.expect("second"),
        VoiceCloneSubmission::Pending(JobId::new("vc-2"))
    );
}

#[tokio::test]
async fn url_results_download_without_api_key() {
    let transport = ScriptedTransport::new(vec![Ok(HttpResponse::new(200, b"ID3data".to_vec()))]);
    let job = Job::new("snd-2", JobStatus::Succeeded)
        .with_result_ref(ResultRef::Url("https://cdn.other.test/out.mp3".to_string()));

    let clip = client(transport.clone())
        .text_to_sound_result(&job)
        .await
        .expect("download should succeed");

    assert_eq!(clip.format, AudioFormat::Mp3);
    let requests = transport.requests();
    assert_eq!(requests[0].url, "https://cdn.other.test/out.mp3");
    assert_eq!(requests[0].header("x-api-key"), None);
}

#[tokio::test]
async fn api_key_stays_on_base_host_without_path() {
    let config = CambConfig::builder()
        .api_key("camb-test-key")
        .base_url("https://api.camb.test")
        .build_with_env(|_| None)
        .expect("config should build");
    let transport = ScriptedTransport::new(vec![
        Ok(HttpResponse::new(200, b"RIFF".to_vec())),
        Ok(HttpResponse::new(200, b"RIFF".to_vec())),
    ]);
    let client = CambClient::new(config, transport.clone());

    for url in [
        "https://api.camb.test.evil.example/a.wav",
        "https://api.camb.test/tts-result/1",
    ] {
        let job = Job::new("t-1", JobStatus::Succeeded)
            .with_result_ref(ResultRef::Url(url.to_string()));
        client.text_to_sound_result(&job).await.expect("download");
    }

    let requests = transport.requests();
    assert_eq!(requests[0].header("x-api-key"), None);
    assert_eq!(requests[1].header("x-api-key"), Some("camb-test-key"));
}

#[tokio::test]
async fn finished_job_without_result_reference_fails_without_fetching() {
    let transport = ScriptedTransport::new(vec![]);
    let job = Job::new("tr-9", JobStatus::Succeeded);

    let error = client(transport.clone())
        .transcription_result(&job)
        .await
        .expect_err("nothing to fetch");

    assert_eq!(error.kind, CambErrorKind::Transport);
    assert!(error.message.contains("without a result reference"));
    assert_eq!(error.job_id, Some(JobId::new("tr-9")));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn translated_tts_job_submits_json_and_reads_tts_result() {
    let transport = ScriptedTransport::new(vec![
        Ok(HttpResponse::json(200, &json!({"task_id": "tt-1"}))),
        Ok(HttpResponse::json(200, &json!({"status": "SUCCESS", "run_id": 31}))),
        Ok(HttpResponse::new(200, b"RIFFwav".to_vec())),
    ]);
    let client = client(transport.clone());

    let job_id = client
        .submit_translated_tts(&TranslatedTtsRequest {
            text: "Hello".to_string(),
            source_language: 1,
            target_language: 54,
            voice_id: 147_320,
            formality: None,
        })
        .await
        .expect("submit should succeed");
    let job = client
        .wait_for_job(JobKind::TranslatedTts, &job_id)
        .await
        .expect("job should succeed");
    let clip = client.translated_tts_result(&job).await.expect("result");

    assert_eq!(clip.format, AudioFormat::Wav);
    let requests = transport.requests();
    let urls = requests.iter().map(|request| request.url.as_str()).collect::<Vec<_>>();
    assert_eq!(
        urls,
        vec![
            "https://camb.test/apis/translated-tts",
            "https://camb.test/apis/translated-tts/tt-1",
            "https://camb.test/apis/tts-result/31",
        ]
    );
    match &requests[0].body {
        RequestBody::Json(body) => {
            assert_eq!(body["target_language"], json!(54));
            assert_eq!(body["voice_id"], json!(147320));
            assert!(body.get("formality").is_none());
        }
        other => panic!("unexpected body: {other:?}"),
    }
}

#[tokio::test]
async fn failed_job_surfaces_remote_diagnostic() {
    let transport = ScriptedTransport::new(vec![Ok(HttpResponse::json(
        200,
        &json!({"status": "FAILED", "error": "unsupported media"}),
    ))]);

    let error = client(transport)
        .wait_for_job(JobKind::AudioSeparation, &JobId::new("sep-1"))
        .await
        .expect_err("job should fail");

    assert_eq!(error.kind, CambErrorKind::RemoteJobFailed);
    assert!(error.message.contains("unsupported media"));
}
