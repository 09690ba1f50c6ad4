use std::sync::Arc;
use std::time::Duration;

use cambclient::{
    CambClient, CambConfig, CambError, CambErrorKind, CambTransport, ClientFuture, HttpRequest,
    HttpResponse,
};
use cambtooling::{
    CambToolkit, ToolCall, ToolError, ToolErrorKind, ToolExecutionContext, ToolOutput,
    ToolRuntime, ToolSelection,
};

#[derive(Debug)]
struct FixedTransport {
    body: &'static str,
}

impl CambTransport for FixedTransport {
    fn send<'a>(&'a self, _request: HttpRequest) -> ClientFuture<'a, Result<HttpResponse, CambError>> {
        Box::pin(async move { Ok(HttpResponse::new(200, self.body)) })
    }
}

fn toolkit(selection: ToolSelection) -> CambToolkit {
    let config = CambConfig::builder()
        .api_key("camb-test-key")
        .poll_interval(Duration::from_millis(1))
        .build_with_env(|_| None)
        .expect("config should build");
    let client = CambClient::new(config, Arc::new(FixedTransport { body: "Hola" }));
    CambToolkit::new(client, selection)
}

fn tool_names(toolkit: &CambToolkit) -> Vec<String> {
    toolkit
        .get_tools()
        .iter()
        .map(|tool| tool.definition().name)
        .collect()
}

#[test]
fn default_selection_returns_every_tool_in_declaration_order() {
    assert_eq!(
        tool_names(&toolkit(ToolSelection::default())),
        vec![
            "camb_tts",
            "camb_translated_tts",
            "camb_translation",
            "camb_transcription",
            "camb_voice_list",
            "camb_voice_clone",
            "camb_text_to_sound",
            "camb_audio_separation",
        ]
    );
}

#[test]
fn empty_selection_returns_no_tools() {
    let toolkit = toolkit(ToolSelection::none());
    assert!(toolkit.get_tools().is_empty());
    assert!(toolkit.registry().is_empty());
}

#[test]
fn single_flag_selects_exactly_that_tool() {
    assert_eq!(
        tool_names(&toolkit(ToolSelection::none().tts(true))),
        vec!["camb_tts"]
    );
    assert_eq!(
        tool_names(&toolkit(ToolSelection::default().voice_clone(false).tts(false))).len(),
        6
    );
}

#[test]
fn definitions_carry_object_schemas() {
    for definition in toolkit(ToolSelection::default()).registry().definitions() {
        let schema: serde_json::Value =
            serde_json::from_str(&definition.input_schema).expect("schema should be json");
        assert_eq!(schema["type"], "object", "{}", definition.name);
        assert!(!definition.description.is_empty());
    }
}

#[test]
fn missing_credential_fails_config_resolution_first() {
    let error = CambConfig::builder()
        .poll_interval(Duration::ZERO)
        .build_with_env(|_| None)
        .expect_err("no api key available");
    assert_eq!(error.kind, CambErrorKind::MissingCredential);

    let error = ToolError::from(error);
    assert_eq!(error.kind, ToolErrorKind::MissingCredential);
    assert!(error.is_user_error());
}

#[tokio::test]
async fn runtime_dispatches_calls_by_tool_name() {
    let runtime = toolkit(ToolSelection::none().translation(true)).runtime();

    let result = runtime
        .execute(
            ToolCall::new(
                "call_1",
                "camb_translation",
                r#"{"text":"Hello","source_language":1,"target_language":2}"#,
            ),
            ToolExecutionContext::new("session-1"),
        )
        .await
        .expect("translation should succeed");
    assert_eq!(result.tool_call_id, "call_1");
    assert_eq!(result.output, ToolOutput::Text("Hola".to_string()));

    let error = runtime
        .execute(
            ToolCall::new("call_2", "camb_tts", r#"{"text":"Hello"}"#),
            ToolExecutionContext::new("session-1"),
        )
        .await
        .expect_err("tts was not selected");
    assert_eq!(error.kind, ToolErrorKind::NotFound);
    assert_eq!(error.tool_name.as_deref(), Some("camb_tts"));
}
