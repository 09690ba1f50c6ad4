/// Builds a [`ToolSelection`](crate::ToolSelection) that includes only the named tools.
///
/// ```rust
/// use cambkit::camb_tools;
///
/// let selection = camb_tools![tts, voice_list];
/// assert!(selection.tts);
/// assert!(selection.voice_list);
/// assert!(!selection.transcription);
/// assert_eq!(camb_tools![].enabled_count(), 0);
/// ```
#[macro_export]
macro_rules! camb_tools {
    () => {
        $crate::ToolSelection::none()
    };
    ($($tool:ident),+ $(,)?) => {
        $crate::ToolSelection::none()$(.$tool(true))+
    };
}

/// Creates a [`ToolCall`](crate::ToolCall) whose arguments are written as JSON.
///
/// ```rust
/// use cambkit::camb_call;
///
/// let call = camb_call!("call-1", camb_tts, {"text": "Hello, world!", "speed": 1.2});
/// assert_eq!(call.name, "camb_tts");
/// assert!(call.arguments.contains("Hello, world!"));
///
/// let list = camb_call!("call-2", camb_voice_list);
/// assert_eq!(list.arguments, "{}");
/// ```
#[macro_export]
macro_rules! camb_call {
    ($id:expr, $tool:ident $(,)?) => {
        $crate::ToolCall::new($id, stringify!($tool), "{}")
    };
    ($id:expr, $tool:ident, $($args:tt)+) => {
        $crate::ToolCall::new(
            $id,
            stringify!($tool),
            $crate::serde_json::json!($($args)+).to_string(),
        )
    };
}
