//! Tool trait contract shared by every CAMB AI capability.
//!
//! ```rust
//! use cambtooling::{Tool, ToolDefinition, ToolError, ToolFuture, ToolOutput};
//! use serde_json::Value;
//!
//! struct Echo;
//!
//! impl Tool for Echo {
//!     fn definition(&self) -> ToolDefinition {
//!         ToolDefinition {
//!             name: "echo".to_string(),
//!             description: "Echoes input".to_string(),
//!             input_schema: r#"{"type":"object"}"#.to_string(),
//!         }
//!     }
//!
//!     fn execute<'a>(&'a self, args: Value) -> ToolFuture<'a, Result<ToolOutput, ToolError>> {
//!         Box::pin(async move { Ok(ToolOutput::Json(args)) })
//!     }
//! }
//!
//! assert_eq!(Echo.definition().name, "echo");
//! ```

use cambcommon::BoxFuture;
use serde_json::Value;

use crate::{ToolDefinition, ToolError, ToolOutput, parse_json_value};

pub type ToolFuture<'a, T> = BoxFuture<'a, T>;

pub trait Tool: Send + Sync {
    fn definition(&self) -> ToolDefinition;

    /// Validates `args` and runs the tool. Validation failures never reach the network.
    fn execute<'a>(&'a self, args: Value) -> ToolFuture<'a, Result<ToolOutput, ToolError>>;

    fn invoke<'a>(&'a self, args_json: &'a str) -> ToolFuture<'a, Result<ToolOutput, ToolError>> {
        match parse_json_value(args_json) {
            Ok(args) => self.execute(args),
            Err(error) => Box::pin(async move { Err(error) }),
        }
    }
}
