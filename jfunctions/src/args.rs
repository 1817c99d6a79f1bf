//! Raw argument decoding and corrective-message construction.
//!
//! ```rust
//! use jfunctions::decode_arguments;
//!
//! let args = decode_arguments(r#"{"city":"Paris"}"#).expect("arguments should parse");
//! assert_eq!(args["city"], "Paris");
//! ```

use jprovider::ChatMessage;
use serde_json::Value;

use crate::FunctionError;

/// Parses the provider's raw argument text. Malformed input is recoverable:
/// the loop answers with a corrective message instead of failing.
pub fn decode_arguments(raw: &str) -> Result<Value, FunctionError> {
    serde_json::from_str(raw)
        .map_err(|err| FunctionError::argument_parse(format!("invalid JSON arguments: {err}")))
}

/// User-role message steering the provider's next attempt after a
/// recoverable argument failure.
pub fn corrective_message(function: &str, error: &FunctionError) -> ChatMessage {
    ChatMessage::user(format!(
        "The arguments for function '{function}' were rejected: {}. \
         Call the function again with valid JSON arguments that match its parameter schema.",
        error.message
    ))
}
