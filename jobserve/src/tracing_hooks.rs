//! Tracing-based hooks for the conversation loop tracepoints.
//!
//! ```rust
//! use jchat::ChatLoopHooks;
//! use jobserve::TracingChatHooks;
//!
//! fn accepts_hooks(_hooks: &dyn ChatLoopHooks) {}
//!
//! let hooks = TracingChatHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use jchat::{ChatLoopHooks, ChatStatus};
use jfunctions::FunctionError;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingChatHooks;

impl ChatLoopHooks for TracingChatHooks {
    fn on_request_start(&self, model: &str, attempts: u32, message_count: usize) {
        tracing::info!(
            event = "request_start",
            model,
            attempts,
            message_count
        );
    }

    fn on_decode_attempt(&self, function: &str, raw_arguments: &str) {
        tracing::debug!(
            event = "decode_attempt",
            function,
            raw_len = raw_arguments.len()
        );
    }

    fn on_validation_failure(&self, function: &str, error: &FunctionError) {
        tracing::warn!(
            event = "validation_failure",
            function,
            error_kind = ?error.kind,
            recoverable = error.recoverable,
            error = %error
        );
    }

    fn on_function_invocation(&self, function: &str, elapsed: Duration) {
        tracing::info!(
            event = "function_invocation",
            function,
            elapsed_ms = elapsed.as_millis() as u64
        );
    }

    fn on_retry_scheduled(&self, attempts: u32, delay: Duration) {
        tracing::warn!(
            event = "retry_scheduled",
            attempts,
            delay_ms = delay.as_millis() as u64
        );
    }

    fn on_loop_complete(&self, attempts: u32, status: ChatStatus) {
        tracing::info!(
            event = "loop_complete",
            attempts,
            status = ?status,
            exhausted = status.is_exhausted()
        );
    }
}
