//! Observation hooks for the conversation loop lifecycle.
//!
//! ```rust
//! use jchat::{ChatLoopHooks, NoopChatLoopHooks};
//!
//! fn assert_hooks_trait(_hooks: &dyn ChatLoopHooks) {}
//!
//! let hooks = NoopChatLoopHooks;
//! assert_hooks_trait(&hooks);
//! ```

use std::time::Duration;

use jfunctions::FunctionError;

use crate::ChatStatus;

/// Purely observational tracepoints; implementations must not affect loop
/// behavior.
pub trait ChatLoopHooks: Send + Sync {
    fn on_request_start(&self, _model: &str, _attempts: u32, _message_count: usize) {}

    fn on_decode_attempt(&self, _function: &str, _raw_arguments: &str) {}

    fn on_validation_failure(&self, _function: &str, _error: &FunctionError) {}

    fn on_function_invocation(&self, _function: &str, _elapsed: Duration) {}

    fn on_retry_scheduled(&self, _attempts: u32, _delay: Duration) {}

    fn on_loop_complete(&self, _attempts: u32, _status: ChatStatus) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopChatLoopHooks;

impl ChatLoopHooks for NoopChatLoopHooks {}
