//! Metrics-based hooks for the conversation loop tracepoints.
//!
//! ```rust
//! use jchat::ChatLoopHooks;
//! use jobserve::MetricsChatHooks;
//!
//! fn accepts_hooks(_hooks: &dyn ChatLoopHooks) {}
//!
//! let hooks = MetricsChatHooks;
//! accepts_hooks(&hooks);
//! ```

use std::time::Duration;

use jchat::{ChatLoopHooks, ChatStatus};
use jfunctions::FunctionError;

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsChatHooks;

impl ChatLoopHooks for MetricsChatHooks {
    fn on_request_start(&self, model: &str, _attempts: u32, _message_count: usize) {
        metrics::counter!(
            "jacquard_chat_request_start_total",
            "model" => model.to_string()
        )
        .increment(1);
    }

    fn on_validation_failure(&self, function: &str, error: &FunctionError) {
        metrics::counter!(
            "jacquard_chat_validation_failure_total",
            "function" => function.to_string(),
            "error_kind" => format!("{:?}", error.kind)
        )
        .increment(1);
    }

    fn on_function_invocation(&self, function: &str, elapsed: Duration) {
        metrics::counter!(
            "jacquard_chat_function_invocation_total",
            "function" => function.to_string()
        )
        .increment(1);
        metrics::histogram!(
            "jacquard_chat_function_invocation_seconds",
            "function" => function.to_string()
        )
        .record(elapsed.as_secs_f64());
    }

    fn on_retry_scheduled(&self, _attempts: u32, delay: Duration) {
        metrics::counter!("jacquard_chat_retry_scheduled_total").increment(1);
        metrics::histogram!("jacquard_chat_retry_delay_seconds").record(delay.as_secs_f64());
    }

    fn on_loop_complete(&self, attempts: u32, status: ChatStatus) {
        metrics::counter!(
            "jacquard_chat_loop_complete_total",
            "status" => format!("{status:?}")
        )
        .increment(1);
        metrics::histogram!("jacquard_chat_attempts_per_loop").record(attempts as f64);
    }
}
