use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use jchat::{ChatLoopHooks, ChatStatus};
use jfunctions::FunctionError;

/// Isolates a panicking hook implementation from the loop it observes.
pub struct SafeChatHooks<H> {
    inner: H,
}

impl<H> SafeChatHooks<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H> ChatLoopHooks for SafeChatHooks<H>
where
    H: ChatLoopHooks,
{
    fn on_request_start(&self, model: &str, attempts: u32, message_count: usize) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_request_start(model, attempts, message_count)
        }));
    }

    fn on_decode_attempt(&self, function: &str, raw_arguments: &str) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_decode_attempt(function, raw_arguments)
        }));
    }

    fn on_validation_failure(&self, function: &str, error: &FunctionError) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_validation_failure(function, error)
        }));
    }

    fn on_function_invocation(&self, function: &str, elapsed: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_function_invocation(function, elapsed)
        }));
    }

    fn on_retry_scheduled(&self, attempts: u32, delay: Duration) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_retry_scheduled(attempts, delay)
        }));
    }

    fn on_loop_complete(&self, attempts: u32, status: ChatStatus) {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            self.inner.on_loop_complete(attempts, status)
        }));
    }
}
