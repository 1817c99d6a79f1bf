//! Conversation orchestration: the validate-execute-retry loop over a
//! completion provider and a function registry.

mod error;
mod hooks;
mod retry;
mod runner;
mod types;

pub mod prelude {
    pub use crate::{
        ChatError, ChatErrorKind, ChatInput, ChatLoopHooks, ChatOutcome, ChatRequest, ChatRunner,
        ChatRunnerBuilder, ChatStatus, FunctionCallPolicy, NoopChatLoopHooks, RetryPolicy,
    };
    pub use jfunctions::{
        FunctionDescriptor, FunctionError, FunctionErrorKind, FunctionRegistry, FunctionSchema,
    };
    pub use jprovider::{
        ChatMessage, CompletionProvider, CompletionRequest, CompletionResponse, ProviderError,
        Role,
    };
}

pub use error::{ChatError, ChatErrorKind};
pub use hooks::{ChatLoopHooks, NoopChatLoopHooks};
pub use retry::RetryPolicy;
pub use runner::{ChatRunner, ChatRunnerBuilder, JitterFn, SleepFn};
pub use types::{ChatInput, ChatOutcome, ChatRequest, ChatStatus, FunctionCallPolicy};
