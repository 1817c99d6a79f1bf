//! Common imports for most jacquard applications.

pub use crate::{
    assistant_message, build_runner, chat, forced_chat, function_message, system_message,
    user_message,
};
pub use crate::{
    BoxFuture, ChatError, ChatErrorKind, ChatInput, ChatLoopHooks, ChatMessage, ChatOutcome,
    ChatRequest, ChatRunner, ChatRunnerBuilder, ChatStatus, CompletionProvider, CompletionRequest,
    CompletionResponse, FunctionCallPolicy, FunctionDescriptor, FunctionError, FunctionErrorKind,
    FunctionRegistry, FunctionSchema, FunctionSpec, MetricsChatHooks, NoopChatLoopHooks,
    ProviderError, ProviderErrorKind, RetryPolicy, Role, SafeChatHooks, TracingChatHooks,
};
