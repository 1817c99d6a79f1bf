//! Unified facade over the jacquard workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the workspace crates and provides convenience constructors
//! for messages, requests, and the conversation runner.
//!
//! ```rust
//! use jacquard::prelude::*;
//! use serde_json::json;
//!
//! let mut registry = FunctionRegistry::new();
//! registry.register(
//!     FunctionDescriptor::new(
//!         "echo",
//!         "Echoes its arguments",
//!         FunctionSchema::document(json!({"type": "object"})),
//!         |args| async move { Ok(args) },
//!     )
//!     .expect("descriptor should build"),
//! );
//!
//! assert!(registry.contains("echo"));
//! ```

pub mod prelude;
pub mod util;

pub use jchat;
pub use jcommon;
pub use jfunctions;
pub use jobserve;
pub use jprovider;

pub use jchat::{
    ChatError, ChatErrorKind, ChatInput, ChatLoopHooks, ChatOutcome, ChatRequest, ChatRunner,
    ChatRunnerBuilder, ChatStatus, FunctionCallPolicy, JitterFn, NoopChatLoopHooks, RetryPolicy,
    SleepFn,
};
pub use jcommon::{BoxFuture, Registry};
pub use jfunctions::{
    FunctionDescriptor, FunctionError, FunctionErrorKind, FunctionHandler, FunctionRegistry,
    FunctionSchema, corrective_message, decode_arguments,
};
pub use jobserve::{MetricsChatHooks, SafeChatHooks, TracingChatHooks};
pub use jprovider::{
    ChatMessage, Choice, ChoiceMessage, CompletionProvider, CompletionRequest,
    CompletionRequestBuilder, CompletionResponse, FinishReason, FunctionSelection, FunctionSpec,
    ProviderError, ProviderErrorKind, ProviderFuture, Role, TokenUsage,
};

pub use util::{
    assistant_message, build_runner, chat, forced_chat, function_message, system_message,
    user_message,
};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use crate::prelude::*;
    use crate::{Choice, ChoiceMessage, FinishReason, FunctionSelection, ProviderFuture, TokenUsage};

    struct SingleShotProvider;

    impl CompletionProvider for SingleShotProvider {
        fn complete<'a>(
            &'a self,
            request: CompletionRequest,
        ) -> ProviderFuture<'a, Result<CompletionResponse, ProviderError>> {
            Box::pin(async move {
                Ok(CompletionResponse {
                    model: request.model,
                    choices: vec![Choice {
                        index: 0,
                        message: ChoiceMessage {
                            role: Role::Assistant,
                            content: None,
                            function_call: Some(FunctionSelection {
                                name: "echo".to_string(),
                                arguments: "{\"text\":\"hello\"}".to_string(),
                            }),
                        },
                        finish_reason: FinishReason::FunctionCall,
                    }],
                    usage: TokenUsage::default(),
                })
            })
        }
    }

    #[tokio::test]
    async fn facade_wires_a_runner_end_to_end() {
        let mut registry = FunctionRegistry::new();
        registry.register(
            FunctionDescriptor::new(
                "echo",
                "Echoes its arguments",
                FunctionSchema::document(json!({"type": "object"})),
                |args| async move { Ok(args) },
            )
            .expect("descriptor should build"),
        );

        let runner = crate::build_runner(Arc::new(SingleShotProvider), Arc::new(registry));
        let outcome = runner
            .chat(crate::chat("gpt-4o-mini", "say hello").with_policy(FunctionCallPolicy::Auto))
            .await
            .expect("chat should succeed");

        assert_eq!(outcome.status, ChatStatus::Completed);
        assert_eq!(outcome.conversation.last().map(|m| m.role), Some(Role::Function));
    }
}
