//! Small convenience constructors for common types.

use std::sync::Arc;

use crate::{
    ChatMessage, ChatRequest, ChatRunner, CompletionProvider, FunctionCallPolicy,
    FunctionRegistry, Role,
};

pub fn system_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::new(Role::System, content)
}

pub fn user_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::new(Role::User, content)
}

pub fn assistant_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::new(Role::Assistant, content)
}

pub fn function_message(name: impl Into<String>, content: impl Into<String>) -> ChatMessage {
    ChatMessage::function(name, content)
}

pub fn chat(model: impl Into<String>, user_input: impl Into<String>) -> ChatRequest {
    ChatRequest::new(model).user(user_input)
}

pub fn forced_chat(
    model: impl Into<String>,
    user_input: impl Into<String>,
    function: impl Into<String>,
) -> ChatRequest {
    ChatRequest::new(model)
        .user(user_input)
        .with_policy(FunctionCallPolicy::Forced(function.into()))
}

pub fn build_runner(
    provider: Arc<dyn CompletionProvider>,
    registry: Arc<FunctionRegistry>,
) -> ChatRunner {
    ChatRunner::new(provider, registry)
}

#[cfg(test)]
mod tests {
    use crate::{FunctionCallPolicy, Role};

    use super::{chat, forced_chat, function_message, user_message};

    #[test]
    fn message_helpers_apply_expected_roles() {
        let message = user_message("hello");
        assert_eq!(message.role, Role::User);
        assert!(message.name.is_none());

        let result = function_message("get_weather", "{\"tempC\":18}");
        assert_eq!(result.role, Role::Function);
        assert_eq!(result.name.as_deref(), Some("get_weather"));
    }

    #[test]
    fn chat_helpers_apply_expected_policies() {
        let plain = chat("gpt-4o-mini", "hello");
        assert_eq!(plain.policy, FunctionCallPolicy::Auto);
        assert_eq!(plain.inputs.len(), 1);

        let forced = forced_chat("gpt-4o-mini", "hello", "lookup");
        assert_eq!(
            forced.policy,
            FunctionCallPolicy::Forced("lookup".to_string())
        );
    }
}
