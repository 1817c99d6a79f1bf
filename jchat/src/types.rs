//! Chat request, input coercion, policy, and outcome types.

use jprovider::{ChatMessage, CompletionResponse};

/// Caller-supplied conversation entry. Bare text is coerced to a user-role
/// message when the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatInput {
    Text(String),
    Message(ChatMessage),
}

impl ChatInput {
    pub(crate) fn into_message(self) -> ChatMessage {
        match self {
            Self::Text(text) => ChatMessage::user(text),
            Self::Message(message) => message,
        }
    }
}

impl From<&str> for ChatInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ChatInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ChatMessage> for ChatInput {
    fn from(value: ChatMessage) -> Self {
        Self::Message(value)
    }
}

/// Per-call directive controlling whether, and which, function the provider
/// may select.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FunctionCallPolicy {
    /// The provider chooses freely among the registered functions.
    #[default]
    Auto,
    /// The provider must call exactly this function.
    Forced(String),
    /// No function specs are sent; the provider cannot call anything.
    Disabled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub system_prompt: Option<String>,
    pub inputs: Vec<ChatInput>,
    pub policy: FunctionCallPolicy,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_prompt: None,
            inputs: Vec::new(),
            policy: FunctionCallPolicy::Auto,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn user(mut self, text: impl Into<String>) -> Self {
        self.inputs.push(ChatInput::Text(text.into()));
        self
    }

    pub fn message(mut self, message: ChatMessage) -> Self {
        self.inputs.push(ChatInput::Message(message));
        self
    }

    pub fn input(mut self, input: impl Into<ChatInput>) -> Self {
        self.inputs.push(input.into());
        self
    }

    pub fn with_policy(mut self, policy: FunctionCallPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// How the loop ended. `RetriesExhausted` means the conversation was left
/// without a resolved function result; the last provider response is still
/// returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatStatus {
    Completed,
    RetriesExhausted,
}

impl ChatStatus {
    pub fn is_exhausted(self) -> bool {
        matches!(self, Self::RetriesExhausted)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatOutcome {
    pub response: CompletionResponse,
    pub conversation: Vec<ChatMessage>,
    pub attempts: u32,
    pub status: ChatStatus,
}
