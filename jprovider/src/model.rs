//! Provider-agnostic chat request, response, and message model types.
//!
//! ```rust
//! use jprovider::{ChatMessage, CompletionRequest, ProviderErrorKind, Role};
//!
//! let ok = CompletionRequest::builder("gpt-4o-mini")
//!     .message(ChatMessage::user("What is the weather in Paris?"))
//!     .build();
//! assert!(ok.is_ok());
//!
//! let err = CompletionRequest::builder("")
//!     .message(ChatMessage::user("hi"))
//!     .build()
//!     .err()
//!     .expect("empty model should fail");
//! assert_eq!(err.kind, ProviderErrorKind::InvalidRequest);
//! ```

use serde_json::Value;

use crate::ProviderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
    Function,
}

/// One entry of a conversation.
///
/// `name` identifies the originating function and is always set for
/// [`Role::Function`] messages; the dedicated constructor enforces this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub name: Option<String>,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            name: None,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn function(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Function,
            name: Some(name.into()),
            content: content.into(),
        }
    }
}

/// A function made available to the provider: name, description, and the
/// wire-transmittable JSON-schema document for its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// The provider's election to invoke one registered function, with the raw
/// argument text exactly as the service produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSelection {
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    FunctionCall,
    Length,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceMessage {
    pub role: Role,
    pub content: Option<String>,
    pub function_call: Option<FunctionSelection>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub index: u32,
    pub message: ChoiceMessage,
    pub finish_reason: FinishReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    pub model: String,
    pub choices: Vec<Choice>,
    pub usage: TokenUsage,
}

impl CompletionResponse {
    /// The function-call selection of the first choice, if the service
    /// elected one.
    pub fn function_selection(&self) -> Option<&FunctionSelection> {
        self.choices
            .first()
            .and_then(|choice| choice.message.function_call.as_ref())
    }

    /// Text content of the first choice, if any.
    pub fn message_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub functions: Vec<FunctionSpec>,
    pub forced_function: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn builder(model: impl Into<String>) -> CompletionRequestBuilder {
        CompletionRequestBuilder::new(model)
    }

    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            functions: Vec::new(),
            forced_function: None,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_functions(mut self, functions: Vec<FunctionSpec>) -> Self {
        self.functions = functions;
        self
    }

    pub fn with_forced_function(mut self, name: impl Into<String>) -> Self {
        self.forced_function = Some(name.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.model.trim().is_empty() {
            return Err(ProviderError::invalid_request("model must not be empty"));
        }

        if self.messages.is_empty() {
            return Err(ProviderError::invalid_request(
                "at least one message is required",
            ));
        }

        if let Some(max_tokens) = self.max_tokens
            && max_tokens == 0
        {
            return Err(ProviderError::invalid_request(
                "max_tokens must be greater than zero",
            ));
        }

        if let Some(temperature) = self.temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            return Err(ProviderError::invalid_request(
                "temperature must be in the inclusive range 0.0..=2.0",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequestBuilder {
    model: String,
    messages: Vec<ChatMessage>,
    functions: Vec<FunctionSpec>,
    forced_function: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl CompletionRequestBuilder {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            functions: Vec::new(),
            forced_function: None,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn messages(mut self, messages: Vec<ChatMessage>) -> Self {
        self.messages.extend(messages);
        self
    }

    pub fn functions(mut self, functions: Vec<FunctionSpec>) -> Self {
        self.functions = functions;
        self
    }

    pub fn forced_function(mut self, name: Option<String>) -> Self {
        self.forced_function = name;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn build(self) -> Result<CompletionRequest, ProviderError> {
        let request = CompletionRequest {
            model: self.model,
            messages: self.messages,
            functions: self.functions,
            forced_function: self.forced_function,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        request.validate()?;
        Ok(request)
    }
}
