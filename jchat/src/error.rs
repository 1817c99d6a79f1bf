//! Chat-loop errors and classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jfunctions::{FunctionError, FunctionErrorKind};
use jprovider::{ProviderError, ProviderErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatErrorKind {
    InvalidRequest,
    Protocol,
    UnknownFunction,
    Execution,
    Provider,
}

/// Fatal loop failure. Recoverable argument errors never surface here; they
/// are folded back into the conversation as corrective messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatError {
    pub kind: ChatErrorKind,
    pub message: String,
    pub function: Option<String>,
}

impl ChatError {
    pub fn new(kind: ChatErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            function: None,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::InvalidRequest, message)
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Protocol, message)
    }

    pub fn unknown_function(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::UnknownFunction, message)
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Execution, message)
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(ChatErrorKind::Provider, message)
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.function {
            Some(function) => {
                write!(f, "{:?} [function={}]: {}", self.kind, function, self.message)
            }
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for ChatError {}

impl From<ProviderError> for ChatError {
    fn from(value: ProviderError) -> Self {
        match value.kind {
            ProviderErrorKind::InvalidRequest => ChatError::invalid_request(value.to_string()),
            _ => ChatError::provider(value.to_string()),
        }
    }
}

impl From<FunctionError> for ChatError {
    fn from(value: FunctionError) -> Self {
        let kind = match value.kind {
            FunctionErrorKind::NotRegistered => ChatErrorKind::UnknownFunction,
            FunctionErrorKind::Definition => ChatErrorKind::InvalidRequest,
            _ => ChatErrorKind::Execution,
        };

        let mut error = ChatError::new(kind, value.message);
        error.function = value.function;
        error
    }
}
