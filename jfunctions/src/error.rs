//! Function-layer errors and the recoverable/fatal classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionErrorKind {
    ArgumentParse,
    SchemaMismatch,
    NotRegistered,
    Execution,
    Definition,
    Other,
}

/// Error value shared across the function registry and argument validation.
///
/// `recoverable` drives the orchestration loop's retry decision: recoverable
/// errors become corrective conversation messages, everything else aborts
/// the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionError {
    pub kind: FunctionErrorKind,
    pub message: String,
    pub recoverable: bool,
    pub function: Option<String>,
}

impl FunctionError {
    pub fn new(kind: FunctionErrorKind, message: impl Into<String>, recoverable: bool) -> Self {
        Self {
            kind,
            message: message.into(),
            recoverable,
            function: None,
        }
    }

    pub fn argument_parse(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::ArgumentParse, message, true)
    }

    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::SchemaMismatch, message, true)
    }

    pub fn not_registered(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(
            FunctionErrorKind::NotRegistered,
            format!("function '{name}' is not registered"),
            false,
        )
        .with_function(name)
    }

    pub fn execution(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::Execution, message, false)
    }

    pub fn definition(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::Definition, message, false)
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::Other, message, false)
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    pub fn is_recoverable(&self) -> bool {
        self.recoverable
    }
}

impl Display for FunctionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.function {
            Some(function) => {
                write!(f, "{:?} [function={}]: {}", self.kind, function, self.message)
            }
            None => write!(f, "{:?}: {}", self.kind, self.message),
        }
    }
}

impl Error for FunctionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_builders_classify_recoverability() {
        assert!(FunctionError::argument_parse("bad json").is_recoverable());
        assert!(FunctionError::schema_mismatch("missing field").is_recoverable());
        assert!(!FunctionError::not_registered("doThing").is_recoverable());
        assert!(!FunctionError::execution("boom").is_recoverable());
    }

    #[test]
    fn not_registered_carries_the_requested_name() {
        let error = FunctionError::not_registered("doThing");
        assert_eq!(error.kind, FunctionErrorKind::NotRegistered);
        assert_eq!(error.function.as_deref(), Some("doThing"));
        assert!(error.to_string().contains("doThing"));
    }

    #[test]
    fn function_context_is_included_in_display() {
        let error = FunctionError::schema_mismatch("missing field `city`")
            .with_function("get_weather");
        let rendered = error.to_string();
        assert!(rendered.contains("get_weather"));
        assert!(rendered.contains("missing field `city`"));
    }
}
