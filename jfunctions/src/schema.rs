//! Argument schema variants and their single validation capability.
//!
//! ```rust
//! use jfunctions::FunctionSchema;
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use serde_json::json;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct WeatherArgs {
//!     city: String,
//! }
//!
//! let typed = FunctionSchema::typed::<WeatherArgs>().expect("schema should derive");
//! assert!(typed.validate(&json!({"city": "Paris"})).is_ok());
//! assert!(typed.validate(&json!({"city": 7})).is_err());
//!
//! let document = FunctionSchema::document(json!({"type": "object"}));
//! assert!(document.validate(&json!({"anything": "goes"})).is_ok());
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::FunctionError;

type ArgumentCheck = Arc<dyn Fn(&Value) -> Result<(), String> + Send + Sync>;

/// Two-case tagged schema for a function's arguments.
///
/// `Typed` carries a structural check derived from a Rust argument type and
/// rejects decoded values that do not deserialize into it. `Document` is a
/// plain JSON-schema document forwarded to the provider verbatim; decoded
/// values are accepted without any structural check. The asymmetry is
/// deliberate: a plain document expresses intent to the provider only.
#[derive(Clone)]
pub enum FunctionSchema {
    Typed {
        document: Value,
        check: ArgumentCheck,
    },
    Document(Value),
}

impl FunctionSchema {
    /// Derives the wire document from `T` and captures a structural check
    /// that deserializes decoded arguments into `T`.
    pub fn typed<T>() -> Result<Self, FunctionError>
    where
        T: DeserializeOwned + JsonSchema + 'static,
    {
        let document = serde_json::to_value(schemars::schema_for!(T)).map_err(|err| {
            FunctionError::definition(format!("failed to derive argument schema: {err}"))
        })?;

        let check: ArgumentCheck = Arc::new(|value: &Value| {
            serde_json::from_value::<T>(value.clone())
                .map(|_| ())
                .map_err(|err| err.to_string())
        });

        Ok(Self::Typed { document, check })
    }

    pub fn document(document: Value) -> Self {
        Self::Document(document)
    }

    /// The schema document sent to the provider. For `Typed` this was derived
    /// once at construction; for `Document` it is the document itself.
    pub fn wire_document(&self) -> Value {
        match self {
            Self::Typed { document, .. } => document.clone(),
            Self::Document(document) => document.clone(),
        }
    }

    pub fn validate(&self, decoded: &Value) -> Result<(), FunctionError> {
        match self {
            Self::Typed { check, .. } => {
                check(decoded).map_err(FunctionError::schema_mismatch)
            }
            Self::Document(_) => Ok(()),
        }
    }
}

impl Debug for FunctionSchema {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Typed { document, .. } => f
                .debug_struct("Typed")
                .field("document", document)
                .finish_non_exhaustive(),
            Self::Document(document) => f.debug_tuple("Document").field(document).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use schemars::JsonSchema;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::FunctionErrorKind;

    #[derive(Debug, Deserialize, JsonSchema)]
    struct SearchArgs {
        query: String,
        #[serde(default)]
        limit: Option<u32>,
    }

    #[test]
    fn typed_schema_accepts_matching_arguments() {
        let schema = FunctionSchema::typed::<SearchArgs>().expect("schema should derive");
        assert!(schema.validate(&json!({"query": "rust"})).is_ok());
        assert!(
            schema
                .validate(&json!({"query": "rust", "limit": 5}))
                .is_ok()
        );
    }

    #[test]
    fn typed_schema_rejects_wrong_shape_with_readable_message() {
        let schema = FunctionSchema::typed::<SearchArgs>().expect("schema should derive");

        let missing = schema
            .validate(&json!({"limit": 5}))
            .expect_err("missing field should fail");
        assert_eq!(missing.kind, FunctionErrorKind::SchemaMismatch);
        assert!(missing.is_recoverable());
        assert!(missing.message.contains("query"));

        let wrong_type = schema
            .validate(&json!({"query": 42}))
            .expect_err("wrong type should fail");
        assert_eq!(wrong_type.kind, FunctionErrorKind::SchemaMismatch);
    }

    #[test]
    fn document_schema_accepts_values_that_violate_it() {
        let schema = FunctionSchema::document(json!({
            "type": "object",
            "properties": {"query": {"type": "string"}},
            "required": ["query"]
        }));

        assert!(schema.validate(&json!({"query": 42})).is_ok());
        assert!(schema.validate(&json!("not even an object")).is_ok());
    }

    #[test]
    fn wire_document_matches_the_source_document() {
        let document = json!({"type": "object"});
        let schema = FunctionSchema::document(document.clone());
        assert_eq!(schema.wire_document(), document);

        let typed = FunctionSchema::typed::<SearchArgs>().expect("schema should derive");
        let wire = typed.wire_document();
        assert!(wire.get("properties").is_some());
    }
}
