//! Registered function descriptors pairing a handler with its schema.
//!
//! ```rust
//! use jfunctions::{FunctionDescriptor, FunctionSchema};
//! use serde_json::json;
//!
//! let descriptor = FunctionDescriptor::new(
//!     "echo",
//!     "Echoes its arguments",
//!     FunctionSchema::document(json!({"type": "object"})),
//!     |args| async move { Ok(args) },
//! )
//! .expect("descriptor should build");
//!
//! assert_eq!(descriptor.name(), "echo");
//! ```

use std::future::Future;
use std::sync::Arc;

use jcommon::BoxFuture;
use jprovider::FunctionSpec;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{FunctionError, FunctionSchema};

pub type FunctionHandler =
    Arc<dyn Fn(Value) -> BoxFuture<'static, Result<Value, FunctionError>> + Send + Sync>;

/// A registry entry: unique name, description, argument schema, the wire
/// document derived from it at construction, and the handler itself.
#[derive(Clone)]
pub struct FunctionDescriptor {
    name: String,
    description: String,
    schema: FunctionSchema,
    wire_schema: Value,
    handler: FunctionHandler,
}

impl FunctionDescriptor {
    pub fn new<F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        schema: FunctionSchema,
        handler: F,
    ) -> Result<Self, FunctionError>
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, FunctionError>> + Send + 'static,
    {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FunctionError::definition(
                "function name must not be empty",
            ));
        }

        let wire_schema = schema.wire_document();
        let handler: FunctionHandler = Arc::new(move |args| Box::pin(handler(args)));

        Ok(Self {
            name,
            description: description.into(),
            schema,
            wire_schema,
            handler,
        })
    }

    /// Wires a `DeserializeOwned + JsonSchema` argument type end to end: the
    /// wire schema is derived from `T` and the handler receives the already
    /// validated arguments as a `T`.
    pub fn typed<T, F, Fut>(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: F,
    ) -> Result<Self, FunctionError>
    where
        T: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, FunctionError>> + Send + 'static,
    {
        let schema = FunctionSchema::typed::<T>()?;
        let handler = Arc::new(handler);

        Self::new(name, description, schema, move |args: Value| {
            let handler = Arc::clone(&handler);
            async move {
                let typed = serde_json::from_value::<T>(args)
                    .map_err(|err| FunctionError::schema_mismatch(err.to_string()))?;
                handler(typed).await
            }
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schema(&self) -> &FunctionSchema {
        &self.schema
    }

    pub fn wire_schema(&self) -> &Value {
        &self.wire_schema
    }

    /// The (name, description, wire schema) triple sent to the provider.
    pub fn spec(&self) -> FunctionSpec {
        FunctionSpec {
            name: self.name.clone(),
            description: self.description.clone(),
            parameters: self.wire_schema.clone(),
        }
    }

    pub fn invoke(&self, args: Value) -> BoxFuture<'static, Result<Value, FunctionError>> {
        (self.handler)(args)
    }
}

impl std::fmt::Debug for FunctionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
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
    struct WeatherArgs {
        city: String,
    }

    #[tokio::test]
    async fn descriptor_invokes_handler_with_arguments() {
        let descriptor = FunctionDescriptor::new(
            "echo",
            "Echoes its arguments",
            FunctionSchema::document(json!({"type": "object"})),
            |args| async move { Ok(args) },
        )
        .expect("descriptor should build");

        let result = descriptor
            .invoke(json!({"text": "hello"}))
            .await
            .expect("invocation should succeed");
        assert_eq!(result, json!({"text": "hello"}));
    }

    #[tokio::test]
    async fn typed_descriptor_hands_deserialized_arguments_to_the_handler() {
        let descriptor = FunctionDescriptor::typed::<WeatherArgs, _, _>(
            "get_weather",
            "Current weather for a city",
            |args: WeatherArgs| async move { Ok(json!({"city": args.city, "tempC": 18})) },
        )
        .expect("descriptor should build");

        assert!(descriptor.wire_schema().get("properties").is_some());

        let result = descriptor
            .invoke(json!({"city": "Paris"}))
            .await
            .expect("invocation should succeed");
        assert_eq!(result, json!({"city": "Paris", "tempC": 18}));
    }

    #[test]
    fn empty_name_is_rejected() {
        let error = FunctionDescriptor::new(
            "   ",
            "Unnamed",
            FunctionSchema::document(json!({"type": "object"})),
            |args| async move { Ok(args) },
        )
        .expect_err("empty name should fail");
        assert_eq!(error.kind, FunctionErrorKind::Definition);
    }

    #[test]
    fn spec_carries_name_description_and_wire_schema() {
        let document = json!({"type": "object", "properties": {}});
        let descriptor = FunctionDescriptor::new(
            "lookup",
            "Looks things up",
            FunctionSchema::document(document.clone()),
            |args| async move { Ok(args) },
        )
        .expect("descriptor should build");

        let spec = descriptor.spec();
        assert_eq!(spec.name, "lookup");
        assert_eq!(spec.description, "Looks things up");
        assert_eq!(spec.parameters, document);
    }
}
