//! Capability layer for registering schema-described functions and
//! validating provider-produced arguments against them.

mod args;
mod descriptor;
mod error;
mod registry;
mod schema;

pub mod prelude {
    pub use crate::{
        FunctionDescriptor, FunctionError, FunctionErrorKind, FunctionHandler, FunctionRegistry,
        FunctionSchema, corrective_message, decode_arguments,
    };
}

pub use args::{corrective_message, decode_arguments};
pub use descriptor::{FunctionDescriptor, FunctionHandler};
pub use error::{FunctionError, FunctionErrorKind};
pub use registry::FunctionRegistry;
pub use schema::FunctionSchema;
