//! Function registry keyed by descriptor name.

use std::sync::Arc;

use jcommon::Registry;
use jprovider::FunctionSpec;

use crate::{FunctionDescriptor, FunctionError};

/// Holds the functions a conversation may call. Registration under an
/// existing name replaces the prior descriptor; deregistering an absent name
/// is a silent no-op. Lookup of an unknown name is a contract violation, not
/// a retryable condition.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: Registry<String, Arc<FunctionDescriptor>>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: FunctionDescriptor) {
        self.functions
            .insert(descriptor.name().to_string(), Arc::new(descriptor));
    }

    pub fn deregister(&mut self, name: &str) -> Option<Arc<FunctionDescriptor>> {
        self.functions.remove(name)
    }

    pub fn lookup(&self, name: &str) -> Result<Arc<FunctionDescriptor>, FunctionError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| FunctionError::not_registered(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Snapshot of the specs sent to the provider, in name order.
    pub fn specs(&self) -> Vec<FunctionSpec> {
        self.functions
            .values()
            .map(|descriptor| descriptor.spec())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
