use std::future::Future;
use std::pin::Pin;

use crate::{CompletionRequest, CompletionResponse, ProviderError};

pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The sole network boundary: one conversation turn against a hosted
/// chat-completion service. Timeouts and transport-level retries are the
/// implementor's responsibility.
pub trait CompletionProvider: Send + Sync {
    fn complete<'a>(
        &'a self,
        request: CompletionRequest,
    ) -> ProviderFuture<'a, Result<CompletionResponse, ProviderError>>;
}
