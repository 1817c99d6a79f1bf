//! The function-calling conversation loop over a completion provider.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use jcommon::BoxFuture;
use jfunctions::{FunctionRegistry, corrective_message, decode_arguments};
use jprovider::{ChatMessage, CompletionProvider, CompletionRequest, FunctionSpec};

use crate::{
    ChatError, ChatLoopHooks, ChatOutcome, ChatRequest, ChatStatus, FunctionCallPolicy,
    NoopChatLoopHooks, RetryPolicy,
};

pub type SleepFn = Arc<dyn Fn(Duration) -> BoxFuture<'static, ()> + Send + Sync>;
pub type JitterFn = Arc<dyn Fn(Duration) -> Duration + Send + Sync>;

/// Runs conversations that resolve through registered function calls.
///
/// The runner itself is shareable; every `chat()` call owns its conversation
/// and retry counter exclusively. A conversation must be driven by one call
/// at a time — continuing the same logical conversation from concurrent
/// calls is the caller's responsibility to serialize.
pub struct ChatRunner {
    provider: Arc<dyn CompletionProvider>,
    registry: Arc<FunctionRegistry>,
    retry: RetryPolicy,
    hooks: Arc<dyn ChatLoopHooks>,
    sleep: SleepFn,
    jitter: JitterFn,
}

impl ChatRunner {
    pub fn new(provider: Arc<dyn CompletionProvider>, registry: Arc<FunctionRegistry>) -> Self {
        Self::builder(provider, registry).build()
    }

    pub fn builder(
        provider: Arc<dyn CompletionProvider>,
        registry: Arc<FunctionRegistry>,
    ) -> ChatRunnerBuilder {
        ChatRunnerBuilder::new(provider, registry)
    }

    pub fn registry(&self) -> Arc<FunctionRegistry> {
        Arc::clone(&self.registry)
    }

    /// Drives the conversation until the provider's selected function call
    /// resolves, a fatal error aborts the loop, or the retry limit is
    /// reached with validation still failing (flagged on the outcome, not
    /// raised).
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatOutcome, ChatError> {
        let ChatRequest {
            model,
            system_prompt,
            inputs,
            policy,
        } = request;

        if model.trim().is_empty() {
            return Err(ChatError::invalid_request("model must not be empty"));
        }

        if inputs.is_empty() {
            return Err(ChatError::invalid_request(
                "at least one input message is required",
            ));
        }

        // Specs and the forced name are computed once per call; registry
        // changes made while the loop is in flight are not reflected.
        let specs: Vec<FunctionSpec> = match policy {
            FunctionCallPolicy::Disabled => Vec::new(),
            _ => self.registry.specs(),
        };
        let forced = match &policy {
            FunctionCallPolicy::Forced(name) => Some(name.clone()),
            _ => None,
        };

        let mut conversation: Vec<ChatMessage> = Vec::with_capacity(inputs.len() + 1);
        if let Some(system_prompt) = system_prompt {
            conversation.push(ChatMessage::system(system_prompt));
        }
        conversation.extend(inputs.into_iter().map(crate::ChatInput::into_message));

        let mut attempts: u32 = 0;

        loop {
            let completion_request = CompletionRequest::builder(model.clone())
                .messages(conversation.clone())
                .functions(specs.clone())
                .forced_function(forced.clone())
                .build()?;

            self.hooks
                .on_request_start(&model, attempts, conversation.len());
            let response = self.provider.complete(completion_request).await?;

            let selection = response
                .function_selection()
                .cloned()
                .ok_or_else(|| {
                    ChatError::protocol("completion response carried no function selection")
                })?;

            let descriptor = self.registry.lookup(&selection.name)?;

            self.hooks
                .on_decode_attempt(&selection.name, &selection.arguments);
            let validated = decode_arguments(&selection.arguments)
                .and_then(|args| descriptor.schema().validate(&args).map(|()| args));

            let needs_retry = match validated {
                Ok(args) => {
                    let started = Instant::now();
                    let result = descriptor.invoke(args).await.map_err(|error| {
                        ChatError::from(error.with_function(descriptor.name()))
                    })?;
                    self.hooks
                        .on_function_invocation(descriptor.name(), started.elapsed());

                    let content = serde_json::to_string(&result).map_err(|err| {
                        ChatError::execution(format!(
                            "failed to serialize function result: {err}"
                        ))
                        .with_function(descriptor.name())
                    })?;
                    conversation.push(ChatMessage::function(descriptor.name(), content));
                    false
                }
                Err(error) if error.is_recoverable() => {
                    self.hooks.on_validation_failure(&selection.name, &error);
                    conversation.push(corrective_message(&selection.name, &error));
                    attempts += 1;
                    true
                }
                Err(error) => {
                    return Err(ChatError::from(error.with_function(selection.name)));
                }
            };

            // Every round trip is paced, not only failed ones.
            let delay = self
                .retry
                .delay_for(attempts, (self.jitter)(self.retry.jitter_bound));

            if needs_retry && self.retry.allows_retry(attempts) {
                self.hooks.on_retry_scheduled(attempts, delay);
                (self.sleep)(delay).await;
                continue;
            }

            (self.sleep)(delay).await;

            let status = if needs_retry {
                ChatStatus::RetriesExhausted
            } else {
                ChatStatus::Completed
            };
            self.hooks.on_loop_complete(attempts, status);

            return Ok(ChatOutcome {
                response,
                conversation,
                attempts,
                status,
            });
        }
    }
}

pub struct ChatRunnerBuilder {
    provider: Arc<dyn CompletionProvider>,
    registry: Arc<FunctionRegistry>,
    retry: RetryPolicy,
    hooks: Arc<dyn ChatLoopHooks>,
    sleep: SleepFn,
    jitter: JitterFn,
}

impl ChatRunnerBuilder {
    pub fn new(provider: Arc<dyn CompletionProvider>, registry: Arc<FunctionRegistry>) -> Self {
        Self {
            provider,
            registry,
            retry: RetryPolicy::default(),
            hooks: Arc::new(NoopChatLoopHooks),
            sleep: Arc::new(|delay| Box::pin(futures_timer::Delay::new(delay))),
            jitter: Arc::new(sample_jitter),
        }
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn ChatLoopHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn sleep_with<F, Fut>(mut self, sleep: F) -> Self
    where
        F: Fn(Duration) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.sleep = Arc::new(move |delay| Box::pin(sleep(delay)));
        self
    }

    pub fn jitter_with<F>(mut self, jitter: F) -> Self
    where
        F: Fn(Duration) -> Duration + Send + Sync + 'static,
    {
        self.jitter = Arc::new(jitter);
        self
    }

    pub fn build(self) -> ChatRunner {
        ChatRunner {
            provider: self.provider,
            registry: self.registry,
            retry: self.retry,
            hooks: self.hooks,
            sleep: self.sleep,
            jitter: self.jitter,
        }
    }
}

fn sample_jitter(bound: Duration) -> Duration {
    if bound.is_zero() {
        return Duration::ZERO;
    }

    bound.mul_f64(rand::random::<f64>())
}
