use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use futures::{StreamExt, stream};
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;

    /// Opens a streaming completion. Errors before the first event are
    /// returned directly; later ones surface as `Err` items in the stream.
    async fn create_chat_completion_stream(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<TextStream>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<openai_types::CreateChatCompletionRequest> {
        let messages = request
            .messages
            .iter()
            .map(ChatMessage::to_openai_message)
            .collect::<Result<Vec<_>>>()?;

        let mut request_builder = openai_types::CreateChatCompletionRequestArgs::default();
        request_builder.model(&self.model).messages(messages);

        if let Some(temperature) = self.temperature {
            request_builder.temperature(temperature);
        }

        if let Some(max_tokens) = self.max_tokens {
            request_builder.max_completion_tokens(max_tokens);
        }

        Ok(request_builder.build()?)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let openai_request = self.build_request(request)?;
        let response = self.client.chat().create(openai_request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choices = response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: ChatMessage::assistant(choice.message.content.unwrap_or_default()),
                finish_reason: choice.finish_reason.map(|fr| format!("{fr:?}")),
            })
            .collect();

        let usage = response.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(ChatCompletionResponse {
            id: response.id,
            model: response.model,
            choices,
            usage,
        })
    }

    async fn create_chat_completion_stream(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<TextStream> {
        debug!(
            "Creating streaming chat completion with {} messages",
            request.messages.len()
        );

        let openai_request = self.build_request(request)?;
        let mut events = self.client.chat().create_stream(openai_request).await?;

        // A rejected call (bad key, rate limit) only shows up as the first
        // event, so it is reported before the caller commits to a response.
        let first = match events.next().await {
            Some(Err(e)) => return Err(e.into()),
            first => first,
        };
        let events = stream::iter(first).chain(events);

        // Keep only the text deltas; role announcements and the final
        // finish_reason event carry no content.
        let chunks = events.filter_map(|event| async move {
            match event {
                Ok(chunk) => chunk
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.delta.content)
                    .filter(|text| !text.is_empty())
                    .map(Ok),
                Err(e) => Some(Err(Error::from(e))),
            }
        });

        Ok(chunks.boxed())
    }
}
