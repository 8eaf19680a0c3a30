use async_trait::async_trait;
use futures::{StreamExt, stream};
use prompt_relay::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, LlmClient, TextStream},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing. Every call returns the same canned output,
/// so repeated requests are deterministic.
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub response: Option<ChatCompletionResponse>,
    pub chunks: Vec<String>,
    pub stream_error: Option<String>,
    pub error: Option<String>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, response: ChatCompletionResponse) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_chunks(mut self, chunks: &[&str]) -> Self {
        self.chunks = chunks.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Fails the stream after all chunks have been emitted.
    pub fn with_stream_error(mut self, error: &str) -> Self {
        self.stream_error = Some(error.to_string());
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: ChatCompletionRequest) -> Result<()> {
        self.requests.lock().unwrap().push(request);

        match self.error {
            Some(ref error) => Err(Error::llm(error.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.record(request)?;

        self.response
            .clone()
            .ok_or_else(|| Error::llm("No mock response configured"))
    }

    async fn create_chat_completion_stream(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<TextStream> {
        self.record(request)?;

        let mut items: Vec<Result<String>> = self.chunks.iter().cloned().map(Ok).collect();
        if let Some(ref error) = self.stream_error {
            items.push(Err(Error::llm(error.clone())));
        }

        Ok(stream::iter(items).boxed())
    }
}

// Helper functions for creating test data

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        model: "test-model".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ChatMessage::assistant(content),
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

pub fn create_empty_chat_response() -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "test-id".to_string(),
        model: "test-model".to_string(),
        choices: vec![],
        usage: None,
    }
}
