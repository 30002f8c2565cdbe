//! Core LLM client trait and the mock used by tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{KaizenError, Result};
use crate::llm::types::{CompletionRequest, CompletionResponse};

/// Stateless LLM client - each call is an independent completion
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Single completion request (blocking until complete, no streaming)
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Model identifier this client talks to
    fn model(&self) -> &str;

    /// Whether the client is configured well enough to issue requests
    fn is_ready(&self) -> bool;
}

/// Mock client returning canned responses in order.
///
/// Records every request it receives so tests can assert on prompt content.
pub struct MockLlmClient {
    responses: Mutex<VecDeque<CompletionResponse>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockLlmClient {
    /// Create a mock with a queue of canned responses
    pub fn new(responses: Vec<CompletionResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Convenience: build a mock from plain response texts
    pub fn with_texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| CompletionResponse::text(*t)).collect())
    }

    /// Requests observed so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of canned responses not yet consumed
    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| KaizenError::Llm("mock response queue exhausted".to_string()))
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_in_order() {
        let mock = MockLlmClient::with_texts(&["first", "second"]);

        let r1 = mock.complete(CompletionRequest::new("sys")).await.unwrap();
        let r2 = mock.complete(CompletionRequest::new("sys")).await.unwrap();

        assert_eq!(r1.content, "first");
        assert_eq!(r2.content, "second");
        assert_eq!(mock.remaining(), 0);
    }

    #[tokio::test]
    async fn test_mock_exhausted_is_error() {
        let mock = MockLlmClient::with_texts(&[]);
        let result = mock.complete(CompletionRequest::new("sys")).await;
        assert!(matches!(result, Err(KaizenError::Llm(_))));
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let mock = MockLlmClient::with_texts(&["ok"]);

        let request = CompletionRequest::new("persona").with_user_message("improve this");
        mock.complete(request).await.unwrap();

        let seen = mock.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].system, "persona");
        assert_eq!(seen[0].messages[0].content, "improve this");
    }

    #[test]
    fn test_mock_is_ready() {
        let mock = MockLlmClient::with_texts(&[]);
        assert!(mock.is_ready());
        assert_eq!(mock.model(), "mock-model");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockLlmClient>();
    }
}
