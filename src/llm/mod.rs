//! LLM client layer
//!
//! One chat-completion request per prompt: synchronous, no streaming, no
//! tool use. The Anthropic client is the production implementation; tests
//! use MockLlmClient.

mod anthropic;
mod client;
mod types;

pub use anthropic::{AnthropicClient, AnthropicConfig};
pub use client::{LlmClient, MockLlmClient};
pub use types::{CompletionRequest, CompletionResponse, Message, Role, StopReason, Usage};
