//! Task planner - the four LLM operations behind the improvement loop.
//!
//! Each operation renders a template, issues one completion, and parses the
//! response (task list or rewritten code). The planner holds no loop state;
//! the caller owns the task board and the current code.

use std::sync::Arc;

use log::debug;
use serde_json::json;

use crate::error::Result;
use crate::llm::{CompletionRequest, LlmClient};
use crate::parse::{extract_code, parse_task_list, render_numbered};
use crate::prompt::{PromptRenderer, templates};

/// Planner tuning knobs
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Cap on the pending list after prioritization
    pub max_tasks: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { max_tasks: 10 }
    }
}

/// Issues prompt operations against an LlmClient
pub struct TaskPlanner {
    client: Arc<dyn LlmClient>,
    renderer: PromptRenderer,
    config: PlannerConfig,
}

impl TaskPlanner {
    /// Create a planner with default configuration
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self::with_config(client, PlannerConfig::default())
    }

    /// Create a planner with explicit configuration
    pub fn with_config(client: Arc<dyn LlmClient>, config: PlannerConfig) -> Self {
        Self {
            client,
            renderer: PromptRenderer::new(),
            config,
        }
    }

    /// Ask for the initial improvement task list
    pub async fn initial_tasks(&self, code: &str, output: &str) -> Result<Vec<String>> {
        let user = self.renderer.render(
            templates::INITIAL_TASKS,
            &json!({ "code": code, "output": output }),
        )?;

        let response = self
            .client
            .complete(
                CompletionRequest::new(templates::IMPROVE_SYSTEM).with_user_message(user),
            )
            .await?;

        let tasks = parse_task_list(&response.content);
        debug!("initial_tasks: parsed {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Ask for up to three new tasks that overlap neither list
    pub async fn propose_tasks(
        &self,
        code: &str,
        output: &str,
        completed: &[String],
        pending: &[String],
    ) -> Result<Vec<String>> {
        let user = self.renderer.render(
            templates::PROPOSE_TASKS,
            &json!({
                "code": code,
                "output": output,
                "completed": render_numbered(completed),
                "pending": render_numbered(pending),
            }),
        )?;

        let response = self
            .client
            .complete(
                CompletionRequest::new(templates::IMPROVE_SYSTEM).with_user_message(user),
            )
            .await?;

        let tasks = parse_task_list(&response.content);
        debug!("propose_tasks: parsed {} proposals", tasks.len());
        Ok(tasks)
    }

    /// Clean up and reprioritize a merged task list
    pub async fn prioritize(
        &self,
        tasks: &[String],
        code: &str,
        output: &str,
    ) -> Result<Vec<String>> {
        let user = self.renderer.render(
            templates::PRIORITIZE_TASKS,
            &json!({
                "tasks": render_numbered(tasks),
                "max_tasks": self.config.max_tasks,
                "code": code,
                "output": output,
            }),
        )?;

        let response = self
            .client
            .complete(
                CompletionRequest::new(templates::PRIORITIZE_SYSTEM).with_user_message(user),
            )
            .await?;

        let mut prioritized = parse_task_list(&response.content);
        // The model is asked to stay under the cap; enforce it anyway
        prioritized.truncate(self.config.max_tasks);
        debug!("prioritize: {} -> {} tasks", tasks.len(), prioritized.len());
        Ok(prioritized)
    }

    /// Execute one task: returns the rewritten code, fence stripped
    pub async fn rewrite(
        &self,
        code: &str,
        output: &str,
        completed: &[String],
        task: &str,
    ) -> Result<String> {
        let user = self.renderer.render(
            templates::EXECUTE_TASK,
            &json!({
                "code": code,
                "output": output,
                "completed": render_numbered(completed),
                "task": task,
            }),
        )?;

        let response = self
            .client
            .complete(
                CompletionRequest::new(templates::EXECUTE_SYSTEM).with_user_message(user),
            )
            .await?;

        Ok(extract_code(&response.content))
    }
}
