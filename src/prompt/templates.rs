//! Embedded prompt templates.
//!
//! One system/user template pair per LLM operation. The `output` section is
//! conditional: when the user declined to run the code there is no output
//! to show, and the section is omitted entirely.

/// Persona for task-list generation and rewriting
pub const IMPROVE_SYSTEM: &str = "You are a rockstar Python programmer tasked to improve a piece \
of Python code written by a novice. Your goal is to make the code correct, short and efficient. \
Do not add boilerplate code.";

/// Persona for single-task execution
pub const EXECUTE_SYSTEM: &str = "You are a rockstar Python programmer who performs one task to \
improve a piece of Python code written by a novice. Your goal is to make the code correct, short \
and efficient. Do not add boilerplate code.";

/// Persona for task-list cleanup and prioritization
pub const PRIORITIZE_SYSTEM: &str = "You are a task prioritization expert.";

/// Initial task list: code (+ optional output) in, bullet list out
pub const INITIAL_TASKS: &str = r#"Current code:
```python
{{code}}
```

{{#if output}}Current output:
```
{{output}}
```

{{/if}}Provide an initial list of tasks to improve the code. Return the list as a bullet list, like:
#. First task
#. Second task"#;

/// Propose 0-3 new tasks that overlap neither pending nor completed ones
pub const PROPOSE_TASKS: &str = r#"Current code:
```python
{{code}}
```

{{#if output}}Current output:
```
{{output}}
```

{{/if}}Take into account these previously completed tasks:
{{completed}}

Take into account these uncompleted tasks:
{{pending}}

Return a short list of new tasks (0 to 3) that need to be completed to improve the code. Do not propose new tasks that overlap with the uncompleted tasks. Do not propose tasks that have already been completed. Return the list as a bullet list, like:
#. First task
#. Second task"#;

/// Clean up and reprioritize the merged task list, bug fixes first
pub const PRIORITIZE_TASKS: &str = r#"You are tasked with cleaning the formatting of and reprioritizing the following list of tasks:
{{tasks}}

Prioritize major bug fixes first. If needed, remove tasks that are redundant or no longer necessary. Keep {{max_tasks}} tasks at most. The ultimate goal is to make a piece of Python code correct, short and efficient.

Current code:
```python
{{code}}
```

{{#if output}}Current output:
```
{{output}}
```

{{/if}}Return the list as a bullet list, like:
#. First task
#. Second task"#;

/// Execute one task: rewritten code only, nothing else
pub const EXECUTE_TASK: &str = r#"Current code:
```python
{{code}}
```

{{#if output}}Current output:
```
{{output}}
```

{{/if}}Take into account these previously completed tasks:
{{completed}}

Your next task: {{task}}

Return the code WITHOUT making ANY other changes than those necessary for the current task. Keep tests if any. Return code ONLY. No verbose, no chat, no comments, no explanations."#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::render::PromptRenderer;
    use serde_json::json;

    #[test]
    fn test_initial_tasks_with_output() {
        let renderer = PromptRenderer::new();
        let rendered = renderer
            .render(
                INITIAL_TASKS,
                &json!({"code": "print(1)", "output": "1"}),
            )
            .unwrap();

        assert!(rendered.contains("Current code:"));
        assert!(rendered.contains("print(1)"));
        assert!(rendered.contains("Current output:"));
        assert!(rendered.contains("#. First task"));
    }

    #[test]
    fn test_initial_tasks_without_output() {
        let renderer = PromptRenderer::new();
        let rendered = renderer
            .render(INITIAL_TASKS, &json!({"code": "print(1)", "output": ""}))
            .unwrap();

        assert!(!rendered.contains("Current output:"));
        assert!(rendered.contains("Provide an initial list of tasks"));
    }

    #[test]
    fn test_propose_tasks_includes_both_lists() {
        let renderer = PromptRenderer::new();
        let rendered = renderer
            .render(
                PROPOSE_TASKS,
                &json!({
                    "code": "x = 1",
                    "output": "",
                    "completed": "1. Renamed variables",
                    "pending": "1. Add tests",
                }),
            )
            .unwrap();

        assert!(rendered.contains("previously completed tasks:\n1. Renamed variables"));
        assert!(rendered.contains("uncompleted tasks:\n1. Add tests"));
        assert!(rendered.contains("(0 to 3)"));
    }

    #[test]
    fn test_prioritize_tasks_caps_count() {
        let renderer = PromptRenderer::new();
        let rendered = renderer
            .render(
                PRIORITIZE_TASKS,
                &json!({
                    "tasks": "1. a task\n2. b task",
                    "max_tasks": 10,
                    "code": "x = 1",
                    "output": "boom",
                }),
            )
            .unwrap();

        assert!(rendered.contains("Keep 10 tasks at most"));
        assert!(rendered.contains("1. a task"));
        assert!(rendered.contains("Current output:"));
    }

    #[test]
    fn test_execute_task_demands_code_only() {
        let renderer = PromptRenderer::new();
        let rendered = renderer
            .render(
                EXECUTE_TASK,
                &json!({
                    "code": "x = 1",
                    "output": "",
                    "completed": "",
                    "task": "Add a docstring",
                }),
            )
            .unwrap();

        assert!(rendered.contains("Your next task: Add a docstring"));
        assert!(rendered.contains("Return code ONLY."));
    }

    #[test]
    fn test_personas_are_distinct() {
        assert_ne!(IMPROVE_SYSTEM, EXECUTE_SYSTEM);
        assert!(PRIORITIZE_SYSTEM.contains("prioritization"));
    }
}
