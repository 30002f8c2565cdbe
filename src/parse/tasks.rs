//! Task-list parsing and rendering.
//!
//! Task prompts ask for numbered bullets (`1. First task`). Models drift:
//! `#.` placeholders, stray blank lines, preamble sentences. The parser
//! keeps any line with a `.` separator and a task body of at least three
//! characters, which drops headers and degenerate fragments.

/// Minimum length for a parsed task body
const MIN_TASK_LEN: usize = 3;

/// Parse a bullet-list completion into task strings.
///
/// Each line is split on the first `.`; the remainder is the task. Lines
/// without a separator, or with a body shorter than three characters, are
/// skipped.
pub fn parse_task_list(response: &str) -> Vec<String> {
    let mut tasks = Vec::new();
    for line in response.lines() {
        if let Some((_, rest)) = line.trim().split_once('.') {
            let task = rest.trim();
            if task.len() >= MIN_TASK_LEN {
                tasks.push(task.to_string());
            }
        }
    }
    tasks
}

/// Render tasks as a 1-based numbered list, one per line.
pub fn render_numbered(tasks: &[String]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| format!("{}. {}", idx + 1, task))
        .collect::<Vec<_>>()
        .join("\n")
}
