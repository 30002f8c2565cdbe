//! Code execution - run the current code as an interpreter subprocess.
//!
//! The code text is passed via `-c`; stdout and stderr are captured and
//! concatenated. A nonzero exit status is not an error: the captured
//! stderr is exactly the feedback the next prompt needs.

use std::process::Stdio;
use std::time::Duration;

use log::debug;
use tokio::process::Command;

use crate::error::{KaizenError, Result};

/// Configuration for the code runner
#[derive(Debug, Clone)]
pub struct ExecConfig {
    /// Interpreter command, e.g. `python3`
    pub interpreter: String,
    /// Wall-clock limit for one run
    pub timeout: Duration,
    /// Combined output is truncated beyond this many bytes
    pub max_output_bytes: usize,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            timeout: Duration::from_secs(30),
            max_output_bytes: 100_000,
        }
    }
}

/// Runs code snippets through the configured interpreter
#[derive(Debug, Clone)]
pub struct CodeRunner {
    config: ExecConfig,
}

impl CodeRunner {
    /// Create a runner with default configuration
    pub fn new() -> Self {
        Self::with_config(ExecConfig::default())
    }

    /// Create a runner with explicit configuration
    pub fn with_config(config: ExecConfig) -> Self {
        Self { config }
    }

    /// The interpreter this runner invokes
    pub fn interpreter(&self) -> &str {
        &self.config.interpreter
    }

    /// Run `code` via `<interpreter> -c <code>` and capture combined output.
    ///
    /// Returns stdout, a newline, then stderr, trimmed. The exit status is
    /// intentionally ignored; a traceback on stderr is useful loop feedback.
    pub async fn run(&self, code: &str) -> Result<String> {
        debug!(
            "running {} bytes of code via {}",
            code.len(),
            self.config.interpreter
        );

        let output = tokio::time::timeout(
            self.config.timeout,
            Command::new(&self.config.interpreter)
                .arg("-c")
                .arg(code)
                .stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output(),
        )
        .await
        .map_err(|_| {
            KaizenError::Exec(format!(
                "{} timed out after {}ms",
                self.config.interpreter,
                self.config.timeout.as_millis()
            ))
        })?
        .map_err(|e| {
            KaizenError::Exec(format!("failed to spawn {}: {}", self.config.interpreter, e))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{}\n{}", stdout, stderr).trim().to_string();

        Ok(self.truncate(combined))
    }

    fn truncate(&self, output: String) -> String {
        let limit = self.config.max_output_bytes;
        if output.len() <= limit {
            return output;
        }
        // Cut on a char boundary at or below the limit
        let mut end = limit;
        while end > 0 && !output.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}...\n[truncated, {} bytes total]",
            &output[..end],
            output.len()
        )
    }
}

impl Default for CodeRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Use `sh -c` in tests so they do not depend on a Python install
    fn sh_runner() -> CodeRunner {
        CodeRunner::with_config(ExecConfig {
            interpreter: "sh".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_default_config() {
        let config = ExecConfig::default();
        assert_eq!(config.interpreter, "python3");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_output_bytes, 100_000);
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let runner = sh_runner();
        let output = runner.run("echo 'Hello, World!'").await.unwrap();
        assert_eq!(output, "Hello, World!");
    }

    #[tokio::test]
    async fn test_run_captures_stderr() {
        let runner = sh_runner();
        let output = runner.run("echo 'boom' >&2").await.unwrap();
        assert_eq!(output, "boom");
    }

    #[tokio::test]
    async fn test_run_combines_stdout_and_stderr() {
        let runner = sh_runner();
        let output = runner.run("echo out; echo err >&2").await.unwrap();
        assert!(output.contains("out"));
        assert!(output.contains("err"));
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_not_an_error() {
        let runner = sh_runner();
        let output = runner.run("echo 'failed' >&2; exit 1").await.unwrap();
        assert_eq!(output, "failed");
    }

    #[tokio::test]
    async fn test_empty_output() {
        let runner = sh_runner();
        let output = runner.run("true").await.unwrap();
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_timeout() {
        let runner = CodeRunner::with_config(ExecConfig {
            interpreter: "sh".to_string(),
            timeout: Duration::from_millis(100),
            ..Default::default()
        });

        let result = runner.run("sleep 10").await;
        assert!(matches!(result, Err(KaizenError::Exec(_))));
        assert!(result.unwrap_err().to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn test_missing_interpreter() {
        let runner = CodeRunner::with_config(ExecConfig {
            interpreter: "definitely-not-an-interpreter".to_string(),
            ..Default::default()
        });

        let result = runner.run("whatever").await;
        assert!(matches!(result, Err(KaizenError::Exec(_))));
    }

    #[tokio::test]
    async fn test_truncates_long_output() {
        let runner = CodeRunner::with_config(ExecConfig {
            interpreter: "sh".to_string(),
            max_output_bytes: 100,
            ..Default::default()
        });

        let output = runner
            .run("for i in $(seq 1 100); do echo 'aaaaaaaaaaaaaaaa'; done")
            .await
            .unwrap();
        assert!(output.contains("[truncated,"));
        assert!(output.len() < 200);
    }
}
