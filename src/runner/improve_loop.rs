//! The improvement loop.
//!
//! Each iteration: show the code, optionally run it, refresh the task list
//! (initial list on the first pass, propose + reprioritize afterwards),
//! execute one task as a full rewrite, repeat while tasks remain. The user
//! gates code execution, task selection, and continuation unless the
//! autonomous / assume-yes flags say otherwise.

use log::{debug, info};

use crate::error::{KaizenError, Result};
use crate::exec::CodeRunner;
use crate::parse::extract_code;
use crate::planner::TaskPlanner;
use crate::tasks::TaskBoard;
use crate::ui::{self, Prompter};

/// Behavior toggles from the CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopOptions {
    /// Take the top task automatically instead of asking
    pub autonomous: bool,
    /// Assume "yes" at the run-code and continue gates
    pub assume_yes: bool,
}

/// How the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    /// No pending tasks remained
    Completed,
    /// The user declined to continue
    Stopped,
}

/// Final state of a finished loop
#[derive(Debug, Clone)]
pub struct LoopOutcome {
    pub status: LoopStatus,
    /// Number of completed iterations
    pub iterations: u32,
    /// The code as of the last executed task
    pub code: String,
    /// Tasks executed, in order
    pub completed_tasks: Vec<String>,
}

/// Drives the improvement loop over one piece of code
pub struct ImproveLoop<P: Prompter> {
    planner: TaskPlanner,
    runner: CodeRunner,
    prompter: P,
    options: LoopOptions,
}

impl<P: Prompter> ImproveLoop<P> {
    /// Create a loop from its collaborators
    pub fn new(planner: TaskPlanner, runner: CodeRunner, prompter: P, options: LoopOptions) -> Self {
        Self {
            planner,
            runner,
            prompter,
            options,
        }
    }

    /// Run the loop to completion over `source`.
    ///
    /// The source is fence-stripped first so a file saved from an earlier
    /// session loads cleanly.
    pub async fn run(&mut self, source: &str) -> Result<LoopOutcome> {
        let mut code = extract_code(source);
        if code.is_empty() {
            return Err(KaizenError::InvalidInput(
                "source file is empty".to_string(),
            ));
        }
        let mut board = TaskBoard::new();
        let mut iteration: u32 = 0;

        loop {
            ui::print_banner(iteration);
            ui::print_code("CODE", &code);

            let output = self.maybe_run(&code).await?;
            if let Some(out) = output.as_deref().filter(|o| !o.is_empty()) {
                ui::print_output(out);
            }
            let output_ref = output.as_deref().unwrap_or("");

            if iteration == 0 {
                let tasks = self.planner.initial_tasks(&code, output_ref).await?;
                board.set_pending(tasks);
            } else {
                let proposals = self
                    .planner
                    .propose_tasks(&code, output_ref, board.completed(), board.pending())
                    .await?;
                debug!("merging {} proposals into pending list", proposals.len());
                let mut merged = board.pending().to_vec();
                merged.extend(proposals);
                let prioritized = self.planner.prioritize(&merged, &code, output_ref).await?;
                board.set_pending(prioritized);
            }

            ui::print_tasks(&board.render_pending());

            let Some(task) = self.next_task(&mut board)? else {
                info!("no pending tasks left after {} iterations", iteration);
                break;
            };

            ui::print_task(&task);

            code = self
                .planner
                .rewrite(&code, output_ref, board.completed(), &task)
                .await?;
            board.complete(task);

            ui::print_code("NEW CODE", &code);

            if !self.options.assume_yes && !self.prompter.confirm("Continue?", true)? {
                info!("stopped by user after iteration {}", iteration);
                return Ok(LoopOutcome {
                    status: LoopStatus::Stopped,
                    iterations: iteration + 1,
                    code,
                    completed_tasks: board.completed().to_vec(),
                });
            }

            iteration += 1;

            if !board.has_pending() {
                info!("task list drained after {} iterations", iteration);
                break;
            }
        }

        Ok(LoopOutcome {
            status: LoopStatus::Completed,
            iterations: iteration,
            code,
            completed_tasks: board.completed().to_vec(),
        })
    }

    /// Run the code if the user (or --yes) allows it
    async fn maybe_run(&mut self, code: &str) -> Result<Option<String>> {
        let should_run = self.options.assume_yes || self.prompter.confirm("Run code?", false)?;
        if should_run {
            Ok(Some(self.runner.run(code).await?))
        } else {
            Ok(None)
        }
    }

    /// Pick the next task: top of the list in autonomous mode, user choice otherwise
    fn next_task(&mut self, board: &mut TaskBoard) -> Result<Option<String>> {
        if !board.has_pending() {
            return Ok(None);
        }
        if self.options.autonomous {
            return Ok(board.take_first());
        }
        let index = self.prompter.select_task(board.pending_len())?;
        Ok(board.take(index))
    }
}
