//! Terminal presentation and user interaction.
//!
//! Display goes straight to stdout with `colored`. Interaction goes through
//! the Prompter trait so the loop can be driven by stdin in the CLI and by
//! scripted answers in tests.

use std::io::{self, BufRead, Write};

use colored::*;

use crate::error::Result;

/// Answers the loop's questions: run the code? continue? which task?
pub trait Prompter: Send {
    /// Ask a yes/no question. `default` is returned for any answer that is
    /// neither "y" nor "n".
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Ask which pending task to execute next, out of `count` tasks.
    /// Returns a 0-based index.
    fn select_task(&mut self, count: usize) -> Result<usize>;
}

/// Interpret a yes/no answer; unrecognized input falls back to `default`
pub fn parse_confirm(answer: &str, default: bool) -> bool {
    match answer.trim() {
        "y" | "Y" => true,
        "n" | "N" => false,
        _ => default,
    }
}

/// Interpret a 1-based task id against a list of `count` tasks
pub fn parse_task_id(answer: &str, count: usize) -> Option<usize> {
    let id: usize = answer.trim().parse().ok()?;
    if id >= 1 && id <= count {
        Some(id - 1)
    } else {
        None
    }
}

/// Prompter reading answers from stdin
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

impl Prompter for StdinPrompter {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        print!("{} [y/n] ", question);
        io::stdout().flush()?;
        let answer = self.read_line()?;
        Ok(parse_confirm(&answer, default))
    }

    fn select_task(&mut self, count: usize) -> Result<usize> {
        loop {
            print!("Task id? ");
            io::stdout().flush()?;
            let answer = self.read_line()?;
            match parse_task_id(&answer, count) {
                Some(index) => return Ok(index),
                None => {
                    println!(
                        "{}",
                        format!("Enter a number between 1 and {}", count).yellow()
                    );
                }
            }
        }
    }
}

/// Iteration banner: `[3] ====...`
pub fn print_banner(iteration: u32) {
    println!(
        "\n{} {}\n",
        format!("[{}]", iteration).bold(),
        "=".repeat(80)
    );
}

/// Print a labeled code panel
pub fn print_code(label: &str, code: &str) {
    println!("{}\n{}\n", format!("{}:", label).cyan().bold(), code);
}

/// Print captured execution output
pub fn print_output(output: &str) {
    println!("{}\n{}\n", "OUTPUT:".cyan().bold(), output);
}

/// Print the pending task list
pub fn print_tasks(rendered: &str) {
    println!("{}\n{}\n", "PENDING TASKS:".cyan().bold(), rendered);
}

/// Print the task about to be executed
pub fn print_task(task: &str) {
    println!("{}\n{}\n", "TASK:".green().bold(), task);
}
