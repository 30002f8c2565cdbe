//! Lightweight text parsing for model completions.

mod code;
mod tasks;

pub use code::extract_code;
pub use tasks::{parse_task_list, render_numbered};
