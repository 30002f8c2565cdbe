//! Loop runner - drives the iterative improvement session.

mod improve_loop;

pub use improve_loop::{ImproveLoop, LoopOptions, LoopOutcome, LoopStatus};
