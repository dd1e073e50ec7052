//! Target execution module
//!
//! This module handles the actual execution of targets: spawning external
//! tools one at a time and stopping at the first step that fails.

pub mod command;
pub mod runner;

pub use command::{ProcessExecutor, StepExecutor, StepStatus};
pub use runner::{RunState, TaskRunner};
