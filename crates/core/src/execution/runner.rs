//! Sequential target runner
//!
//! Runs the steps of an [`ExecutionPlan`] one after another and stops at the
//! first step that does not exit successfully. Nothing is retried.

use colored::*;

use crate::execution::command::StepExecutor;
use crate::plan::{ExecutionPlan, PlannedStep};
use crate::results::RunReport;
use crate::tasks::get_target_color;
use crate::targets::Target;
use crate::types::{GotaskError, GotaskResult};

/// Progress of a run.
///
/// `NotStarted` is the initial state. Each finished target moves the run to
/// `Completed(target)`; the first failing step moves it to `Failed(target)`,
/// which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Completed(Target),
    Failed(Target),
}

pub struct TaskRunner<E> {
    executor: E,
    state: RunState,
}

impl<E: StepExecutor> TaskRunner<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            state: RunState::NotStarted,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run every step of the plan in order
    pub async fn run(&mut self, plan: &ExecutionPlan) -> GotaskResult<RunReport> {
        let mut completed = Vec::new();
        let mut steps_run = 0;
        let mut current: Option<Target> = None;

        for planned in &plan.steps {
            if current != Some(planned.target) {
                if let Some(finished) = current {
                    self.complete(finished, &mut completed);
                }
                current = Some(planned.target);
                print_target_header(planned.target);
            }

            steps_run += 1;
            if let Err(err) = self.run_step(planned).await {
                self.state = RunState::Failed(planned.target);
                tracing::warn!(target_name = %planned.target, step = %planned.step, "step failed");
                return Err(err);
            }
        }

        if let Some(finished) = current {
            self.complete(finished, &mut completed);
        }

        Ok(RunReport {
            target: plan.target,
            completed,
            steps_run,
        })
    }

    async fn run_step(&self, planned: &PlannedStep) -> GotaskResult<()> {
        println!("{} {}", "$".bright_black(), planned.step.to_string().bright_black());

        let status = self.executor.execute(&planned.step).await?;
        if !status.success() {
            return Err(GotaskError::StepFailed {
                target: planned.target,
                step: planned.step.to_string(),
                code: status.code,
            });
        }
        Ok(())
    }

    fn complete(&mut self, target: Target, completed: &mut Vec<Target>) {
        self.state = RunState::Completed(target);
        completed.push(target);
        tracing::info!(target_name = %target, "target completed");
        println!(
            "{} {}",
            "✓".green().bold(),
            format!("Completed {}", target).color(get_target_color(target))
        );
    }
}

fn print_target_header(target: Target) {
    println!();
    println!(
        "┌─ {} {}",
        "Running target".bold(),
        target.name().color(get_target_color(target)).bold()
    );
    println!("└─ {}", target.description().bright_black());
}
