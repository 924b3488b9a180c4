//! The run driver: repeatedly steps a `Machine` within a step budget, collects the
//! `StepRecord`s and classifies the result. Rendering is left to the caller.

use crate::machine::Machine;
use crate::types::{MachineError, Outcome, Step, StepRecord, DEFAULT_MAX_STEPS};
use serde::Serialize;
use tracing::{debug, warn};

/// Options for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Upper bound on the number of `step` calls. Must be positive.
    pub max_steps: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// The result of a run: every applied transition in order plus the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Execution {
    pub records: Vec<StepRecord>,
    pub outcome: Outcome,
    /// The state the machine ended in.
    pub state: String,
    /// The materialized tape at the end of the run.
    pub tape: String,
}

/// Runs `machine` until it halts or `options.max_steps` transitions were applied.
///
/// A halting step is not recorded. The outcome is read from the final state, so a
/// machine that is still non-terminal when the budget runs out is `Exhausted`.
///
/// # Returns
///
/// * `Ok(Execution)` with the records and the outcome.
/// * `Err(MachineError::InvalidStepBudget)` if `max_steps` is zero.
pub fn run(machine: &mut Machine, options: RunOptions) -> Result<Execution, MachineError> {
    if options.max_steps == 0 {
        return Err(MachineError::InvalidStepBudget);
    }

    debug!(
        state = machine.state(),
        tape = %machine.tape(),
        max_steps = options.max_steps,
        "run started"
    );

    let mut records = Vec::new();
    while records.len() < options.max_steps {
        match machine.step() {
            Step::Continue(record) => records.push(record),
            Step::Halted | Step::NoTransition => break,
        }
    }

    let outcome = machine.outcome();
    match outcome {
        Outcome::Exhausted => warn!(
            max_steps = options.max_steps,
            state = machine.state(),
            "machine did not halt within the step budget"
        ),
        _ => debug!(%outcome, steps = records.len(), "machine halted"),
    }

    Ok(Execution {
        records,
        outcome,
        state: machine.state().to_string(),
        tape: machine.tape().to_string(),
    })
}
