//! This module defines the `Machine` struct, which simulates a single-tape, single-head
//! deterministic Turing machine. It owns the tape, the head position and the current
//! state, and applies one transition per call to `step`.

use crate::analyzer::analyze;
use crate::config::MachineConfig;
use crate::runner::{self, Execution, RunOptions};
use crate::tape::Tape;
use crate::types::{Direction, MachineError, Outcome, Step, StepRecord, Symbol};
use tracing::{debug, trace};

/// A deterministic Turing machine.
///
/// Each instance exclusively owns its tape, head and state, so independent
/// machines can be driven from independent threads without coordination.
#[derive(Debug, Clone)]
pub struct Machine {
    config: MachineConfig,
    state: String,
    tape: Tape,
    head: usize,
    step_count: usize,
}

impl Machine {
    /// Creates a machine from `config` without validating it. The machine starts
    /// reset: a single blank cell, head at 0, in the start state.
    pub fn new(config: MachineConfig) -> Self {
        Self {
            state: config.start_state.clone(),
            tape: Tape::new(config.blank),
            head: 0,
            step_count: 0,
            config,
        }
    }

    /// Creates a machine after running the analyzer over `config`.
    ///
    /// # Returns
    ///
    /// * `Ok(Machine)` if the configuration passes analysis.
    /// * `Err(MachineError::Validation)` describing the first problem found.
    pub fn try_new(config: MachineConfig) -> Result<Self, MachineError> {
        analyze(&config)?;
        Ok(Self::new(config))
    }

    /// Restores the tape to a single blank cell, the head to 0 and the state to
    /// the start state. The configuration is kept.
    pub fn reset(&mut self) {
        self.tape = Tape::new(self.config.blank);
        self.head = 0;
        self.state = self.config.start_state.clone();
        self.step_count = 0;
    }

    /// Replaces the tape with `input`, taken verbatim, and moves the head to 0.
    ///
    /// The current state and step count are left alone; call `reset` first to
    /// start a fresh computation.
    pub fn load_tape(&mut self, input: &str) {
        self.tape = Tape::from_input(input, self.config.blank);
        self.head = 0;
    }

    /// Executes a single transition.
    ///
    /// # Returns
    ///
    /// * `Step::Continue(record)` if a rule was applied.
    /// * `Step::Halted` if the machine was already in the accept or reject state.
    /// * `Step::NoTransition` if no rule matched; the machine is now in the reject state.
    pub fn step(&mut self) -> Step {
        if self.is_halted() {
            return Step::Halted;
        }

        let read = self.symbol();
        let transition = match self.config.transitions.lookup(&self.state, read) {
            Some(t) => t.clone(),
            None => {
                debug!(state = %self.state, symbol = %read, "no transition, rejecting");
                self.state = self.config.reject_state.clone();
                return Step::NoTransition;
            }
        };

        let index = self.head;
        let changed = self
            .tape
            .write(index as isize, transition.write)
            .then_some(index);

        match transition.direction {
            Direction::Left => {
                if self.head == 0 {
                    // Existing cells shift up by one; the head stays on index 0.
                    self.tape.extend_left();
                } else {
                    self.head -= 1;
                }
            }
            Direction::Right => {
                self.head += 1;
                if self.head >= self.tape.len() {
                    self.tape.extend_right();
                }
            }
            Direction::Stay => {}
        }

        let from = std::mem::replace(&mut self.state, transition.next_state);
        self.step_count += 1;

        trace!(
            step = self.step_count,
            from = %from,
            read = %read,
            to = %self.state,
            write = %transition.write,
            direction = %transition.direction,
            "transition"
        );

        Step::Continue(StepRecord {
            step: self.step_count,
            from,
            read,
            to: self.state.clone(),
            written: transition.write,
            direction: transition.direction,
            changed,
            head: self.head,
        })
    }

    /// Runs the machine for at most `max_steps` transitions.
    pub fn run(&mut self, max_steps: usize) -> Result<Execution, MachineError> {
        runner::run(self, RunOptions { max_steps })
    }

    /// Returns the current state.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the tape.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// Returns the head position, a non-negative index into the tape.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns the symbol under the head, blank if the cell is not materialized.
    pub fn symbol(&self) -> Symbol {
        self.tape.read(self.head as isize)
    }

    /// Returns the number of transitions applied since the last reset.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Returns the configuration the machine was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Checks whether the machine is in its accept or reject state.
    pub fn is_halted(&self) -> bool {
        self.config.is_terminal(&self.state)
    }

    /// Classifies the current state: accept, reject, or anything else as exhausted.
    pub fn outcome(&self) -> Outcome {
        if self.state == self.config.accept_state {
            Outcome::Accepted
        } else if self.state == self.config.reject_state {
            Outcome::Rejected
        } else {
            Outcome::Exhausted
        }
    }
}
