//! This module defines the core data structures and types shared by the engine:
//! symbols, head directions, transition rules, per-step records, run outcomes and
//! error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single tape symbol.
pub type Symbol = char;

/// The blank symbol used when a configuration does not name one.
pub const DEFAULT_BLANK_SYMBOL: Symbol = '_';
/// The default label of the accepting state.
pub const DEFAULT_ACCEPT_STATE: &str = "accept";
/// The default label of the rejecting state.
pub const DEFAULT_REJECT_STATE: &str = "reject";
/// The default step budget for a single run.
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Represents the possible directions the head can move after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Left => "L",
            Direction::Right => "R",
            Direction::Stay => "S",
        };
        f.pad(s)
    }
}

impl FromStr for Direction {
    type Err = MachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" | "l" | "<" => Ok(Direction::Left),
            "R" | "r" | ">" => Ok(Direction::Right),
            "S" | "s" | "-" => Ok(Direction::Stay),
            _ => Err(MachineError::Validation(format!("Invalid direction: {s}"))),
        }
    }
}

/// Composite lookup key of the transition table: the current state and the
/// symbol under the head.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionKey {
    pub state: String,
    pub symbol: Symbol,
}

impl TransitionKey {
    pub fn new(state: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            state: state.into(),
            symbol,
        }
    }
}

/// The right-hand side of a transition rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The state the machine moves to.
    pub next_state: String,
    /// The symbol written under the head.
    pub write: Symbol,
    /// The direction the head moves after writing.
    pub direction: Direction,
}

impl Transition {
    pub fn new(next_state: impl Into<String>, write: Symbol, direction: Direction) -> Self {
        Self {
            next_state: next_state.into(),
            write,
            direction,
        }
    }
}

/// An immutable snapshot of a single successful transition.
///
/// `changed` holds the index of the cell whose content the write altered, in the
/// tape frame at the time of the write. It is `None` when the write left the
/// cell as it was. A later left extension shifts every cell by one, so indices
/// held by earlier records refer to the frame they were produced in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 1-based number of this transition since the last reset.
    pub step: usize,
    /// The state the transition was taken from.
    pub from: String,
    /// The symbol that was under the head.
    pub read: Symbol,
    /// The state the machine entered.
    pub to: String,
    /// The symbol written under the head.
    pub written: Symbol,
    /// The direction the head moved.
    pub direction: Direction,
    /// Index of the cell whose content changed, if any.
    pub changed: Option<usize>,
    /// Head position after the move.
    pub head: usize,
}

/// Represents the outcome of a single call to `Machine::step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A transition was applied and the machine may continue.
    Continue(StepRecord),
    /// The machine was already in the accept or reject state. Nothing changed.
    Halted,
    /// No rule matched the current state and symbol. The machine entered the
    /// reject state during this call.
    NoTransition,
}

impl Step {
    /// Returns `true` for both halting variants.
    pub fn is_halt(&self) -> bool {
        !matches!(self, Step::Continue(_))
    }
}

/// The terminal verdict of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// The machine halted in its accept state.
    Accepted,
    /// The machine halted in its reject state.
    Rejected,
    /// The step budget ran out while the machine was still in a non-terminal state.
    Exhausted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Accepted => "accepted",
            Outcome::Rejected => "rejected",
            Outcome::Exhausted => "exhausted",
        };
        f.pad(s)
    }
}

/// Represents the errors the engine can report. Undefined transitions and
/// exhausted budgets are outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The machine configuration failed validation.
    #[error("Configuration validation error: {0}")]
    Validation(String),
    /// A run was requested with a step budget of zero.
    #[error("Step budget must be positive")]
    InvalidStepBudget,
    /// No built-in program has the requested name or index.
    #[error("Unknown program: {0}")]
    UnknownProgram(String),
}
