//! This crate provides the execution engine of a single-tape, single-head deterministic
//! Turing machine. It includes the tape model, the transition table, the machine that
//! applies one transition per step, the run driver that collects step records and
//! classifies the verdict, an optional configuration analyzer, and a few sample machines.

pub mod analyzer;
pub mod config;
pub mod machine;
pub mod programs;
pub mod runner;
pub mod table;
pub mod tape;
pub mod types;

/// Re-exports the `analyze` function and `AnalysisError` enum from the analyzer module.
pub use analyzer::{analyze, AnalysisError};
/// Re-exports the configuration types from the config module.
pub use config::{MachineConfig, MachineConfigBuilder};
/// Re-exports the `Machine` struct from the machine module.
pub use machine::Machine;
/// Re-exports the built-in sample programs.
pub use programs::{Program, ProgramManager, PROGRAMS};
/// Re-exports the run driver.
pub use runner::{run, Execution, RunOptions};
/// Re-exports the `TransitionTable` struct from the table module.
pub use table::TransitionTable;
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the shared types from the types module.
pub use types::{
    Direction, MachineError, Outcome, Step, StepRecord, Symbol, Transition, TransitionKey,
    DEFAULT_BLANK_SYMBOL, DEFAULT_MAX_STEPS,
};
