//! Plain-text rendering of step records. No color codes are emitted.

use dtm::{Execution, Outcome, StepRecord};
use std::io::{self, Write};

pub fn header<W: Write>(out: &mut W, name: &str, tape: &str, state: &str) -> io::Result<()> {
    writeln!(out, "Program: {name}")?;
    writeln!(out, "Initial tape: {tape}")?;
    writeln!(out, "Initial state: {state}")?;
    writeln!(out)
}

pub fn records<W: Write>(out: &mut W, records: &[StepRecord]) -> io::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "{:>5}  {:<24}  {:>5}  {:>3}  {:>7}  {:>4}",
        "step", "transition", "write", "dir", "changed", "head"
    )?;

    for record in records {
        let transition = format!("({}, {}) -> {}", record.from, record.read, record.to);
        let changed = record
            .changed
            .map_or_else(|| "-".to_string(), |i| i.to_string());

        writeln!(
            out,
            "{:>5}  {:<24}  {:>5}  {:>3}  {:>7}  {:>4}",
            record.step, transition, record.written, record.direction, changed, record.head
        )?;
    }

    writeln!(out)
}

pub fn summary<W: Write>(out: &mut W, execution: &Execution, max_steps: usize) -> io::Result<()> {
    writeln!(out, "Final tape: {}", execution.tape)?;
    writeln!(out, "Final state: {}", execution.state)?;

    match execution.outcome {
        Outcome::Accepted => writeln!(out, "Machine halted in accepting state."),
        Outcome::Rejected => writeln!(out, "Machine halted in rejecting state."),
        Outcome::Exhausted => writeln!(
            out,
            "Machine did not halt after the maximum number of steps ({max_steps})."
        ),
    }
}
