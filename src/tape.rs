//! This module defines the `Tape`, a lazily materialized, bidirectionally growable
//! sequence of symbols. Cells that were never materialized read as the blank symbol.

use crate::types::Symbol;
use std::fmt;

/// A single tape that grows by one cell at either end on demand and never shrinks.
///
/// Indices are signed so that the cell just before the front (`-1`) can be
/// addressed by `write`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<Symbol>,
    blank: Symbol,
}

impl Tape {
    /// Creates a tape holding a single blank cell.
    pub fn new(blank: Symbol) -> Self {
        Self {
            cells: vec![blank],
            blank,
        }
    }

    /// Creates a tape from `input`, taken verbatim. An empty input yields an
    /// empty tape.
    pub fn from_input(input: &str, blank: Symbol) -> Self {
        Self {
            cells: input.chars().collect(),
            blank,
        }
    }

    /// Returns the symbol at `index`, or blank if the cell is not materialized.
    pub fn read(&self, index: isize) -> Symbol {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or(self.blank)
    }

    /// Writes `symbol` at `index` and reports whether the tape changed.
    ///
    /// Within bounds the cell is overwritten and the result is whether the value
    /// differs. At exactly one past either end the tape is extended by a cell
    /// holding `symbol`, which always counts as a change.
    ///
    /// # Panics
    ///
    /// Panics if `index` lies more than one cell past either end.
    pub fn write(&mut self, index: isize, symbol: Symbol) -> bool {
        let len = self.cells.len() as isize;
        match index {
            -1 => {
                self.cells.insert(0, symbol);
                true
            }
            i if i == len => {
                self.cells.push(symbol);
                true
            }
            i if (0..len).contains(&i) => {
                let cell = &mut self.cells[i as usize];
                let changed = *cell != symbol;
                *cell = symbol;
                changed
            }
            _ => panic!(
                "tape write at {} is outside the writable range -1..={}",
                index, len
            ),
        }
    }

    /// Appends a blank cell at the end.
    pub fn extend_right(&mut self) {
        self.cells.push(self.blank);
    }

    /// Inserts a blank cell at the front, shifting every existing cell up by one.
    pub fn extend_left(&mut self) {
        self.cells.insert(0, self.blank);
    }

    /// Number of materialized cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn blank(&self) -> Symbol {
        self.blank
    }

    /// Returns the materialized cells.
    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    /// Returns the tape content with leading and trailing blanks removed.
    pub fn trimmed(&self) -> String {
        self.to_string()
            .trim_matches(self.blank)
            .to_string()
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cells.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
