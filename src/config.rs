//! This module defines `MachineConfig`, the fixed construction input of a machine:
//! declared states and alphabet, the transition table, the start, accept and reject
//! states, and the blank symbol.

use crate::table::TransitionTable;
use crate::types::{
    Direction, Symbol, DEFAULT_ACCEPT_STATE, DEFAULT_BLANK_SYMBOL, DEFAULT_REJECT_STATE,
};

/// Construction input of a `Machine`. Immutable once a machine owns it.
///
/// `states` and `alphabet` may be left empty for a minimal configuration; the
/// engine never consults them while running. They only feed the analyzer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Declared states.
    pub states: Vec<String>,
    /// Declared tape alphabet, including the blank symbol.
    pub alphabet: Vec<Symbol>,
    /// The transition rules.
    pub transitions: TransitionTable,
    /// The state the machine starts in after a reset.
    pub start_state: String,
    /// The accepting halting state.
    pub accept_state: String,
    /// The rejecting halting state.
    pub reject_state: String,
    /// The symbol of unwritten cells.
    pub blank: Symbol,
}

impl MachineConfig {
    /// Creates a minimal configuration with default accept/reject labels and blank.
    pub fn new(start_state: impl Into<String>, transitions: TransitionTable) -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            transitions,
            start_state: start_state.into(),
            accept_state: DEFAULT_ACCEPT_STATE.to_string(),
            reject_state: DEFAULT_REJECT_STATE.to_string(),
            blank: DEFAULT_BLANK_SYMBOL,
        }
    }

    /// Starts a builder for a configuration starting in `start_state`.
    pub fn builder(start_state: impl Into<String>) -> MachineConfigBuilder {
        MachineConfigBuilder {
            config: Self::new(start_state, TransitionTable::new()),
        }
    }

    /// Returns `true` if `state` is the accept or the reject state.
    pub fn is_terminal(&self, state: &str) -> bool {
        state == self.accept_state || state == self.reject_state
    }
}

/// Fluent builder for `MachineConfig`.
#[derive(Debug, Clone)]
pub struct MachineConfigBuilder {
    config: MachineConfig,
}

impl MachineConfigBuilder {
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.states = states.into_iter().map(Into::into).collect();
        self
    }

    pub fn alphabet(mut self, alphabet: impl IntoIterator<Item = Symbol>) -> Self {
        self.config.alphabet = alphabet.into_iter().collect();
        self
    }

    pub fn accept_state(mut self, state: impl Into<String>) -> Self {
        self.config.accept_state = state.into();
        self
    }

    pub fn reject_state(mut self, state: impl Into<String>) -> Self {
        self.config.reject_state = state.into();
        self
    }

    pub fn blank(mut self, blank: Symbol) -> Self {
        self.config.blank = blank;
        self
    }

    /// Adds the rule `(state, read) -> (next_state, write, direction)`.
    pub fn rule(
        mut self,
        state: &str,
        read: Symbol,
        next_state: &str,
        write: Symbol,
        direction: Direction,
    ) -> Self {
        self.config.transitions = self
            .config
            .transitions
            .with_rule(state, read, next_state, write, direction);
        self
    }

    pub fn transitions(mut self, transitions: TransitionTable) -> Self {
        self.config.transitions = transitions;
        self
    }

    pub fn build(self) -> MachineConfig {
        self.config
    }
}
