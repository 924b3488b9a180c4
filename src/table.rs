//! This module provides the `TransitionTable`, the deterministic rule set mapping a
//! `(state, symbol)` pair to the next state, the symbol to write and the head direction.

use crate::types::{Direction, Symbol, Transition, TransitionKey};
use std::collections::HashMap;

/// A deterministic mapping from `(state, symbol)` to a `Transition`.
///
/// Keys are unique; inserting a rule for an existing key replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    rules: HashMap<TransitionKey, Transition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, returning the rule it replaced, if any.
    pub fn insert(
        &mut self,
        state: impl Into<String>,
        read: Symbol,
        transition: Transition,
    ) -> Option<Transition> {
        self.rules.insert(TransitionKey::new(state, read), transition)
    }

    /// Builder-style variant of `insert` using the `(state, read) -> (next, write, dir)` shape.
    pub fn with_rule(
        mut self,
        state: &str,
        read: Symbol,
        next_state: &str,
        write: Symbol,
        direction: Direction,
    ) -> Self {
        self.insert(state, read, Transition::new(next_state, write, direction));
        self
    }

    /// Finds the rule for `state` reading `symbol`. `None` means no transition is defined.
    pub fn lookup(&self, state: &str, symbol: Symbol) -> Option<&Transition> {
        self.rules.get(&TransitionKey::new(state, symbol))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates over all rules in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&TransitionKey, &Transition)> {
        self.rules.iter()
    }
}

impl FromIterator<(TransitionKey, Transition)> for TransitionTable {
    fn from_iter<I: IntoIterator<Item = (TransitionKey, Transition)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
