//! This module provides an optional construction-time validation pass for machine
//! configurations. The engine itself never requires it: a configuration that fails
//! analysis still runs, with whatever behavior its transition lookups produce.

use crate::config::MachineConfig;
use crate::types::{MachineError, Symbol};
use std::collections::HashSet;

/// Represents the problems the analyzer can find in a `MachineConfig`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    /// The accept and reject states carry the same label.
    HaltingStatesCoincide(String),
    /// The start, accept or reject state is missing from the declared state set.
    UndeclaredState(String),
    /// Transitions reference states that are not declared.
    UndefinedStates(Vec<String>),
    /// The declared alphabet does not contain the blank symbol.
    BlankNotInAlphabet(Symbol),
    /// Transitions read or write symbols outside the declared alphabet.
    UnknownSymbols(Vec<Symbol>),
    /// Rules whose source state is a halting state. They can never fire.
    RulesFromHaltingState(Vec<String>),
    /// States with rules that cannot be reached from the start state.
    UnreachableStates(Vec<String>),
}

impl From<AnalysisError> for MachineError {
    fn from(error: AnalysisError) -> Self {
        let msg = match error {
            AnalysisError::HaltingStatesCoincide(state) => {
                format!("Accept and reject states are both '{}'", state)
            }
            AnalysisError::UndeclaredState(state) => {
                format!("State '{}' is not declared", state)
            }
            AnalysisError::UndefinedStates(states) => {
                format!("Transitions reference undeclared states: {:?}", states)
            }
            AnalysisError::BlankNotInAlphabet(blank) => {
                format!("Alphabet does not contain the blank symbol '{}'", blank)
            }
            AnalysisError::UnknownSymbols(symbols) => {
                format!("Transitions use symbols outside the alphabet: {:?}", symbols)
            }
            AnalysisError::RulesFromHaltingState(rules) => {
                format!("Rules defined on halting states never fire: {:?}", rules)
            }
            AnalysisError::UnreachableStates(states) => {
                format!("Unreachable states detected: {:?}", states)
            }
        };
        MachineError::Validation(msg)
    }
}

/// Analyzes a `MachineConfig` and returns the first problem found.
///
/// Checks against the declared state set and alphabet are skipped when those are
/// left empty, so minimal configurations only get the structural checks.
pub fn analyze(config: &MachineConfig) -> Result<(), MachineError> {
    [
        check_halting_states,
        check_declared_states,
        check_alphabet,
        check_halting_rules,
        check_unreachable_states,
    ]
    .iter()
    .find_map(|f| f(config).err())
    .map_or(Ok(()), |e| Err(e.into()))
}

fn check_halting_states(config: &MachineConfig) -> Result<(), AnalysisError> {
    if config.accept_state == config.reject_state {
        return Err(AnalysisError::HaltingStatesCoincide(
            config.accept_state.clone(),
        ));
    }

    Ok(())
}

/// Checks that the start, accept and reject states and every state a rule
/// mentions belong to the declared state set.
fn check_declared_states(config: &MachineConfig) -> Result<(), AnalysisError> {
    if config.states.is_empty() {
        return Ok(());
    }

    let declared: HashSet<&str> = config.states.iter().map(String::as_str).collect();

    for state in [
        &config.start_state,
        &config.accept_state,
        &config.reject_state,
    ] {
        if !declared.contains(state.as_str()) {
            return Err(AnalysisError::UndeclaredState(state.clone()));
        }
    }

    let mut undefined: Vec<String> = config
        .transitions
        .iter()
        .flat_map(|(key, t)| [key.state.as_str(), t.next_state.as_str()])
        .filter(|s| !declared.contains(s))
        .map(str::to_string)
        .collect();

    if !undefined.is_empty() {
        undefined.sort();
        undefined.dedup();
        return Err(AnalysisError::UndefinedStates(undefined));
    }

    Ok(())
}

fn check_alphabet(config: &MachineConfig) -> Result<(), AnalysisError> {
    if config.alphabet.is_empty() {
        return Ok(());
    }

    if !config.alphabet.contains(&config.blank) {
        return Err(AnalysisError::BlankNotInAlphabet(config.blank));
    }

    let mut unknown: Vec<Symbol> = config
        .transitions
        .iter()
        .flat_map(|(key, t)| [key.symbol, t.write])
        .filter(|c| !config.alphabet.contains(c))
        .collect();

    if !unknown.is_empty() {
        unknown.sort();
        unknown.dedup();
        return Err(AnalysisError::UnknownSymbols(unknown));
    }

    Ok(())
}

fn check_halting_rules(config: &MachineConfig) -> Result<(), AnalysisError> {
    let mut dead: Vec<String> = config
        .transitions
        .iter()
        .filter(|(key, _)| config.is_terminal(&key.state))
        .map(|(key, _)| format!("({}, {})", key.state, key.symbol))
        .collect();

    if !dead.is_empty() {
        dead.sort();
        return Err(AnalysisError::RulesFromHaltingState(dead));
    }

    Ok(())
}

/// Walks the rule graph from the start state and reports source states that are
/// never reached.
fn check_unreachable_states(config: &MachineConfig) -> Result<(), AnalysisError> {
    let mut visited = HashSet::new();
    let mut queue = vec![config.start_state.as_str()];

    while let Some(state) = queue.pop() {
        if !visited.insert(state) {
            continue;
        }

        for (key, transition) in config.transitions.iter() {
            if key.state == state && !visited.contains(transition.next_state.as_str()) {
                queue.push(transition.next_state.as_str());
            }
        }
    }

    let mut unreachable: Vec<String> = config
        .transitions
        .iter()
        .map(|(key, _)| key.state.as_str())
        .filter(|s| !visited.contains(s))
        .map(str::to_string)
        .collect();

    if !unreachable.is_empty() {
        unreachable.sort();
        unreachable.dedup();
        return Err(AnalysisError::UnreachableStates(unreachable));
    }

    Ok(())
}
