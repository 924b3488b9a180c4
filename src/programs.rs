use crate::config::MachineConfig;
use crate::types::{Direction, MachineError};

/// A built-in sample machine with a default input.
#[derive(Debug, Clone)]
pub struct Program {
    pub name: &'static str,
    pub description: &'static str,
    pub config: MachineConfig,
    pub input: &'static str,
}

lazy_static::lazy_static! {
    pub static ref PROGRAMS: Vec<Program> = vec![
        binary_increment(),
        binary_increment_with_carry(),
        flip_first_zero(),
    ];
}

/// Appends a `1` after the input, then walks back to the front and accepts.
fn binary_increment() -> Program {
    Program {
        name: "Unary increment",
        description: "Appends a 1 to the input and returns to the start",
        config: MachineConfig::builder("q0")
            .states(["q0", "q1", "q2", "accept", "reject"])
            .alphabet(['0', '1', '_'])
            .rule("q0", '1', "q0", '1', Direction::Right)
            .rule("q0", '0', "q0", '0', Direction::Right)
            .rule("q0", '_', "q1", '1', Direction::Left)
            .rule("q1", '1', "q1", '1', Direction::Left)
            .rule("q1", '0', "q1", '0', Direction::Left)
            .rule("q1", '_', "accept", '_', Direction::Right)
            .build(),
        input: "110",
    }
}

/// Adds one to a binary number, propagating the carry from the right.
fn binary_increment_with_carry() -> Program {
    Program {
        name: "Binary increment with carry",
        description: "Adds one to a binary number",
        config: MachineConfig::builder("q0")
            .states(["q0", "carry", "accept", "reject"])
            .alphabet(['0', '1', '_'])
            .rule("q0", '0', "q0", '0', Direction::Right)
            .rule("q0", '1', "q0", '1', Direction::Right)
            .rule("q0", '_', "carry", '_', Direction::Left)
            .rule("carry", '1', "carry", '0', Direction::Left)
            .rule("carry", '0', "accept", '1', Direction::Stay)
            .rule("carry", '_', "accept", '1', Direction::Stay)
            .build(),
        input: "110",
    }
}

/// Skips leading ones, turns the first zero into a one and halts on the blank after it.
fn flip_first_zero() -> Program {
    Program {
        name: "Flip first zero",
        description: "Turns the first 0 into a 1 and halts on the following blank",
        config: MachineConfig::builder("q0")
            .states(["q0", "q1", "qH", "reject"])
            .alphabet(['0', '1', '_'])
            .accept_state("qH")
            .rule("q0", '1', "q0", '1', Direction::Right)
            .rule("q0", '0', "q1", '1', Direction::Right)
            .rule("q1", '_', "qH", '_', Direction::Right)
            .build(),
        input: "110",
    }
}

pub struct ProgramManager;

impl ProgramManager {
    /// Get the number of available programs
    pub fn count() -> usize {
        PROGRAMS.len()
    }

    /// Get a program by its index
    pub fn get_by_index(index: usize) -> Result<&'static Program, MachineError> {
        PROGRAMS
            .get(index)
            .ok_or_else(|| MachineError::UnknownProgram(format!("index {} out of range", index)))
    }

    /// Get a program by its name, ignoring case
    pub fn get_by_name(name: &str) -> Result<&'static Program, MachineError> {
        PROGRAMS
            .iter()
            .find(|program| program.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| MachineError::UnknownProgram(name.to_string()))
    }

    /// List all program names
    pub fn names() -> Vec<&'static str> {
        PROGRAMS.iter().map(|program| program.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::machine::Machine;
    use crate::types::Outcome;

    #[test]
    fn test_all_programs_are_valid() {
        for program in PROGRAMS.iter() {
            assert!(
                analyze(&program.config).is_ok(),
                "Program '{}' is invalid",
                program.name
            );
        }
    }

    #[test]
    fn test_all_programs_accept_their_input() {
        for program in PROGRAMS.iter() {
            let mut machine = Machine::new(program.config.clone());
            machine.load_tape(program.input);

            let execution = machine.run(1000).unwrap();
            assert_eq!(
                execution.outcome,
                Outcome::Accepted,
                "Program '{}' did not accept",
                program.name
            );
        }
    }

    #[test]
    fn test_flip_first_zero() {
        let program = ProgramManager::get_by_name("flip first zero").unwrap();
        let mut machine = Machine::new(program.config.clone());
        machine.load_tape(program.input);

        let execution = machine.run(100).unwrap();

        assert_eq!(execution.state, "qH");
        assert_eq!(machine.tape().trimmed(), "111");
    }

    #[test]
    fn test_get_by_index() {
        assert!(ProgramManager::get_by_index(0).is_ok());
        assert!(matches!(
            ProgramManager::get_by_index(999),
            Err(MachineError::UnknownProgram(_))
        ));
    }

    #[test]
    fn test_names() {
        let names = ProgramManager::names();

        assert_eq!(names.len(), ProgramManager::count());
        assert!(names.contains(&"Unary increment"));
        assert!(names.contains(&"Binary increment with carry"));
        assert!(ProgramManager::get_by_name("Nonexistent").is_err());
    }
}
