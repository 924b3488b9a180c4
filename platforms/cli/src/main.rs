mod render;

use anyhow::{Context, Result};
use clap::Parser;
use dtm::{Machine, ProgramManager, RunOptions, DEFAULT_MAX_STEPS};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs one of the built-in Turing machines and prints every step.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  dtm-cli --list
  dtm-cli --program 'Binary increment with carry' --input 1011
  dtm-cli --input 110 --max-steps 5 --json")]
struct Cli {
    /// Name of the built-in program to run. Defaults to the first one.
    #[clap(short, long)]
    program: Option<String>,

    /// Initial tape content. Defaults to the program's sample input.
    #[clap(short, long)]
    input: Option<String>,

    /// Maximum number of steps before the run is reported as exhausted.
    #[clap(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Print the execution as JSON instead of a step table.
    #[clap(long)]
    json: bool,

    /// List the built-in programs and exit.
    #[clap(short, long)]
    list: bool,

    /// Validate the machine configuration before running.
    #[clap(long)]
    validate: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    if cli.list {
        for (i, name) in ProgramManager::names().iter().enumerate() {
            let program = ProgramManager::get_by_index(i)?;
            writeln!(out, "{:>2}. {} - {}", i + 1, name, program.description)?;
        }
        return Ok(());
    }

    let program = match &cli.program {
        Some(name) => ProgramManager::get_by_name(name)?,
        None => ProgramManager::get_by_index(0)?,
    };
    let input = cli.input.as_deref().unwrap_or(program.input);
    info!(program = program.name, input, "loading machine");

    let mut machine = if cli.validate {
        Machine::try_new(program.config.clone())
            .with_context(|| format!("program '{}' failed validation", program.name))?
    } else {
        Machine::new(program.config.clone())
    };
    machine.load_tape(input);

    let initial_tape = machine.tape().to_string();
    let initial_state = machine.state().to_string();

    let execution = dtm::run(
        &mut machine,
        RunOptions {
            max_steps: cli.max_steps,
        },
    )?;

    if cli.json {
        serde_json::to_writer_pretty(&mut out, &execution)?;
        writeln!(out)?;
    } else {
        render::header(&mut out, program.name, &initial_tape, &initial_state)?;
        render::records(&mut out, &execution.records)?;
        render::summary(&mut out, &execution, cli.max_steps)?;
    }

    Ok(())
}
