//! CLI entry point for the pour solver.
//!
//! Usage:
//!   pour-solver solve [options]
//!
//! Options:
//!   --capacities <list>   Container capacities (default: 12,9,5)
//!   --start <list>        Starting amounts (default: 12,0,0)
//!   --goal <list>         Target amounts (default: 6,6,0)
//!   --max-states <n>      Stop after visiting this many states
//!   --timeout-ms <n>      Stop after this many milliseconds
//!   --format <fmt>        Output format: json or text (default: json)
//!
//! Set `RUST_LOG=debug` to log search progress to stderr.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pour_solver::{solve, Pour, SearchOutcome, SolveError, SolverConfig, SolverResult, State};

#[derive(Parser)]
#[command(name = "pour-solver")]
#[command(about = "Shortest-path solver for water pouring puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest pour sequence from a start fill to a goal fill
    Solve {
        /// Capacity of each container
        #[arg(long, value_delimiter = ',', default_values_t = [12, 9, 5])]
        capacities: Vec<u32>,

        /// Amount in each container at the start
        #[arg(long, value_delimiter = ',', default_values_t = [12, 0, 0])]
        start: Vec<u32>,

        /// Amount wanted in each container at the end
        #[arg(long, value_delimiter = ',', default_values_t = [6, 6, 0])]
        goal: Vec<u32>,

        /// Maximum number of states to visit
        #[arg(long)]
        max_states: Option<usize>,

        /// Maximum search time in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// Output format for a search result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    search_exhausted: bool,
    states_visited: usize,
    time_elapsed_ms: u64,
    capacities: Vec<u32>,
    states: Vec<Vec<u32>>,
    pours: Vec<Pour>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            capacities,
            start,
            goal,
            max_states,
            timeout_ms,
            format,
        } => {
            let config = SolverConfig {
                max_states,
                timeout: timeout_ms.map(Duration::from_millis),
            };

            let result = match run(&capacities, &start, &goal, &config) {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::from(2);
                }
            };

            let output = format_result(&capacities, &result);
            match format {
                OutputFormat::Json => match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error serializing result: {}", e);
                        return ExitCode::from(2);
                    }
                },
                OutputFormat::Text => print_text(&output),
            }

            if output.solved {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
    }
}

fn run(
    capacities: &[u32],
    start: &[u32],
    goal: &[u32],
    config: &SolverConfig,
) -> Result<SolverResult, SolveError> {
    let start = State::with_amounts(capacities, start)?;
    let goal = State::with_amounts(capacities, goal)?;
    info!(%start, %goal, "solving");
    solve(&start, &goal, config)
}

fn format_result(capacities: &[u32], result: &SolverResult) -> SolveOutput {
    let (states, pours, reason) = match &result.outcome {
        SearchOutcome::Solved(solution) => (
            solution.states.iter().map(State::amounts).collect(),
            solution.pours.clone(),
            None,
        ),
        SearchOutcome::NoSolution => (Vec::new(), Vec::new(), Some("no_solution".to_string())),
        SearchOutcome::LimitReached => {
            (Vec::new(), Vec::new(), Some("limit_reached".to_string()))
        }
    };

    SolveOutput {
        solved: result.outcome.is_solved(),
        reason,
        search_exhausted: result.search_exhausted,
        states_visited: result.states_visited,
        time_elapsed_ms: result.time_elapsed_ms,
        capacities: capacities.to_vec(),
        states,
        pours,
    }
}

fn print_text(output: &SolveOutput) {
    if !output.solved {
        match output.reason.as_deref() {
            Some("limit_reached") => println!("Search limit reached."),
            _ => println!("No solution."),
        }
        return;
    }

    println!("Solution. Sizes:");
    println!("{:?}", output.capacities);
    println!("Sequence of states:");
    for amounts in &output.states {
        println!("{:?}", amounts);
    }
}
