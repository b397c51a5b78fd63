mod logging;
mod report;

use anyhow::{Context as _, Result};
use clap::{ArgAction, Parser, Subcommand};
use cmplx_lib::{error::ComplexError, math::ComplexValue};
use report::{emit, CompareReport, SortReport, SumReport, ValueReport};
use tracing::{debug, info};

/// Complex numbers compared by magnitude.
///
/// Values are written as `2 - 1j`, `2,-1`, `3j` or `2`.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print results as json
    #[arg(long, global = true)]
    json: bool,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides it
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Show(ShowCommand),
    Add(AddCommand),
    Compare(CompareCommand),
    Sort(SortCommand),
    /// Compares `2 - 1j` with `2 + 2j`
    Demo,
}

fn parse_value(arg: &str) -> Result<ComplexValue, ComplexError> {
    arg.parse()
}

/// Prints a value with its magnitude
#[derive(clap::Args)]
struct ShowCommand {
    #[arg(allow_hyphen_values = true, value_parser = parse_value)]
    value: ComplexValue,
}

/// Adds values together
#[derive(clap::Args)]
struct AddCommand {
    #[arg(required = true, num_args = 2.., allow_hyphen_values = true, value_parser = parse_value)]
    values: Vec<ComplexValue>,
}

/// Applies every comparison operator to two values
#[derive(clap::Args)]
struct CompareCommand {
    #[arg(allow_hyphen_values = true, value_parser = parse_value)]
    a: ComplexValue,
    #[arg(allow_hyphen_values = true, value_parser = parse_value)]
    b: ComplexValue,
}

/// Orders values by magnitude
#[derive(clap::Args)]
struct SortCommand {
    #[arg(required = true, allow_hyphen_values = true, value_parser = parse_value)]
    values: Vec<ComplexValue>,
}

fn add(values: Vec<ComplexValue>) -> Result<SumReport> {
    let mut terms = values.iter().copied();
    let first = terms.next().unwrap_or_default();
    let sum = terms.try_fold(first, |sum, term| {
        sum.checked_add(term)
            .with_context(|| format!("Failed to add {term} to {sum}"))
    })?;
    info!(terms = values.len(), %sum, "added values");
    Ok(SumReport::new(values, sum))
}

fn demo() -> Result<CompareReport> {
    let a = ComplexValue::new(2., -1.)?;
    let b = ComplexValue::new(2., 2.)?;
    Ok(CompareReport::new(a, b))
}

fn run(command: Command, json: bool) -> Result<()> {
    match command {
        Command::Show(command) => emit(&ValueReport::from(command.value), json),
        Command::Add(command) => emit(&add(command.values)?, json),
        Command::Compare(command) => {
            debug!(a = %command.a, b = %command.b, "comparing");
            emit(&CompareReport::new(command.a, command.b), json)
        }
        Command::Sort(command) => {
            info!(count = command.values.len(), "sorting by magnitude");
            emit(&SortReport::new(command.values), json)
        }
        Command::Demo => emit(&demo()?, json),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    run(args.command, args.json)
}
