use anyhow::Result;
use clap::CommandFactory;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use crate::reporter;
use commands::CommandOutcome;

pub mod args;
mod commands;
mod exit_status;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(command) = args.command else {
        Arguments::command().print_help()?;
        return Ok(ExitStatus::Success);
    };

    let outcome = run_command(command)?;
    Ok(report_outcome(&outcome))
}

fn run_command(command: Command) -> Result<CommandOutcome> {
    match command {
        Command::Check(cmd) => commands::check::check(cmd),
        Command::Clean(cmd) => commands::clean::clean(cmd),
        Command::Fmt(cmd) => commands::fmt::fmt(cmd),
        Command::Init => commands::init::init(),
    }
}

fn report_outcome(outcome: &CommandOutcome) -> ExitStatus {
    for note in &outcome.notes {
        println!("{}", note);
    }

    if outcome.issues.is_empty() {
        if !outcome.failed {
            reporter::print_success(outcome.files_checked);
            return ExitStatus::Success;
        }
        return ExitStatus::Failure;
    }

    if !outcome.notes.is_empty() {
        println!();
    }
    reporter::print_report(&outcome.issues);
    ExitStatus::Failure
}
