pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "leavechain",
    about = "Leave-approval chain CLI",
    long_about = "Route leave requests through the direct / department / general manager approval chain.",
    after_help = "Examples:\n  leavechain demo\n  leavechain submit --requester pht --days 5\n  leavechain config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Run the canonical sample requests through the approval chain")]
    Demo,
    #[command(about = "Route a single leave request and report the decision")]
    Submit {
        #[arg(long, help = "Requester name")]
        requester: String,
        #[arg(long, help = "Requested leave length in days", allow_hyphen_values = true)]
        days: i32,
        #[arg(long, help = "Emit the full decision record as JSON")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // A bare `leavechain` runs the demo walkthrough.
    let result = match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => commands::demo::run(),
        Command::Submit { requester, days, json } => commands::submit::run(&requester, days, json),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
