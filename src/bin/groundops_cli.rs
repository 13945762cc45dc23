use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use groundops_workorders::{
    commands::{
        workorders::{ParseWorkOrderCommand, SubmitWorkOrderCommand, ValidateWorkOrderCommand},
        Command,
    },
    config::{self, AppConfig},
    errors::ServiceError,
    models::{ParsedWorkOrder, WorkOrderCommand},
    ApiResponse, WorkOrderParser,
};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "groundops-cli",
    about = "Parse, validate and prepare ground-operations work order commands",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON when available"
    )]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the breakdown of a command string
    Parse(CommandArgs),
    /// Check a command string and report validity only
    Validate(CommandArgs),
    /// Show the command codes and what they mean
    Help,
    /// Show example command strings
    Examples,
    /// Build the submission payload for a flight
    Submit(SubmitArgs),
}

#[derive(Args)]
struct CommandArgs {
    /// Command string, e.g. "CHK15|BAG25|CLEAN10|PBB90"
    command: String,
}

#[derive(Args)]
struct SubmitArgs {
    #[arg(long)]
    flight_id: String,
    /// Command string, e.g. "CHK15|BAG25|CLEAN10|PBB90"
    command: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<ServiceError>()
                .map(ServiceError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = config::load_config()
        .map_err(ServiceError::from)
        .context("failed to load application config")?;
    config::init_tracing(config.log_level(), config.log_json);
    debug!(environment = %config.environment, "groundops-cli starting");

    match cli.command {
        Commands::Parse(args) => handle_parse(args, cli.json),
        Commands::Validate(args) => handle_validate(args, cli.json),
        Commands::Help => handle_help(cli.json),
        Commands::Examples => handle_examples(cli.json),
        Commands::Submit(args) => handle_submit(&config, args, cli.json),
    }
}

fn handle_parse(args: CommandArgs, json: bool) -> Result<ExitCode> {
    let parsed = ParseWorkOrderCommand {
        command: args.command,
    }
    .execute()?;
    let code = exit_code_for(parsed.is_valid);

    if json {
        print_json(&ApiResponse::parsed(parsed))?;
    } else {
        render_parsed(&parsed);
    }
    Ok(code)
}

fn handle_validate(args: CommandArgs, json: bool) -> Result<ExitCode> {
    let summary = ValidateWorkOrderCommand {
        command: args.command,
    }
    .execute()?;

    if json {
        print_json(&summary)?;
    } else if summary.is_valid {
        println!("valid");
    } else {
        println!("invalid");
        render_errors(&summary.errors);
    }
    Ok(exit_code_for(summary.is_valid))
}

fn handle_help(json: bool) -> Result<ExitCode> {
    let help = WorkOrderParser::get_command_help();
    if json {
        print_json(&help)?;
    } else {
        for (command_type, text) in &help {
            println!("{:<6} {}", command_type.code(), text);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_examples(json: bool) -> Result<ExitCode> {
    let examples = WorkOrderParser::get_command_examples();
    if json {
        print_json(&examples)?;
    } else {
        for example in examples {
            println!("{}", example);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_submit(config: &AppConfig, args: SubmitArgs, json: bool) -> Result<ExitCode> {
    let command = SubmitWorkOrderCommand::new(args.flight_id, args.command, config);
    match command.execute() {
        Ok(request) => {
            // The payload is always JSON; it is what goes over the wire
            print_json(&request)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if json => {
            print_json(&err.to_response())?;
            Ok(ExitCode::from(err.exit_code() as u8))
        }
        Err(err) => Err(err.into()),
    }
}

fn exit_code_for(is_valid: bool) -> ExitCode {
    if is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn render_parsed(parsed: &ParsedWorkOrder) {
    println!("Command: {}", parsed.original_command);
    for command in &parsed.commands {
        render_command(command);
    }
    render_errors(&parsed.errors);
    println!("Result: {}", if parsed.is_valid { "valid" } else { "invalid" });
}

fn render_command(command: &WorkOrderCommand) {
    let marker = if command.is_valid { "[ok]" } else { "[x] " };
    println!("  {} {:<12} {}", marker, command.kind, command.description);
}

fn render_errors(errors: &[String]) {
    for error in errors {
        println!("  - {}", error);
    }
}
