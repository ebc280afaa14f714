use std::process;

use clap::Parser;
use colored::Colorize;

use crate::cli::Cli;
use crate::error::AppError;
use crate::git::{ConfigScope, SystemGit};
use crate::setup::SetupInputs;
use crate::validation::{
    prompt_until_valid, validate_input_email, validate_input_message, validate_input_name,
    validate_input_url,
};

mod cli;
mod error;
mod git;
mod setup;
mod validation;

// Main
fn main() {
    let cli: Cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("{} {}", "error:".red(), error);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let inputs: SetupInputs = collect_inputs(cli)?;
    setup::run(&SystemGit, &inputs)
}

/// Builds the setup inputs from CLI flags, prompting for anything missing
fn collect_inputs(cli: Cli) -> Result<SetupInputs, AppError> {
    let scope = if cli.local {
        ConfigScope::Local
    } else {
        ConfigScope::Global
    };

    let name: String = resolve_input(cli.name, "enter your git name:", validate_input_name)?;
    let email: String = resolve_input(cli.email, "enter your git email:", validate_input_email)?;
    let message: String = resolve_input(cli.message, "enter commit message:", validate_input_message)?;
    let url: String = resolve_input(
        cli.url,
        "enter the remote repository url (ssh or https):",
        validate_input_url,
    )?;

    Ok(SetupInputs {
        name,
        email,
        message,
        url,
        scope,
    })
}

/// Validates a flag value if present, otherwise prompts until valid
fn resolve_input<F>(
    flag_value: Option<String>,
    prompt_message: &str,
    input_validation: F,
) -> Result<String, AppError>
where
    F: Fn(&str) -> Result<(), AppError>,
{
    match flag_value {
        Some(value) => {
            input_validation(&value)?;
            Ok(value)
        }
        None => prompt_until_valid(&format!("{}", prompt_message.blue()), input_validation),
    }
}
