use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use applyform::error::AppError;
use applyform::form::{ApplicationDraft, FormError, JobApplicationForm};
use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, DemoArgs};
use crate::render;
use crate::session;

#[derive(Parser, Debug)]
#[command(
    name = "Job Application Intake",
    about = "Collect and validate job applications from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in the application form interactively (default command)
    Apply,
    /// Run a scripted walkthrough of the form and its validation rules
    Demo(DemoArgs),
    /// Validate a draft captured as JSON and print its summary
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Path to the draft JSON file, or '-' to read standard input
    #[arg(value_name = "DRAFT")]
    draft: PathBuf,
    /// Print the frozen submission as JSON instead of summary lines
    #[arg(long)]
    json: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Apply);

    match command {
        Command::Apply => session::run_interactive(),
        Command::Demo(args) => run_demo(args),
        Command::Validate(args) => run_validate(args),
    }
}

fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let raw = if args.draft.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&args.draft)?
    };
    let draft: ApplicationDraft = serde_json::from_str(&raw)?;

    let mut form = JobApplicationForm::from_draft(draft);
    match form.submit() {
        Ok(submission) => {
            let stdout = io::stdout();
            let mut output = stdout.lock();
            if args.json {
                writeln!(output, "{}", serde_json::to_string_pretty(&submission)?)?;
            } else {
                render::summary(&mut output, &submission.summary())?;
            }
            Ok(())
        }
        Err(FormError::Rejected(errors)) => {
            let stderr = io::stderr();
            let mut output = stderr.lock();
            for (field, message) in errors.iter() {
                writeln!(output, "- {}: {}", field.label(), message)?;
            }
            Err(AppError::Form(FormError::Rejected(errors)))
        }
        Err(other) => Err(other.into()),
    }
}
