use std::io::{self, Write};

use applyform::error::AppError;
use applyform::form::{FormError, FormField, JobApplicationForm, Position};
use chrono::{Duration, Local, NaiveDateTime};
use clap::Args;

use crate::render;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Position the scripted applicant applies for
    #[arg(long, default_value = "Developer")]
    pub(crate) position: Position,
    /// Interview time for the scripted applicant (2024-05-01T10:00 format).
    /// Defaults to two weeks from now.
    #[arg(long, value_parser = parse_datetime)]
    pub(crate) interview: Option<NaiveDateTime>,
    /// Also print the frozen record and the summary view as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let stdout = io::stdout();
    demo_session(&mut stdout.lock(), args)
}

/// Scripted walkthrough: fill the universal fields, show the rejection for
/// the still-missing conditional group, answer it, and print the summary.
fn demo_session<W: Write>(output: &mut W, args: DemoArgs) -> Result<(), AppError> {
    let interview = args
        .interview
        .unwrap_or_else(|| Local::now().naive_local() + Duration::days(14));

    writeln!(
        output,
        "Application form walkthrough ({})",
        args.position.label()
    )?;

    let mut form = JobApplicationForm::new();
    form.update_field(FormField::FullName, "Jane Doe")?;
    form.update_field(FormField::Email, "jane@x.com")?;
    form.update_field(FormField::PhoneNumber, "5551234")?;
    form.update_field(FormField::Position, args.position.label())?;
    form.toggle_skill("JavaScript", true)?;
    form.update_field(
        FormField::PreferredInterviewTime,
        &interview.format("%Y-%m-%dT%H:%M").to_string(),
    )?;

    writeln!(output, "\nSubmitting before the position questions are answered")?;
    match form.submit() {
        Err(FormError::Rejected(errors)) => {
            for (field, message) in errors.iter() {
                writeln!(output, "- {}: {}", field.label(), message)?;
            }
        }
        Ok(_) => writeln!(output, "- accepted without extra questions")?,
        Err(other) => return Err(other.into()),
    }

    writeln!(output, "\nAnswering the {} questions", args.position.label())?;
    let answers = [
        (FormField::RelevantExperience, "3"),
        (FormField::PortfolioUrl, "https://portfolio.janedoe.dev"),
        (FormField::ManagementExperience, "4"),
    ];
    for (field, value) in answers {
        if args.position.conditional_fields().contains(&field) {
            writeln!(output, "- {}: {}", field.label(), value)?;
            form.update_field(field, value)?;
        }
    }

    let submission = match form.submit() {
        Ok(submission) => submission,
        Err(FormError::Rejected(errors)) => {
            for (field, message) in errors.iter() {
                writeln!(output, "- {}: {}", field.label(), message)?;
            }
            return Err(AppError::Form(FormError::Rejected(errors)));
        }
        Err(other) => return Err(other.into()),
    };

    render::summary(output, &submission.summary())?;

    if args.json {
        writeln!(output, "\nSubmission record:")?;
        writeln!(output, "{}", serde_json::to_string_pretty(&submission)?)?;
        writeln!(output, "\nSummary view:")?;
        writeln!(
            output,
            "{}",
            serde_json::to_string_pretty(&submission.summary())?
        )?;
    }

    Ok(())
}

pub(crate) fn parse_datetime(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DDTHH:MM ({err})"))
}
