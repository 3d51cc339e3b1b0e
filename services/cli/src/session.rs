//! Interactive console session for filling in the application form.
//!
//! The loop re-renders the numbered form after every action, which is how
//! the conditional group appears and disappears as the position changes.
//! Validation only runs when the applicant submits; a rejected submit shows
//! its messages under the fields and keeps the session alive.

use std::io::{self, BufRead, Write};

use applyform::config::AppConfig;
use applyform::error::AppError;
use applyform::form::{FormError, FormField, JobApplicationForm, Position};
use applyform::telemetry;
use tracing::{debug, info};

use crate::render;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionOutcome {
    Submitted,
    Abandoned,
}

pub(crate) fn run_interactive() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(?config.environment, "application form session starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run_session(
        &mut stdin.lock(),
        &mut stdout.lock(),
        &config.form.skill_catalog,
    )?;
    debug!(?outcome, "session finished");
    Ok(())
}

pub(crate) fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    skill_catalog: &[String],
) -> Result<SessionOutcome, AppError> {
    let mut form = JobApplicationForm::new();

    loop {
        render::form_screen(output, form.draft(), form.errors())?;
        write!(output, "Field number to edit, 's' to submit, 'q' to quit: ")?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            writeln!(output)?;
            return Ok(SessionOutcome::Abandoned);
        };

        match choice.trim() {
            "" => {}
            "q" | "Q" => {
                writeln!(output, "Application abandoned.")?;
                return Ok(SessionOutcome::Abandoned);
            }
            "s" | "S" => match form.submit() {
                Ok(submission) => {
                    info!(position = submission.position.label(), "application submitted");
                    render::summary(output, &submission.summary())?;
                    return Ok(SessionOutcome::Submitted);
                }
                Err(FormError::Rejected(errors)) => {
                    debug!(fields = errors.len(), "submit rejected");
                    writeln!(output, "Please fix the highlighted fields.")?;
                }
                Err(other) => return Err(other.into()),
            },
            choice => match field_choice(choice, &form) {
                Some(field) => edit_field(input, output, &mut form, field, skill_catalog)?,
                None => writeln!(output, "Unrecognized choice {choice:?}.")?,
            },
        }
    }
}

fn field_choice(raw: &str, form: &JobApplicationForm) -> Option<FormField> {
    let number: usize = raw.parse().ok()?;
    render::visible_fields(form.draft().selected_position())
        .get(number.checked_sub(1)?)
        .copied()
}

fn edit_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    form: &mut JobApplicationForm,
    field: FormField,
    skill_catalog: &[String],
) -> Result<(), AppError> {
    if field == FormField::AdditionalSkills {
        return edit_skills(input, output, form, skill_catalog);
    }

    if field == FormField::Position {
        let options: Vec<&str> = Position::ordered()
            .iter()
            .map(|position| position.label())
            .collect();
        writeln!(output, "Options: {}", options.join(", "))?;
    }
    if field == FormField::PreferredInterviewTime {
        writeln!(output, "Use the 2024-05-01T10:00 format.")?;
    }

    write!(output, "{}: ", field.label())?;
    output.flush()?;
    let Some(value) = read_line(input)? else {
        return Ok(());
    };
    form.update_field(field, &value)?;
    Ok(())
}

fn edit_skills<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    form: &mut JobApplicationForm,
    skill_catalog: &[String],
) -> Result<(), AppError> {
    render::skill_checklist(output, form.draft(), skill_catalog)?;
    write!(output, "Skill numbers to toggle (comma separated): ")?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(());
    };

    for token in line
        .split([',', ' '])
        .map(str::trim)
        .filter(|token| !token.is_empty())
    {
        let skill = token
            .parse::<usize>()
            .ok()
            .and_then(|number| skill_catalog.get(number.checked_sub(1)?));
        match skill {
            Some(skill) => {
                let selected = !form.draft().has_skill(skill);
                form.toggle_skill(skill, selected)?;
            }
            None => writeln!(output, "Ignoring {token:?}.")?,
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
