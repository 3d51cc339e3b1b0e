//! Conditional validation for application drafts.
//!
//! Validation is a pure function from a draft to either a frozen
//! [`ApplicationSubmission`] or a field-keyed set of messages. Every failing
//! field is reported in the same pass rather than stopping at the first
//! problem, mirroring how the rendered form shows one message under each
//! field.

mod requirements;
mod rules;

use std::collections::BTreeMap;
use std::fmt;

use super::domain::{ApplicationDraft, ApplicationSubmission, FormField};

/// Messages for every field that failed validation, keyed in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<FormField, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn message(&self, field: FormField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Failing fields with their messages, in form display order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.messages
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    pub fn fields(&self) -> Vec<FormField> {
        self.messages.keys().copied().collect()
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.messages.insert(field, message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed validation", self.messages.len())
    }
}

/// Validate a draft against the rules active for its position selection.
///
/// On success the draft freezes into a typed submission. Conditional fields
/// outside the active group are neither validated nor carried over, so stale
/// draft text from a previous position selection cannot leak into the record.
pub fn validate(draft: &ApplicationDraft) -> Result<ApplicationSubmission, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let full_name = checked(
        &mut errors,
        FormField::FullName,
        rules::check_full_name(&draft.full_name),
    );
    let email = checked(&mut errors, FormField::Email, rules::check_email(&draft.email));
    let phone_number = checked(
        &mut errors,
        FormField::PhoneNumber,
        rules::check_phone_number(&draft.phone_number),
    );
    let position = checked(
        &mut errors,
        FormField::Position,
        rules::check_position(&draft.position),
    );

    let mut relevant_experience = None;
    let mut portfolio_url = None;
    let mut management_experience = None;
    if let Some(position) = position {
        if requirements::is_evaluated(FormField::RelevantExperience, Some(position)) {
            relevant_experience = checked(
                &mut errors,
                FormField::RelevantExperience,
                rules::check_relevant_experience(&draft.relevant_experience),
            );
        }
        if requirements::is_evaluated(FormField::PortfolioUrl, Some(position)) {
            portfolio_url = checked(
                &mut errors,
                FormField::PortfolioUrl,
                rules::check_portfolio_url(&draft.portfolio_url),
            );
        }
        if requirements::is_evaluated(FormField::ManagementExperience, Some(position)) {
            management_experience = checked(
                &mut errors,
                FormField::ManagementExperience,
                rules::check_management_experience(&draft.management_experience),
            );
        }
    }

    let additional_skills = checked(
        &mut errors,
        FormField::AdditionalSkills,
        rules::check_skills(&draft.additional_skills),
    );
    let preferred_interview_time = checked(
        &mut errors,
        FormField::PreferredInterviewTime,
        rules::check_interview_time(&draft.preferred_interview_time),
    );

    match (
        full_name,
        email,
        phone_number,
        position,
        additional_skills,
        preferred_interview_time,
    ) {
        (
            Some(full_name),
            Some(email),
            Some(phone_number),
            Some(position),
            Some(additional_skills),
            Some(preferred_interview_time),
        ) if errors.is_empty() => Ok(ApplicationSubmission {
            full_name,
            email,
            phone_number,
            position,
            relevant_experience,
            portfolio_url,
            management_experience,
            additional_skills,
            preferred_interview_time,
        }),
        _ => Err(errors),
    }
}

fn checked<T>(
    errors: &mut ValidationErrors,
    field: FormField,
    outcome: Result<T, &'static str>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(message) => {
            errors.insert(field, message);
            None
        }
    }
}
