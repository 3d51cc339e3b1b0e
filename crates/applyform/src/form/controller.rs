use super::domain::{ApplicationDraft, ApplicationSubmission, FormField};
use super::validation::{self, ValidationErrors};

/// Lifecycle of one form session. Submission is terminal; there is no edit
/// state to return to afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitted,
}

impl FormState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Submitted => "Submitted",
        }
    }
}

/// Operations rejected by the form session itself, as opposed to messages
/// raised against individual field values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("the application has already been submitted")]
    AlreadySubmitted,
    #[error("{0:?} does not take a text value")]
    NotATextField(FormField),
    #[error("{0}")]
    Rejected(ValidationErrors),
}

/// Single application form session: holds the draft while the applicant
/// edits, runs validation on submit, and keeps the frozen record afterwards.
#[derive(Debug, Default)]
pub struct JobApplicationForm {
    draft: ApplicationDraft,
    errors: ValidationErrors,
    submission: Option<ApplicationSubmission>,
}

impl JobApplicationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing from a previously captured draft, for example one
    /// loaded from a JSON file.
    pub fn from_draft(draft: ApplicationDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn state(&self) -> FormState {
        if self.submission.is_some() {
            FormState::Submitted
        } else {
            FormState::Editing
        }
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    /// Messages from the most recent rejected submit. Empty until a submit
    /// fails and cleared again once one succeeds.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn submission(&self) -> Option<&ApplicationSubmission> {
        self.submission.as_ref()
    }

    /// Store a field's raw text verbatim. Nothing is validated or trimmed
    /// until submit, and no other field is touched.
    pub fn update_field(&mut self, field: FormField, value: &str) -> Result<(), FormError> {
        self.ensure_editing()?;
        if !self.draft.set_field_text(field, value) {
            return Err(FormError::NotATextField(field));
        }
        Ok(())
    }

    /// Check or uncheck one skill in the draft's selection.
    pub fn toggle_skill(&mut self, skill: &str, selected: bool) -> Result<(), FormError> {
        self.ensure_editing()?;
        self.draft.toggle_skill(skill, selected);
        Ok(())
    }

    /// Validate the whole draft. On success the typed record freezes and the
    /// session leaves the editing state for good; on rejection the draft is
    /// untouched and the per-field messages stay available for rendering.
    pub fn submit(&mut self) -> Result<ApplicationSubmission, FormError> {
        self.ensure_editing()?;
        match validation::validate(&self.draft) {
            Ok(submission) => {
                self.errors = ValidationErrors::default();
                self.submission = Some(submission.clone());
                Ok(submission)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(FormError::Rejected(errors))
            }
        }
    }

    fn ensure_editing(&self) -> Result<(), FormError> {
        match self.state() {
            FormState::Editing => Ok(()),
            FormState::Submitted => Err(FormError::AlreadySubmitted),
        }
    }
}
