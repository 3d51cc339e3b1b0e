use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Position selected in the form's dropdown. The conditional part of the
/// form follows this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    pub const fn ordered() -> [Self; 3] {
        [Self::Developer, Self::Designer, Self::Manager]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Developer => "Developer",
            Self::Designer => "Designer",
            Self::Manager => "Manager",
        }
    }

    /// Conditional fields that become active when this position is selected.
    pub const fn conditional_fields(self) -> &'static [FormField] {
        match self {
            Self::Developer => &[FormField::RelevantExperience],
            Self::Designer => &[FormField::RelevantExperience, FormField::PortfolioUrl],
            Self::Manager => &[FormField::ManagementExperience],
        }
    }
}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Developer" => Ok(Self::Developer),
            "Designer" => Ok(Self::Designer),
            "Manager" => Ok(Self::Manager),
            other => Err(UnknownPosition(other.to_string())),
        }
    }
}

/// Raised when a raw position value does not match any dropdown option.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position {0:?}")]
pub struct UnknownPosition(pub String);

/// Every field the application form collects, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FullName,
    Email,
    PhoneNumber,
    Position,
    RelevantExperience,
    PortfolioUrl,
    ManagementExperience,
    AdditionalSkills,
    PreferredInterviewTime,
}

impl FormField {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::FullName,
            Self::Email,
            Self::PhoneNumber,
            Self::Position,
            Self::RelevantExperience,
            Self::PortfolioUrl,
            Self::ManagementExperience,
            Self::AdditionalSkills,
            Self::PreferredInterviewTime,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::PhoneNumber => "Phone Number",
            Self::Position => "Applying for Position",
            Self::RelevantExperience => "Relevant Experience (years)",
            Self::PortfolioUrl => "Portfolio URL",
            Self::ManagementExperience => "Management Experience (years)",
            Self::AdditionalSkills => "Additional Skills",
            Self::PreferredInterviewTime => "Preferred Interview Time",
        }
    }

    /// Conditional fields only participate when the selected position puts
    /// them in its active group.
    pub const fn is_conditional(self) -> bool {
        matches!(
            self,
            Self::RelevantExperience | Self::PortfolioUrl | Self::ManagementExperience
        )
    }
}

/// Raw form state exactly as the applicant typed it. Values are held as text
/// until submit; switching position never clears what was already entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub position: String,
    pub relevant_experience: String,
    pub portfolio_url: String,
    pub management_experience: String,
    pub additional_skills: Vec<String>,
    pub preferred_interview_time: String,
}

impl ApplicationDraft {
    /// Position currently selected, when the raw value matches an option.
    pub fn selected_position(&self) -> Option<Position> {
        self.position.parse().ok()
    }

    /// Raw text held for a field. `None` for the skills checklist, which is
    /// not a text field.
    pub fn field_text(&self, field: FormField) -> Option<&str> {
        let value = match field {
            FormField::FullName => &self.full_name,
            FormField::Email => &self.email,
            FormField::PhoneNumber => &self.phone_number,
            FormField::Position => &self.position,
            FormField::RelevantExperience => &self.relevant_experience,
            FormField::PortfolioUrl => &self.portfolio_url,
            FormField::ManagementExperience => &self.management_experience,
            FormField::PreferredInterviewTime => &self.preferred_interview_time,
            FormField::AdditionalSkills => return None,
        };
        Some(value)
    }

    pub(crate) fn set_field_text(&mut self, field: FormField, value: &str) -> bool {
        let slot = match field {
            FormField::FullName => &mut self.full_name,
            FormField::Email => &mut self.email,
            FormField::PhoneNumber => &mut self.phone_number,
            FormField::Position => &mut self.position,
            FormField::RelevantExperience => &mut self.relevant_experience,
            FormField::PortfolioUrl => &mut self.portfolio_url,
            FormField::ManagementExperience => &mut self.management_experience,
            FormField::PreferredInterviewTime => &mut self.preferred_interview_time,
            FormField::AdditionalSkills => return false,
        };
        value.clone_into(slot);
        true
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.additional_skills.iter().any(|entry| entry == skill)
    }

    /// Check or uncheck one skill. Selection order is kept for display and
    /// re-selecting an already checked skill changes nothing.
    pub(crate) fn toggle_skill(&mut self, skill: &str, selected: bool) {
        let existing = self.additional_skills.iter().position(|entry| entry == skill);
        match (existing, selected) {
            (None, true) => self.additional_skills.push(skill.to_string()),
            (Some(index), false) => {
                self.additional_skills.remove(index);
            }
            _ => {}
        }
    }
}

/// Typed snapshot frozen from a draft that passed validation. Conditional
/// fields outside the submitted position's group stay `None` even when the
/// draft still holds text for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmission {
    pub full_name: String,
    pub email: String,
    pub phone_number: u64,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevant_experience: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_experience: Option<f64>,
    pub additional_skills: Vec<String>,
    pub preferred_interview_time: NaiveDateTime,
}
