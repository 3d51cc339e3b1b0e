use super::domain::{ApplicationSubmission, FormField};
use super::views::{ApplicationSummaryView, SummaryEntry};

const SUMMARY_HEADING: &str = "Application Summary";

/// Format for "May 1, 2024, 10:00 AM" style timestamps.
const INTERVIEW_TIME_FORMAT: &str = "%B %-d, %Y, %-I:%M %p";

impl ApplicationSubmission {
    /// Build the summary shown after submission. Universal entries always
    /// appear; conditional entries follow the submitted position's group,
    /// which is exactly the set of populated optional fields.
    pub fn summary(&self) -> ApplicationSummaryView {
        let mut entries = vec![
            entry(FormField::FullName, "Full Name", self.full_name.clone()),
            entry(FormField::Email, "Email", self.email.clone()),
            entry(
                FormField::PhoneNumber,
                "Phone Number",
                self.phone_number.to_string(),
            ),
            entry(
                FormField::Position,
                "Position Applied",
                self.position.label().to_string(),
            ),
        ];

        if let Some(years) = self.relevant_experience {
            entries.push(entry(
                FormField::RelevantExperience,
                "Relevant Experience",
                format!("{years} years"),
            ));
        }
        if let Some(url) = &self.portfolio_url {
            entries.push(entry(FormField::PortfolioUrl, "Portfolio URL", url.clone()));
        }
        if let Some(years) = self.management_experience {
            entries.push(entry(
                FormField::ManagementExperience,
                "Management Experience",
                years.to_string(),
            ));
        }

        entries.push(entry(
            FormField::AdditionalSkills,
            "Additional Skills",
            self.additional_skills.join(", "),
        ));
        entries.push(entry(
            FormField::PreferredInterviewTime,
            "Preferred Interview Time",
            self.preferred_interview_time
                .format(INTERVIEW_TIME_FORMAT)
                .to_string(),
        ));

        ApplicationSummaryView {
            heading: SUMMARY_HEADING,
            entries,
        }
    }
}

fn entry(field: FormField, label: &'static str, value: String) -> SummaryEntry {
    SummaryEntry {
        field,
        label,
        value,
    }
}
