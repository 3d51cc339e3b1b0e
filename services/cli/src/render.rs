//! Console rendering for the form screen, the skills checklist, and the
//! submission summary.

use std::io::{self, Write};

use applyform::form::{
    ApplicationDraft, ApplicationSummaryView, FormField, Position, ValidationErrors,
};

/// Fields shown for the current position selection, in display order. The
/// conditional group appears between the position dropdown and the skills
/// checklist, exactly where the numbered menu expects it.
pub(crate) fn visible_fields(position: Option<Position>) -> Vec<FormField> {
    FormField::ordered()
        .into_iter()
        .filter(|field| {
            if !field.is_conditional() {
                return true;
            }
            position.map_or(false, |position| {
                position.conditional_fields().contains(field)
            })
        })
        .collect()
}

/// Render the numbered form with current values and, after a rejected
/// submit, the message belonging to each failing field.
pub(crate) fn form_screen<W: Write>(
    output: &mut W,
    draft: &ApplicationDraft,
    errors: &ValidationErrors,
) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Job application")?;
    for (index, field) in visible_fields(draft.selected_position())
        .into_iter()
        .enumerate()
    {
        let value = match field {
            FormField::AdditionalSkills => draft.additional_skills.join(", "),
            _ => draft.field_text(field).unwrap_or_default().to_string(),
        };
        let line = format!("{:>2}. {:<32} {}", index + 1, format!("{}:", field.label()), value);
        writeln!(output, "{}", line.trim_end())?;
        if let Some(message) = errors.message(field) {
            writeln!(output, "    ! {message}")?;
        }
    }
    Ok(())
}

pub(crate) fn skill_checklist<W: Write>(
    output: &mut W,
    draft: &ApplicationDraft,
    skill_catalog: &[String],
) -> io::Result<()> {
    writeln!(output, "Additional skills:")?;
    for (index, skill) in skill_catalog.iter().enumerate() {
        let mark = if draft.has_skill(skill) { "x" } else { " " };
        writeln!(output, "{:>2}. [{mark}] {skill}", index + 1)?;
    }
    Ok(())
}

pub(crate) fn summary<W: Write>(output: &mut W, view: &ApplicationSummaryView) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", view.heading)?;
    for line in view.lines() {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered<F>(render: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut output = Vec::new();
        render(&mut output).expect("render succeeds");
        String::from_utf8(output).expect("utf8 output")
    }

    #[test]
    fn visible_fields_follow_the_selected_position() {
        assert!(!visible_fields(None).contains(&FormField::RelevantExperience));
        assert!(visible_fields(Some(Position::Designer)).contains(&FormField::PortfolioUrl));
        assert!(!visible_fields(Some(Position::Manager)).contains(&FormField::RelevantExperience));
        assert_eq!(visible_fields(None).len(), 6);
        assert_eq!(visible_fields(Some(Position::Designer)).len(), 8);
    }

    #[test]
    fn form_screen_numbers_only_visible_fields() {
        let draft = ApplicationDraft::default();
        let text = rendered(|output| form_screen(output, &draft, &ValidationErrors::default()));

        assert!(text.contains(" 4. Applying for Position:"));
        assert!(text.contains(" 5. Additional Skills:"));
        assert!(!text.contains("Relevant Experience"));
    }

    #[test]
    fn form_screen_shows_values_and_messages_inline() {
        let draft = ApplicationDraft {
            full_name: "Jane Doe".to_string(),
            position: "Designer".to_string(),
            additional_skills: vec!["CSS".to_string(), "Python".to_string()],
            ..ApplicationDraft::default()
        };
        let errors = match applyform::form::validate(&draft) {
            Err(errors) => errors,
            Ok(submission) => panic!("expected rejection, got {submission:?}"),
        };

        let text = rendered(|output| form_screen(output, &draft, &errors));

        let full_name_row = text
            .lines()
            .find(|line| line.contains("Full Name:"))
            .expect("full name row renders");
        assert!(full_name_row.starts_with(" 1."));
        assert!(full_name_row.ends_with("Jane Doe"));

        let skills_row = text
            .lines()
            .find(|line| line.contains("Additional Skills:"))
            .expect("skills row renders");
        assert!(skills_row.ends_with("CSS, Python"));

        assert!(text.contains(" 6. Portfolio URL:"));
        assert!(text.contains("    ! Email is required"));
        assert!(text.contains("    ! Portfolio URL is required"));
    }

    #[test]
    fn skill_checklist_marks_current_selection() {
        let draft = ApplicationDraft {
            additional_skills: vec!["Python".to_string()],
            ..ApplicationDraft::default()
        };
        let catalog = vec![
            "JavaScript".to_string(),
            "CSS".to_string(),
            "Python".to_string(),
        ];

        let text = rendered(|output| skill_checklist(output, &draft, &catalog));

        assert!(text.contains(" 1. [ ] JavaScript"));
        assert!(text.contains(" 3. [x] Python"));
    }
}
