use crate::form::domain::{ApplicationDraft, ApplicationSubmission};
use crate::form::{FormField, JobApplicationForm};

pub(super) fn developer_draft() -> ApplicationDraft {
    ApplicationDraft {
        full_name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone_number: "5551234".to_string(),
        position: "Developer".to_string(),
        relevant_experience: "3".to_string(),
        additional_skills: vec!["JavaScript".to_string()],
        preferred_interview_time: "2024-05-01T10:00".to_string(),
        ..ApplicationDraft::default()
    }
}

pub(super) fn designer_draft() -> ApplicationDraft {
    ApplicationDraft {
        position: "Designer".to_string(),
        relevant_experience: "4".to_string(),
        portfolio_url: "https://janedoe.dev".to_string(),
        ..developer_draft()
    }
}

pub(super) fn manager_draft() -> ApplicationDraft {
    ApplicationDraft {
        position: "Manager".to_string(),
        relevant_experience: String::new(),
        management_experience: "5".to_string(),
        ..developer_draft()
    }
}

pub(super) fn form_with(draft: ApplicationDraft) -> JobApplicationForm {
    JobApplicationForm::from_draft(draft)
}

pub(super) fn submitted(draft: ApplicationDraft) -> ApplicationSubmission {
    form_with(draft).submit().expect("draft submits cleanly")
}

pub(super) fn fill_universal_fields(form: &mut JobApplicationForm) {
    let values = [
        (FormField::FullName, "Jane Doe"),
        (FormField::Email, "jane@x.com"),
        (FormField::PhoneNumber, "5551234"),
        (FormField::PreferredInterviewTime, "2024-05-01T10:00"),
    ];
    for (field, value) in values {
        form.update_field(field, value).expect("field accepts text");
    }
    form.toggle_skill("JavaScript", true).expect("skill toggles");
}
