use super::common::*;
use crate::form::{FormError, FormField, FormState, JobApplicationForm};

#[test]
fn a_new_form_starts_editing_with_a_blank_draft() {
    let form = JobApplicationForm::new();

    assert_eq!(form.state(), FormState::Editing);
    assert!(form.errors().is_empty());
    assert!(form.submission().is_none());
    assert_eq!(form.draft().full_name, "");
    assert!(form.draft().additional_skills.is_empty());
}

#[test]
fn update_field_stores_text_verbatim() {
    let mut form = JobApplicationForm::new();

    form.update_field(FormField::FullName, "  Jane  ")
        .expect("full name accepts text");
    form.update_field(FormField::RelevantExperience, "not a number yet")
        .expect("conditional fields accept any text while editing");

    assert_eq!(form.draft().full_name, "  Jane  ");
    assert_eq!(form.draft().relevant_experience, "not a number yet");
}

#[test]
fn the_skills_checklist_rejects_text_updates() {
    let mut form = JobApplicationForm::new();

    match form.update_field(FormField::AdditionalSkills, "JavaScript") {
        Err(FormError::NotATextField(FormField::AdditionalSkills)) => {}
        other => panic!("expected not-a-text-field error, got {other:?}"),
    }
}

#[test]
fn toggling_skills_keeps_selection_order_and_ignores_repeats() {
    let mut form = JobApplicationForm::new();

    form.toggle_skill("Python", true).expect("toggle on");
    form.toggle_skill("JavaScript", true).expect("toggle on");
    form.toggle_skill("Python", true).expect("repeat toggle on");
    assert_eq!(form.draft().additional_skills, vec!["Python", "JavaScript"]);

    form.toggle_skill("Python", false).expect("toggle off");
    form.toggle_skill("CSS", false).expect("toggle off absent skill");
    assert_eq!(form.draft().additional_skills, vec!["JavaScript"]);
}

#[test]
fn switching_position_never_clears_other_fields() {
    let mut form = form_with(designer_draft());

    form.update_field(FormField::Position, "Manager")
        .expect("position accepts text");

    assert_eq!(form.draft().portfolio_url, "https://janedoe.dev");
    assert_eq!(form.draft().relevant_experience, "4");
    assert_eq!(form.draft().full_name, "Jane Doe");
}

#[test]
fn rejected_submit_keeps_editing_and_exposes_messages() {
    let mut form = JobApplicationForm::new();
    fill_universal_fields(&mut form);

    match form.submit() {
        Err(FormError::Rejected(errors)) => {
            assert_eq!(errors.message(FormField::Position), Some("Position is required"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    assert_eq!(form.state(), FormState::Editing);
    assert!(!form.errors().is_empty());
    assert!(form.submission().is_none());
}

#[test]
fn errors_clear_once_a_later_submit_succeeds() {
    let mut form = form_with(developer_draft());
    form.update_field(FormField::Email, "broken")
        .expect("email accepts text");

    assert!(form.submit().is_err());
    assert!(!form.errors().is_empty());

    form.update_field(FormField::Email, "jane@x.com")
        .expect("email accepts text");
    let submission = form.submit().expect("repaired draft submits");

    assert!(form.errors().is_empty());
    assert_eq!(submission.email, "jane@x.com");
}

#[test]
fn successful_submit_is_terminal() {
    let mut form = form_with(developer_draft());

    let submission = form.submit().expect("valid draft submits");
    assert_eq!(form.state(), FormState::Submitted);
    assert_eq!(form.submission(), Some(&submission));

    match form.update_field(FormField::FullName, "Someone Else") {
        Err(FormError::AlreadySubmitted) => {}
        other => panic!("expected already-submitted error, got {other:?}"),
    }
    match form.toggle_skill("CSS", true) {
        Err(FormError::AlreadySubmitted) => {}
        other => panic!("expected already-submitted error, got {other:?}"),
    }
    match form.submit() {
        Err(FormError::AlreadySubmitted) => {}
        other => panic!("expected already-submitted error, got {other:?}"),
    }

    assert_eq!(form.submission(), Some(&submission));
}

#[test]
fn rejected_submit_leaves_the_draft_untouched() {
    let mut draft = developer_draft();
    draft.phone_number = "call me".to_string();
    let mut form = form_with(draft.clone());

    assert!(form.submit().is_err());

    assert_eq!(form.draft(), &draft);
}
