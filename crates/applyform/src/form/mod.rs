//! Job application form workflow: draft intake, conditional validation, and
//! the post-submission summary.
//!
//! The form collects a fixed set of universal fields plus a conditional group
//! that follows the selected position. Edits are stored verbatim; all rules
//! run in a single pass at submit time, and a successful submit freezes the
//! draft into a typed record for good.

pub mod controller;
pub mod domain;
mod summary;
pub(crate) mod validation;
pub mod views;

#[cfg(test)]
mod tests;

pub use controller::{FormError, FormState, JobApplicationForm};
pub use domain::{
    ApplicationDraft, ApplicationSubmission, FormField, Position, UnknownPosition,
};
pub use validation::{validate, ValidationErrors};
pub use views::{ApplicationSummaryView, SummaryEntry};
