//! Core library for the job application intake tool.
//!
//! [`form`] holds the whole form workflow: the draft model, the conditional
//! validation rules, the submit state machine, and the summary views shown
//! after a successful submission. The remaining modules carry configuration,
//! telemetry, and the top-level error type shared with the front end.

pub mod config;
pub mod error;
pub mod form;
pub mod telemetry;
