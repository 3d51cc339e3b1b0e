use serde::Serialize;

use super::domain::FormField;

/// One labelled line of the submission summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
}

/// Read-only summary of a submitted application, with entries already in
/// display order so renderers only have to print them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationSummaryView {
    pub heading: &'static str,
    pub entries: Vec<SummaryEntry>,
}

impl ApplicationSummaryView {
    pub fn entry(&self, field: FormField) -> Option<&SummaryEntry> {
        self.entries.iter().find(|entry| entry.field == field)
    }

    /// `Label: value` lines in display order.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.label, entry.value))
            .collect()
    }
}
