use super::super::domain::{FormField, Position};

/// Whether a field takes part in validation for the current position
/// selection. Universal fields always do. Conditional fields are checked only
/// when the selected position puts them in its active group, so text left
/// behind after a position switch is never validated. With no valid position
/// selected, no conditional field is checked at all.
pub(crate) fn is_evaluated(field: FormField, position: Option<Position>) -> bool {
    if !field.is_conditional() {
        return true;
    }
    match position {
        Some(position) => position.conditional_fields().contains(&field),
        None => false,
    }
}
