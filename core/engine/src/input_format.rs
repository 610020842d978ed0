//! FILENAME: core/engine/src/input_format.rs
//! PURPOSE: Keystroke formatting for the number and location inputs.
//! CONTEXT: Cosmetic only. A formatted value can still fail validation.

/// Significant characters kept in the number field.
pub const NUMBER_MAX_CHARS: usize = 4;
/// Significant characters kept in the location field (hyphen excluded).
pub const LOCATION_MAX_CHARS: usize = 6;
/// Position of the auto-inserted hyphen in the location field.
const LOCATION_SPLIT: usize = 3;

/// Strip hyphens and keep the first four remaining characters.
pub fn format_number_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '-')
        .take(NUMBER_MAX_CHARS)
        .collect()
}

/// Strip hyphens, keep six characters, and re-insert a hyphen after the
/// third one once a fourth is present.
pub fn format_location_input(raw: &str) -> String {
    let kept: Vec<char> = raw
        .chars()
        .filter(|c| *c != '-')
        .take(LOCATION_MAX_CHARS)
        .collect();

    let mut out = String::with_capacity(LOCATION_MAX_CHARS + 1);
    for (i, c) in kept.iter().enumerate() {
        if i == LOCATION_SPLIT {
            out.push('-');
        }
        out.push(*c);
    }
    out
}
