//! Menu input parsing
//!
//! Turns raw console lines into menu choices and list selections.

/// Choices offered by the main menu
#[derive(Debug, PartialEq)]
pub enum MainMenuChoice {
    Register,
    Login,
    Unknown(String),
}

/// Choices offered by the dashboard after login
#[derive(Debug, PartialEq)]
pub enum DashboardChoice {
    TextWork,
    Tests,
    Translate,
    Repeat,
    Exit,
    Unknown(String),
}

/// Outcome of reading a 1-based list selection
#[derive(Debug, PartialEq)]
pub enum Selection {
    /// Zero-based index into the list
    Index(usize),
    NotANumber,
    OutOfRange,
}

pub fn parse_main_menu(raw: &str) -> MainMenuChoice {
    match raw.trim() {
        "1" => MainMenuChoice::Register,
        "2" => MainMenuChoice::Login,
        other => MainMenuChoice::Unknown(other.to_string()),
    }
}

pub fn parse_dashboard(raw: &str) -> DashboardChoice {
    match raw.trim() {
        "1" => DashboardChoice::TextWork,
        "2" => DashboardChoice::Tests,
        "3" => DashboardChoice::Translate,
        "4" => DashboardChoice::Repeat,
        "0" => DashboardChoice::Exit,
        other => DashboardChoice::Unknown(other.to_string()),
    }
}

/// Parses a 1-based selection from a list of `len` entries. Only plain ASCII
/// digits count as a number; signs and spaces inside the number do not.
pub fn parse_selection(raw: &str, len: usize) -> Selection {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Selection::NotANumber;
    }

    match trimmed.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Selection::Index(n - 1),
        _ => Selection::OutOfRange,
    }
}
