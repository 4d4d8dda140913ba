//! Session state
//!
//! Tracks who is logged in and which menu is active.

/// A logged-in user
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    username: String,
}

impl Session {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Menu state machine. Registration and login always return to the main
/// menu unless login succeeds; the dashboard holds the logged-in session
/// until the user exits back to the main menu.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MenuState {
    #[default]
    MainMenu,
    Registering,
    LoggingIn,
    Dashboard(Session),
}
