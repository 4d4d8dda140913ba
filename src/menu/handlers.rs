//! Menu handlers
//!
//! One handler per menu action. Each returns the next menu state; domain
//! failures are shown to the user and never end the program.

use log::{info, warn};
use std::io::{self, BufRead, Write};

use super::commands::{DashboardChoice, MainMenuChoice, parse_dashboard, parse_main_menu};
use super::console::Console;
use super::session::{MenuState, Session};
use crate::auth::{check_password, register_user, set_password};
use crate::catalog::{Level, filter_by_level, load_texts};
use crate::error::AppError;
use crate::error::handlers::{error_to_user_message, handle_error};
use crate::storage::Store;

pub const WELCOME: &str = "Welcome to 'Learn German'!";

/// Logs `err` and shows its one-line message.
fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, err: AppError) -> io::Result<()> {
    handle_error(&err);
    console.say(&error_to_user_message(&err))
}

pub fn handle_main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<MenuState> {
    console.say("\nChoose an action:")?;
    console.say("1 - Register a new user")?;
    console.say("2 - Log in")?;

    let next = match parse_main_menu(&console.prompt("Your choice: ")?) {
        MainMenuChoice::Register => MenuState::Registering,
        MainMenuChoice::Login => MenuState::LoggingIn,
        MainMenuChoice::Unknown(_) => {
            console.say("Invalid choice. Please try again.")?;
            MenuState::MainMenu
        }
    };
    Ok(next)
}

/// Registers a user, then asks for the password. No confirmation entry and
/// no strength policy.
pub fn handle_register<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
) -> io::Result<MenuState> {
    console.say("\n=== Register a new user ===")?;
    let username = console.prompt("Enter username: ")?;

    let registration = match register_user(store, &username) {
        Ok(result) => result,
        Err(e) => {
            report(console, e.into())?;
            return Ok(MenuState::MainMenu);
        }
    };

    let password = console.prompt("Enter password: ")?;
    if let Err(e) = set_password(store, &registration.username, &password) {
        report(console, e.into())?;
        return Ok(MenuState::MainMenu);
    }

    console.say(&format!(
        "User '{}' registered successfully!",
        registration.username
    ))?;
    Ok(MenuState::MainMenu)
}

/// Picks a user from the numbered list and checks the password once.
pub fn handle_login<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
) -> io::Result<MenuState> {
    console.say("\n=== Log in ===")?;

    let users = store.load_users();
    if users.is_empty() {
        console.say("No registered users. Please register first.")?;
        return Ok(MenuState::MainMenu);
    }

    console.say("Users:")?;
    console.list(&users)?;
    let index = console.prompt_index("Enter user number: ", users.len())?;
    let username = &users[index];

    let password = console.prompt("Enter password: ")?;
    if check_password(store, username, &password) {
        info!("User {} logged in", username);
        console.say(&format!("Welcome, {}!", username))?;
        Ok(MenuState::Dashboard(Session::new(username.as_str())))
    } else {
        warn!("Failed login for user {}", username);
        console.say("Wrong password.")?;
        Ok(MenuState::MainMenu)
    }
}

pub fn handle_dashboard<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
    session: Session,
) -> io::Result<MenuState> {
    console.say("\nChoose the next action:")?;
    console.say("1 - Work with a text")?;
    console.say("2 - Tests")?;
    console.say("3 - Word translation")?;
    console.say("4 - 10 words to review")?;
    console.say("0 - Back to main menu")?;

    match parse_dashboard(&console.prompt("Your choice: ")?) {
        DashboardChoice::TextWork => handle_text_work(store, console, &session)?,
        DashboardChoice::Tests => handle_stub(console, &session, "Tests")?,
        DashboardChoice::Translate => handle_stub(console, &session, "Word translation")?,
        DashboardChoice::Repeat => handle_stub(console, &session, "10 words to review")?,
        DashboardChoice::Exit => {
            console.say("Returning to main menu.")?;
            return Ok(MenuState::MainMenu);
        }
        DashboardChoice::Unknown(_) => console.say("Invalid choice. Please try again.")?,
    }
    Ok(MenuState::Dashboard(session))
}

/// Level, then title, then the selected text's content.
pub fn handle_text_work<R: BufRead, W: Write>(
    store: &Store,
    console: &mut Console<R, W>,
    session: &Session,
) -> io::Result<()> {
    console.say(&format!("\n[{}] Working with a text", session.username()))?;

    let texts = match load_texts(store) {
        Ok(texts) => texts,
        Err(e) => return report(console, e.into()),
    };
    if texts.is_empty() {
        console.say("The texts file is empty or missing. Please contact the administrator.")?;
        return Ok(());
    }

    console.say("\nChoose the level of the text you want to read:")?;
    console.list(&Level::ALL.map(|level| level.as_str()))?;
    let level = Level::ALL[console.prompt_index("Enter level number: ", Level::ALL.len())?];

    let level_texts = filter_by_level(&texts, level);
    if level_texts.is_empty() {
        console.say(&format!("No texts available for level {}.", level))?;
        return Ok(());
    }

    console.say(&format!("\nAvailable texts for level {}:", level))?;
    let titles: Vec<&str> = level_texts.iter().map(|t| t.title.as_str()).collect();
    console.list(&titles)?;
    let selected = level_texts[console.prompt_index("Enter text number: ", level_texts.len())?];

    console.say("\n=== SELECTED TEXT ===")?;
    console.say(&selected.content)
}

/// Placeholder for dashboard features that do not exist yet.
pub fn handle_stub<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
    feature: &str,
) -> io::Result<()> {
    console.say(&format!(
        "\n[{}] {} is not implemented yet.",
        session.username(),
        feature
    ))
}
