//! Menu loop
//!
//! Drives the menu state machine until the input is closed.

use log::info;
use std::io::{self, BufRead, Write};

use super::console::Console;
use super::handlers::{
    WELCOME, handle_dashboard, handle_login, handle_main_menu, handle_register,
};
use super::session::MenuState;
use crate::storage::Store;

/// Runs the interactive menus. The menus themselves have no quit option;
/// the loop ends only when the input is closed, which counts as a normal
/// exit.
pub fn run<R: BufRead, W: Write>(store: &Store, console: &mut Console<R, W>) -> io::Result<()> {
    match run_menus(store, console) {
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            info!("Input closed, exiting");
            Ok(())
        }
        other => other,
    }
}

fn run_menus<R: BufRead, W: Write>(store: &Store, console: &mut Console<R, W>) -> io::Result<()> {
    console.say(WELCOME)?;

    let mut state = MenuState::default();
    loop {
        state = match state {
            MenuState::MainMenu => handle_main_menu(console)?,
            MenuState::Registering => handle_register(store, console)?,
            MenuState::LoggingIn => handle_login(store, console)?,
            MenuState::Dashboard(session) => handle_dashboard(store, console, session)?,
        };
    }
}
