//! Interactive menu system
//!
//! Console I/O, input parsing, session state and the menu state machine.

pub mod commands;
pub mod console;
pub mod controller;
pub mod handlers;
pub mod session;

pub use console::Console;
pub use controller::run;
pub use session::{MenuState, Session};
