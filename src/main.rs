//! lern-deutsch - Entry Point
//!
//! Console reader for graded German texts with simple user accounts.

use log::info;
use std::io;

use lern_deutsch::error::AppError;
use lern_deutsch::error::handlers::{error_to_user_message, handle_error};
use lern_deutsch::menu::{self, Console};
use lern_deutsch::{AppConfig, Store};

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let err = AppError::from(e);
            handle_error(&err);
            eprintln!("{} Using default data files.", error_to_user_message(&err));
            AppConfig::default()
        }
    };
    info!("Using data files {:?}", config);

    let store = Store::from_config(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    if let Err(e) = menu::run(&store, &mut console) {
        handle_error(&AppError::from(e));
    }
}
