//! Terminal front end for checkers
//!
//! The human plays red against the automated side. Finished games are
//! written to the configured store and can be listed and replayed later.

pub mod args;
pub mod commands;
pub mod game;
pub mod review;

pub use args::{Action, Args};
pub use commands::{parse_command, Command};
pub use game::Table;
pub use review::{list_games, show_replay};
