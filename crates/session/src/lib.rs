//! Checkers game sessions
//!
//! This crate provides everything around the rules engine that a playable
//! game needs:
//! - A turn controller with value semantics (every command returns a new session)
//! - Coach suggestions from an external endpoint with a local fallback
//! - Game records and a JSON file store for finished games
//! - TOML configuration
//!
//! # Usage
//!
//! ```no_run
//! use checkers_core::Position;
//! use checkers_session::Session;
//! use random_engine::RandomEngine;
//!
//! let session = Session::new();
//! let session = session.play(Position::new(5, 2), Position::new(4, 3)).unwrap();
//! let mut engine = RandomEngine::new();
//! let session = session.automated_turn(&mut engine).unwrap();
//! println!("{}", session.board());
//! ```

mod coach;
mod config;
mod controller;
mod error;
mod record;

pub use coach::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use record::*;
