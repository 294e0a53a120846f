//! # Zuul - a small text adventure
//!
//! The player wanders a campus made of locations joined by plain exits and
//! lockable doors, picks things up, drops them, and trades with the odd
//! resident. Input is a two-word command language (`go east`, `take gold`).
//!
//! ## Quick Start
//!
//! ```rust
//! use zuul::engine::Game;
//! use zuul::world::campus_world;
//!
//! let mut game = Game::new(campus_world().expect("campus world"));
//! println!("{}", game.welcome());
//!
//! let reply = game.process_line("go south");
//! assert!(reply.text.contains("computing lab"));
//! assert!(game.process_line("quit").finished);
//! ```
//!
//! ## Module Organization
//!
//! - [`world`] - locations, doors, items, actors and world construction
//! - [`engine`] - command words, the line parser and turn dispatch
//! - [`config`] - TOML configuration
//! - [`logutil`] - log sanitising helpers
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   CLI / loop    │ ← reads lines, prints replies
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │     Engine      │ ← Parser → Command → Game::dispatch
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │     World       │ ← arena of locations + player
//! └─────────────────┘
//! ```

pub mod config;
pub mod engine;
pub mod logutil;
pub mod world;
