//! Blocky engine library.
//!
//! Exposes the quadtree board, goal scoring, the computer players' move
//! decision, configuration, and a headless game driver for the binary and
//! integration tests.

pub mod board;
pub mod config;
pub mod game;
pub mod goal;
pub mod player;
