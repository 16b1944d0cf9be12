//! Snake with three rulesets (classic, free wrap-around, obstacle).
//!
//! [`game`] holds the toolkit-free state machine; [`render`] and [`input`]
//! are the macroquad shell around it.

pub mod config;
pub mod game;
pub mod input;
pub mod render;
