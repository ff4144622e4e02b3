//! Core types and decision components for the Chaffer offer engine.
//!
//! This crate is deliberately free of I/O, HTTP, and database dependencies.
//! Status resolution and admission are pure functions over values with the
//! clock threaded in as a parameter, so every decision the engine makes can
//! be exercised against a fixed instant. All other crates depend on it; it
//! depends on nothing heavier than `chrono`.

pub mod admission;
pub mod error;
pub mod lifecycle;
pub mod offer;
pub mod store;
pub mod window;

pub use error::{Error, Result};
