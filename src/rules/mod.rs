//! Rules engine trait.

pub mod engine;

pub use engine::NumberEngine;
