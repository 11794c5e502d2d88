//! Signal evaluation interfaces.

pub mod classifier;
pub mod engine;

pub use classifier::*;
pub use engine::SignalEngine;
