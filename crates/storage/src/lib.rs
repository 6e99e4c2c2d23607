#![warn(clippy::pedantic)]

pub mod json;
pub mod memory;
pub mod templates;

pub use memory::MemoryStore;
