pub mod error;
pub mod heap;
pub mod history;
pub mod input;
pub mod render;

#[cfg(test)]
mod testing;

// element type used by the interactive driver; the engine itself is generic
pub type Value = i64;
