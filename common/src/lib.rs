pub use eyre::Result;
use std::fmt::Debug;

pub mod wc;

/// A map/reduce application. `map` turns one input record into intermediate
/// key/value pairs; `reduce` collapses all values emitted for one key.
pub trait App: Debug {
    fn map(&self, file: &str, line: &str) -> Vec<(String, u64)>;
    fn reduce(&self, key: &str, values: Vec<u64>) -> u64;
}
