//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod words;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use generate::{GenerateConfig, generate};
pub use words::{add_word, import_words, load_or_defaults, remove_word};
