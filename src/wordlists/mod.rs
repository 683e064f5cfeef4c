//! Word lists for puzzle generation
//!
//! An embedded starter list plus a JSON store for lists prepared by the user.

mod embedded;
pub mod loader;
mod store;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use store::{WordList, WordListError};
