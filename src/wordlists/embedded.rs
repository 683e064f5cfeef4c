//! Embedded default word list
//!
//! Compiled into the binary at build time from `data/default_words.txt`.

include!(concat!(env!("OUT_DIR"), "/default_words.rs"));
