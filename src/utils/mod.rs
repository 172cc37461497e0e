//! Shared utilities.

pub mod date;

pub use date::DateTimeUtc;
