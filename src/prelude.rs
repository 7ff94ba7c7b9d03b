//! Prelude module for the jalali_date crate.
//!
//! Re-exports the derive_more macros the date and error types derive.

pub use derive_more::Display;
