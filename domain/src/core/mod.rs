//! Core domain concepts shared across all subdomains.
//!
//! - [`string`]: char-safe text helpers used for report excerpts

pub mod string;
