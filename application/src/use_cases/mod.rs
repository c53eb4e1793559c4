//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod seed_questions;
pub mod verify_questions;
