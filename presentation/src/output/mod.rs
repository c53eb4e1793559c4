//! Console output formatting

pub mod console;
pub mod seed;
pub mod verification;

pub use seed::SeedReportFormatter;
pub use verification::VerificationFormatter;
