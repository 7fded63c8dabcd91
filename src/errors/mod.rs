//! Error types and the diagnostics sink for the parser.
//!
//! - Error structures carrying the offending token's position
//! - One variant per recoverable parse failure
//! - Suggestion tips for the command line front end
//! - An ordered sink collecting every error of a parse pass

pub mod diagnostics;
pub mod errors;

#[cfg(test)]
mod tests;
