//! Lexical analysis.
//!
//! Converts source text into the token stream the parser pulls from:
//!
//! - Ordered regex pattern table, first match wins
//! - Reserved words resolved through a lookup table
//! - Unknown characters surface as `Illegal` tokens instead of errors
//! - Whitespace and `//` comments are skipped

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
