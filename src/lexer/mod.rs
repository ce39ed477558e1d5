//! Reference scanner and the token model the parser consumes.
//!
//! The parser only ever reads a `Vec<Token>`; [`lexer::tokenize`] is one way
//! to produce it. It handles:
//!
//! - Keywords, identifiers, number and string literals
//! - One- and two-character operators, including the `+=`/`++` sugar forms
//! - `//` line comments and `/* */` block comments
//! - Byte-offset spans for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
