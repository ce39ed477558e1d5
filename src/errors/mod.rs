//! Diagnostics produced by the scanner and the parser.
//!
//! Every diagnostic is an [`errors::Error`]: an [`errors::ErrorImpl`] kind
//! paired with the source position it was found at. Kinds carry the data
//! needed for the message, and most offer a suggestion through
//! [`errors::Error::get_tip`].

pub mod errors;

#[cfg(test)]
mod tests;
