//! Diagnostics produced while parsing.
//!
//! This module defines:
//!
//! - The `Error` structure, pairing a diagnostic with its source position
//! - `ErrorImpl`, the closed set of diagnostic kinds
//! - `ErrorTip`, the hint shown next to a rendered diagnostic

pub mod errors;

#[cfg(test)]
mod tests;
