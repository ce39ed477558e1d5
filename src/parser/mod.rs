//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! A recursive-descent parser over a token vector. Expressions climb a
//! fixed precedence ladder, one function per tier, and sugar is lowered
//! while it is recognized:
//!
//! - Declaration and statement parsing, dispatched on the leading keyword
//! - Expression parsing (assignment down to primary)
//! - Desugaring of `op=`, `++`/`--` and `for`
//! - Error recording and statement-level synchronization

pub mod desugar;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
