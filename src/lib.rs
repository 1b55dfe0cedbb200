//! Lincat - linter and formatter for Qt Linguist translation catalogs
//!
//! Lincat is a CLI tool and library for working with Qt Linguist `.ts`
//! translation catalogs. It parses catalogs into a typed in-memory model,
//! checks them for issues (wrong plural-form counts, duplicate messages,
//! unfinished or obsolete entries), and re-serializes them into a stable
//! canonical form.
//!
//! ## Module Structure
//!
//! - `catalog`: In-memory catalog model with keyed message lookup
//! - `cli`: Command-line interface layer (check, clean, fmt, init)
//! - `config`: Configuration file loading and parsing
//! - `error`: Library error type
//! - `issue`: Issue type definitions
//! - `parser`: `.ts` XML parser
//! - `plural`: Per-locale plural-form rules
//! - `reporter`: Cargo-style issue report printing
//! - `rules`: Detection rules for catalog issues
//! - `scan`: Catalog file discovery and parallel loading
//! - `writer`: Canonical `.ts` serializer

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod issue;
pub mod parser;
pub mod plural;
pub mod reporter;
pub mod rules;
pub mod scan;
pub mod writer;
