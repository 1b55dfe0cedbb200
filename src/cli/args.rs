//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all lincat
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Validate catalog files (plural-form counts, duplicates, completion)
//! - `clean`: Remove obsolete messages from catalog files
//! - `fmt`: Re-serialize catalog files into canonical form
//! - `init`: Initialize a lincat configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start the .lincatrc.json search from (defaults to the
    /// current directory)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Catalog files or directories to check (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    /// Catalog files or directories to clean (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    /// Catalog files or directories to format (defaults to the current directory)
    pub paths: Vec<PathBuf>,

    /// Actually rewrite files (default checks formatting and exits non-zero
    /// when changes are needed)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for issues (plural-form counts, duplicates, unfinished entries)
    Check(CheckCommand),
    /// Remove obsolete messages from catalog files
    Clean(CleanCommand),
    /// Rewrite catalog files into canonical form
    Fmt(FmtCommand),
    /// Initialize a new .lincatrc.json configuration file
    Init,
}
