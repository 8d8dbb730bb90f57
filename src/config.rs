use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::*;

#[derive(Parser, Debug, Clone)]
#[command(name = "imindex", version)]
pub struct Opts {
    #[command(subcommand)]
    pub subcmd: SubCommand,
    /// Path of the index database
    #[arg(short, long, default_value = "imindex.db")]
    pub db: PathBuf,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// Create the index schema in a fresh database
    Init(InitCommand),
    /// Add per-image descriptor files to the index
    Add(AddCommand),
    /// Search the index with a query descriptor file
    Search(SearchCommand),
    /// List the images containing a single visual word
    SearchWord(SearchWordCommand),
}
