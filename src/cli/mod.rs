//! CLI module for cinepulse

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use cinepulse::catalog::Category;

pub mod commands;
mod render;

#[derive(Parser, Debug)]
#[command(name = "cinepulse", about = "Browse and search the media catalog like a chat user")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the catalog JSON files (overrides the config file)
    #[arg(long, global = true, env = "CINEPULSE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "CINEPULSE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session against the catalog
    Chat {
        /// User id to chat as
        #[arg(short, long, default_value = "1")]
        user: i64,
    },

    /// Render one page of a category
    Show {
        /// Category to render
        #[arg(value_parser = parse_category)]
        category: Category,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Look up the closest title across all categories
    Search {
        /// Title to look for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List categories with entry and page counts
    Catalog,

    /// Feed a transcript of `user_id<TAB>text` lines through the bot
    Replay {
        /// Transcript file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of users processed concurrently
        #[arg(short, long, default_value = "8")]
        parallel: usize,
    },

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Parse a category slug given on the command line
fn parse_category(slug: &str) -> Result<Category, String> {
    Category::from_slug(slug).ok_or_else(|| {
        let known: Vec<&str> = Category::ALL.into_iter().map(Category::slug).collect();
        format!("unknown category {:?} (expected one of: {})", slug, known.join(", "))
    })
}
