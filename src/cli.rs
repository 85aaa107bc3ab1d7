use clap::Parser;
use std::path::PathBuf;

/// Terminal front page for NewsAPI headlines and search.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// NewsAPI key (overrides the config file)
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Category to open with, by id or name
    #[arg(long, conflicts_with = "search")]
    pub category: Option<String>,

    /// Start with a search instead of a category
    #[arg(short, long)]
    pub search: Option<String>,

    /// Print the first page and exit
    #[arg(short, long)]
    pub print: bool,
}
