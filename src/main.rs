mod cli;
mod config;
mod news;
mod open_url;
mod ui;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use cli::Cli;
use news::{Query, category_id_for};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the page on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Cli::parse();
    debug!(?args.config, print = args.print, "parsed arguments");

    let cfg = config::load(args.config.as_deref(), args.api_key.clone())?;
    let start = start_query(&args, &cfg.default_category);
    info!(key = start.cache_key(), "starting news-desk");

    if args.print {
        news::print_once(&cfg, start).await
    } else {
        news::run(&cfg, start).await
    }
}

fn start_query(args: &Cli, default_category: &str) -> Query {
    match (&args.search, &args.category) {
        (Some(term), _) if !term.trim().is_empty() => Query::Search(term.trim().to_string()),
        (_, Some(cat)) => Query::Category(category_id_for(cat).to_string()),
        _ => Query::Category(category_id_for(default_category).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_query_prefers_search_then_category() {
        let args = Cli::parse_from(["news-desk", "--search", " eclipse "]);
        assert_eq!(start_query(&args, "technology"), Query::Search("eclipse".into()));

        let args = Cli::parse_from(["news-desk", "--category", "Sports"]);
        assert_eq!(start_query(&args, "technology"), Query::Category("sports".into()));

        let args = Cli::parse_from(["news-desk"]);
        assert_eq!(start_query(&args, "technology"), Query::Category("technology".into()));
    }

    #[test]
    fn unknown_default_category_browses_general() {
        let args = Cli::parse_from(["news-desk"]);
        assert_eq!(start_query(&args, "gardening"), Query::Category("general".into()));
    }
}
