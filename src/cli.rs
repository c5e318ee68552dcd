use clap::Parser;

use crate::models::SortOrder;

#[derive(Parser)]
#[command(name = "repo-browser")]
#[command(about = "Browse popular GitHub repositories by technology")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Technology term, used both as the search query and the topic filter
    #[arg(long, env = "REPO_TERM", default_value = "JavaScript")]
    pub term: String,

    /// Category logo shown in the header; defaults from the technology catalog
    #[arg(long, env = "REPO_LOGO")]
    pub logo: Option<String>,

    /// Page size, passed to the search service as per_page (not validated)
    #[arg(long, env = "REPO_LIMIT", default_value = "36")]
    pub limit: String,

    /// Result page, starting at 1
    #[arg(long, env = "REPO_PAGE", default_value_t = 1)]
    pub page: u32,

    /// Star-count sort order: asc or desc
    #[arg(long, env = "REPO_ORDER", default_value = "desc", value_parser = parse_order)]
    pub order: SortOrder,

    /// Print one page of results and exit instead of the interactive loop
    #[arg(long)]
    pub once: bool,
}

fn parse_order(raw: &str) -> Result<SortOrder, String> {
    match raw.to_ascii_lowercase().as_str() {
        "asc" => Ok(SortOrder::Asc),
        "desc" => Ok(SortOrder::Desc),
        _ => Err(format!("expected 'asc' or 'desc', got '{}'", raw)),
    }
}
