use colored::*;

use crate::models::{RepositorySummary, SortOrder};
use crate::sync::ViewPhase;

/// Render one repository as a card. Pure function of the summary; layout
/// shows avatar URL, name, description, link and the three counters.
pub fn repository_card(repo: &RepositorySummary) -> String {
    let mut card = String::new();

    card.push_str(&format!("{}\n", repo.name.bold().green()));
    card.push_str(&format!("  {}\n", repo.avatar_url.dimmed()));
    if let Some(description) = &repo.description {
        card.push_str(&format!("  {}\n", description));
    }
    card.push_str(&format!("  {}\n", repo.html_url.blue().underline()));
    card.push_str(&format!(
        "  ★ {}  ⑂ {}  ◉ {} open issues\n",
        repo.stargazers_count.to_string().yellow(),
        repo.forks_count,
        repo.open_issues_count
    ));

    card
}

/// Label for the order toggle. Activation itself is an intent delivered to
/// the synchronizer, which owns the flip.
pub fn order_toggle_label(order: SortOrder) -> String {
    match order {
        SortOrder::Desc => "stars ↓  [o] switch to ascending".to_string(),
        SortOrder::Asc => "stars ↑  [o] switch to descending".to_string(),
    }
}

pub fn loading_indicator() -> String {
    format!("{}\n", "Loading repositories...".cyan())
}

pub fn error_banner(message: &str) -> String {
    format!(
        "{} {}\n{}\n",
        "✖".red().bold(),
        message.red(),
        "[r] retry".dimmed()
    )
}

fn header(logo: &str, term: &str, order: SortOrder) -> String {
    format!(
        "{} {}    {}\n{}\n",
        logo,
        term.bold(),
        order_toggle_label(order),
        "-".repeat(50).dimmed()
    )
}

/// Compose the whole view for the current phase. Loading and error phases
/// replace everything, including the header; only a loaded snapshot gets the
/// full layout.
pub fn view(logo: &str, term: &str, order: SortOrder, phase: &ViewPhase) -> String {
    match phase {
        ViewPhase::Loading => loading_indicator(),
        ViewPhase::Error(message) => error_banner(message),
        ViewPhase::Loaded(repos) => {
            let mut out = header(logo, term, order);
            if repos.is_empty() {
                out.push_str(&format!("{}\n", "No repositories found.".dimmed()));
            } else {
                for repo in repos {
                    out.push_str(&repository_card(repo));
                    out.push('\n');
                }
            }
            out
        }
    }
}
