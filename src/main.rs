use anyhow::Context;
use clap::Parser;
use colored::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use repo_browser::cli::Cli;
use repo_browser::github::{GitHubClient, SearchBackend};
use repo_browser::models::RepoQuery;
use repo_browser::render;
use repo_browser::sync::Synchronizer;
use repo_browser::tech;

const COMMANDS: &str = "[o] order  [l <n>] limit  [p <n>] page  [t <term>] term  [r] retry  [q] quit";

fn show<B: SearchBackend>(logo_override: Option<&str>, sync: &Synchronizer<B>) {
    let logo = logo_override
        .map(str::to_string)
        .unwrap_or_else(|| tech::logo_for(sync.term()).to_string());
    print!("{}", render::view(&logo, sync.term(), sync.order(), sync.phase()));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    println!("{}", "Repo Browser".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let client = GitHubClient::new().context("failed to build GitHub client")?;
    let query = RepoQuery {
        term: cli.term,
        page: cli.page,
        limit: cli.limit,
        order: cli.order,
    };
    let mut sync = Synchronizer::with_query(client, query);

    print!("{}", render::loading_indicator());
    sync.refresh().await;
    show(cli.logo.as_deref(), &sync);

    if cli.once {
        return Ok(());
    }

    println!("{}", COMMANDS.dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\nBye");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                let (command, rest) = match line.split_once(' ') {
                    Some((c, r)) => (c, r.trim()),
                    None => (line, ""),
                };

                match command {
                    "o" => sync.toggle_order().await,
                    // Raw value on purpose: an empty or non-numeric limit is
                    // carried into the next request unvalidated.
                    "l" => sync.set_limit(rest).await,
                    "p" => match rest.parse::<u32>() {
                        Ok(page) => sync.set_page(page).await,
                        Err(_) => {
                            println!("{}", format!("not a page number: '{}'", rest).red());
                            continue;
                        }
                    },
                    "t" => {
                        if rest.is_empty() {
                            println!("{}", "usage: t <term>".red());
                            continue;
                        }
                        sync.set_term(rest).await;
                    }
                    "r" => sync.retry().await,
                    "q" => break,
                    "" => continue,
                    other => {
                        println!("{}", format!("unknown command '{}'", other).red());
                        println!("{}", COMMANDS.dimmed());
                        continue;
                    }
                }

                show(cli.logo.as_deref(), &sync);
            }
        }
    }

    Ok(())
}
