use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use repo_browser::error::{RepoBrowserError, Result};
use repo_browser::github::SearchBackend;
use repo_browser::models::RepoQuery;
use repo_browser::types::{SearchItem, SearchOwner};

/// Scripted search backend: pops one pre-loaded outcome per call and records
/// every query it receives. An exhausted script answers with an empty page.
pub struct ScriptedBackend {
    outcomes: Mutex<VecDeque<Result<Vec<SearchItem>>>>,
    queries: Mutex<Vec<RepoQuery>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        ScriptedBackend {
            outcomes: Mutex::new(VecDeque::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn push_ok(&self, items: Vec<SearchItem>) {
        self.outcomes.lock().unwrap().push_back(Ok(items));
    }

    pub fn push_err(&self, message: &str) {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(RepoBrowserError::ApiError(message.to_string())));
    }

    pub fn queries(&self) -> Vec<RepoQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchBackend for ScriptedBackend {
    async fn search(&self, query: &RepoQuery) -> Result<Vec<SearchItem>> {
        self.queries.lock().unwrap().push(query.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Minimal raw search item for tests.
pub fn sample_item(id: u64, name: &str) -> SearchItem {
    SearchItem {
        id,
        name: name.to_string(),
        full_name: format!("octocat/{}", name),
        description: Some(format!("{} description", name)),
        owner: SearchOwner {
            avatar_url: format!("https://avatars.example/{}.png", id),
        },
        html_url: format!("https://github.com/octocat/{}", name),
        git_url: format!("git://github.com/octocat/{}.git", name),
        stargazers_count: 1000,
        forks_count: 50,
        open_issues_count: 5,
    }
}
