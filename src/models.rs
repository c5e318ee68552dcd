use serde::{Deserialize, Serialize};

use crate::types::SearchItem;

/// View model for one repository card. Carries exactly the fields the view
/// needs, not the raw API shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub git_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
}

impl From<SearchItem> for RepositorySummary {
    fn from(item: SearchItem) -> Self {
        RepositorySummary {
            id: item.id,
            name: item.name,
            full_name: item.full_name,
            description: item.description,
            avatar_url: item.owner.avatar_url,
            html_url: item.html_url,
            git_url: item.git_url,
            stargazers_count: item.stargazers_count,
            forks_count: item.forks_count,
            open_issues_count: item.open_issues_count,
        }
    }
}

/// Star-count sort order. Only these two values are reachable; the toggle
/// flips between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The watched query tuple carried to the search service. `limit` is the raw
/// control value; it is interpolated into `per_page` uninterpreted, so an
/// empty or non-numeric input reaches the service unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct RepoQuery {
    pub term: String,
    pub page: u32,
    pub limit: String,
    pub order: SortOrder,
}

impl Default for RepoQuery {
    fn default() -> Self {
        RepoQuery {
            term: "JavaScript".to_string(),
            page: 1,
            limit: "36".to_string(),
            order: SortOrder::Desc,
        }
    }
}
