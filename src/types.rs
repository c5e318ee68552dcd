use serde::Deserialize;

// GitHub search API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub owner: SearchOwner,
    pub html_url: String,
    pub git_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchOwner {
    pub avatar_url: String,
}
