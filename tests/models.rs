use repo_browser::models::{RepoQuery, RepositorySummary, SortOrder};
use repo_browser::types::{SearchItem, SearchOwner};

#[test]
fn mapping_is_lossless_for_tracked_fields() {
    let item = SearchItem {
        id: 10270250,
        name: "react".to_string(),
        full_name: "facebook/react".to_string(),
        description: Some("The library for web and native user interfaces.".to_string()),
        owner: SearchOwner {
            avatar_url: "https://avatars.githubusercontent.com/u/69631?v=4".to_string(),
        },
        html_url: "https://github.com/facebook/react".to_string(),
        git_url: "git://github.com/facebook/react.git".to_string(),
        stargazers_count: 230000,
        forks_count: 47000,
        open_issues_count: 800,
    };

    let summary = RepositorySummary::from(item);

    assert_eq!(summary.id, 10270250);
    assert_eq!(summary.name, "react");
    assert_eq!(summary.full_name, "facebook/react");
    assert_eq!(
        summary.description.as_deref(),
        Some("The library for web and native user interfaces.")
    );
    assert_eq!(
        summary.avatar_url,
        "https://avatars.githubusercontent.com/u/69631?v=4"
    );
    assert_eq!(summary.html_url, "https://github.com/facebook/react");
    assert_eq!(summary.git_url, "git://github.com/facebook/react.git");
    assert_eq!(summary.stargazers_count, 230000);
    assert_eq!(summary.forks_count, 47000);
    assert_eq!(summary.open_issues_count, 800);
}

#[test]
fn missing_description_maps_to_none() {
    let item = SearchItem {
        id: 1,
        name: "no-docs".to_string(),
        full_name: "octocat/no-docs".to_string(),
        description: None,
        owner: SearchOwner {
            avatar_url: "https://avatars.example/1.png".to_string(),
        },
        html_url: "https://github.com/octocat/no-docs".to_string(),
        git_url: "git://github.com/octocat/no-docs.git".to_string(),
        stargazers_count: 0,
        forks_count: 0,
        open_issues_count: 0,
    };

    let summary = RepositorySummary::from(item);
    assert!(summary.description.is_none());
}

#[test]
fn raw_item_parsing_ignores_unknown_fields() {
    // A trimmed-down live payload with fields the view model never tracks
    let raw = r#"{
        "id": 42,
        "name": "vue",
        "full_name": "vuejs/vue",
        "description": null,
        "owner": {
            "login": "vuejs",
            "avatar_url": "https://avatars.githubusercontent.com/u/6128107?v=4",
            "type": "Organization"
        },
        "html_url": "https://github.com/vuejs/vue",
        "git_url": "git://github.com/vuejs/vue.git",
        "stargazers_count": 208000,
        "forks_count": 33000,
        "open_issues_count": 600,
        "watchers_count": 208000,
        "score": 1.0,
        "license": { "key": "mit", "name": "MIT License" }
    }"#;

    let item: SearchItem = serde_json::from_str(raw).expect("failed to parse raw item");
    let summary = RepositorySummary::from(item);

    assert_eq!(summary.id, 42);
    assert!(summary.description.is_none());
    assert_eq!(
        summary.avatar_url,
        "https://avatars.githubusercontent.com/u/6128107?v=4"
    );
}

#[test]
fn sort_order_toggle_is_an_involution() {
    assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
    assert_eq!(SortOrder::Desc.toggled().toggled(), SortOrder::Desc);
}

#[test]
fn sort_order_wire_format() {
    assert_eq!(SortOrder::Asc.as_str(), "asc");
    assert_eq!(SortOrder::Desc.as_str(), "desc");
    assert_eq!(format!("{}", SortOrder::Asc), "asc");

    let json = serde_json::to_string(&SortOrder::Desc).unwrap();
    assert_eq!(json, "\"desc\"");
}

#[test]
fn query_defaults_match_the_component_defaults() {
    let query = RepoQuery::default();

    assert_eq!(query.term, "JavaScript");
    assert_eq!(query.page, 1);
    assert_eq!(query.limit, "36");
    assert_eq!(query.order, SortOrder::Desc);
}
