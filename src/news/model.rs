use serde::{Deserialize, Serialize};

/// One news item, as returned by the headlines/search API or by the
/// built-in fallback data. Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub source: Option<Source>,
    #[serde(default)]
    pub author: Option<String>,
    // Only ever set by fallback data; the real API has no such field.
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: Option<String>,
}

impl Article {
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: Option<u64>,
    pub articles: Vec<Article>,
}

/// What the user asked for: a category's headlines or a free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Category(String),
    Search(String),
}

impl Query {
    /// Key under which results are cached and fallback data is looked up.
    pub fn cache_key(&self) -> &str {
        match self {
            Query::Category(id) => id,
            Query::Search(term) => term,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub const CATEGORIES: [Category; 7] = [
    Category { id: "general", name: "General" },
    Category { id: "world", name: "World" },
    Category { id: "business", name: "Business" },
    Category { id: "technology", name: "Technology" },
    Category { id: "health", name: "Health" },
    Category { id: "sports", name: "Sports" },
    Category { id: "entertainment", name: "Entertainment" },
];

/// Maps a navigation label (or an id) to a category id. Unknown labels
/// browse `general`.
pub fn category_id_for(label: &str) -> &'static str {
    let wanted = label.trim();
    CATEGORIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(wanted) || c.id.eq_ignore_ascii_case(wanted))
        .map(|c| c.id)
        .unwrap_or("general")
}
