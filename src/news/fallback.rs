use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use super::model::{Article, Source};

const TECHNOLOGY_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1581094794329-c8112a89af12?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1518709268805-4e9042af2176?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
];
const BUSINESS_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
];
const SPORTS_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1517466787929-bc90951d0974?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
];
const HEALTH_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1551601651-2a8555f1a136?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
];
const GENERAL_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1588681664899-f142ff2dc9b1?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
];

/// Stock image for an article without one. Same `(category, index)` always
/// yields the same URL; the index wraps around the category's pool and
/// unknown categories use the general pool.
pub fn fallback_image(category: &str, index: usize) -> &'static str {
    let pool: &[&'static str] = match category {
        "technology" => &TECHNOLOGY_IMAGES,
        "business" => &BUSINESS_IMAGES,
        "sports" => &SPORTS_IMAGES,
        "health" => &HEALTH_IMAGES,
        _ => &GENERAL_IMAGES,
    };
    pool[index % pool.len()]
}

/// Canned articles served when the API can't be reached. Keys without a
/// dataset of their own get the technology set.
pub fn articles_for(key: &str, now: OffsetDateTime) -> Vec<Article> {
    match key {
        "business" => business(now),
        _ => technology(now),
    }
}

fn stamp(at: OffsetDateTime) -> Option<String> {
    at.format(&Rfc3339).ok()
}

fn canned(
    title: &str,
    description: &str,
    image: &str,
    published: OffsetDateTime,
    source: &str,
    author: &str,
    category: &str,
) -> Article {
    Article {
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        url: Some("#".to_string()),
        url_to_image: Some(image.to_string()),
        published_at: stamp(published),
        source: Some(Source {
            name: Some(source.to_string()),
        }),
        author: Some(author.to_string()),
        category: Some(category.to_string()),
    }
}

fn technology(now: OffsetDateTime) -> Vec<Article> {
    vec![
        canned(
            "AI Breakthrough: New Algorithm Outperforms Humans in Creative Tasks",
            "Researchers have developed an AI system that can generate original artwork and music compositions.",
            fallback_image("technology", 0),
            now,
            "Tech News",
            "Jane Smith",
            "Technology",
        ),
        canned(
            "Quantum Computing Milestone Achieved by Research Team",
            "Scientists have successfully maintained quantum coherence for record-breaking duration.",
            fallback_image("technology", 1),
            now - Duration::hours(1),
            "Science Daily",
            "Dr. Robert Chen",
            "Technology",
        ),
    ]
}

fn business(now: OffsetDateTime) -> Vec<Article> {
    vec![canned(
        "Global Markets Surge as Economic Recovery Exceeds Expectations",
        "Stock indices worldwide hit new highs following positive economic indicators.",
        fallback_image("business", 0),
        now - Duration::hours(2),
        "Financial Times",
        "Michael Johnson",
        "Business",
    )]
}
