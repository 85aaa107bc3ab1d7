use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::model::Article;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Short-lived store of fetched article lists, keyed by category id or
/// search term.
///
/// Freshness is tracked with one timestamp for the whole cache: a
/// successful fetch for any key makes every stored key look fresh again.
/// Stale entries are never evicted, only ignored until overwritten.
#[derive(Debug)]
pub struct NewsCache {
    entries: HashMap<String, Vec<Article>>,
    last_fetch: Option<Instant>,
    ttl: Duration,
}

impl Default for NewsCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl NewsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            last_fetch: None,
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<&[Article]> {
        self.get_at(key, Instant::now())
    }

    pub fn get_at(&self, key: &str, now: Instant) -> Option<&[Article]> {
        let articles = self.entries.get(key)?;
        let last = self.last_fetch?;
        if now.saturating_duration_since(last) < self.ttl {
            Some(articles.as_slice())
        } else {
            None
        }
    }

    pub fn put(&mut self, key: &str, articles: Vec<Article>) {
        self.put_at(key, articles, Instant::now());
    }

    pub fn put_at(&mut self, key: &str, articles: Vec<Article>, now: Instant) {
        self.entries.insert(key.to_string(), articles);
        self.last_fetch = Some(now);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
