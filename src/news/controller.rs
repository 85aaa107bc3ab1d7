use time::OffsetDateTime;
use tracing::{debug, info};

use super::cache::NewsCache;
use super::fetch::Fetcher;
use super::model::{Article, Query};
use super::view::Page;
use crate::config::RuntimeConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Content,
    Error(String),
}

/// Identifies one issued request. Only the most recently issued ticket may
/// change what the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

pub struct Controller {
    fetcher: Fetcher,
    cache: NewsCache,
    page: Page,
    state: ViewState,
    issued: u64,
    last_query: Option<Query>,
    category_page_size: u32,
    search_page_size: u32,
}

impl Controller {
    pub fn new(cfg: &RuntimeConfig, fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            cache: NewsCache::new(cfg.cache_ttl),
            page: Page::default(),
            state: ViewState::Loading,
            issued: 0,
            last_query: None,
            category_page_size: cfg.category_page_size,
            search_page_size: cfg.search_page_size,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub async fn load_category(&mut self, id: &str) -> &ViewState {
        self.run(Query::Category(id.to_string())).await
    }

    /// Blank terms are ignored and leave the page as it is.
    pub async fn search(&mut self, term: &str) -> &ViewState {
        let term = term.trim();
        if term.is_empty() {
            return &self.state;
        }
        self.run(Query::Search(term.to_string())).await
    }

    /// Repeats the last request, if there was one.
    pub async fn retry(&mut self) -> &ViewState {
        match self.last_query.clone() {
            Some(q) => self.run(q).await,
            None => &self.state,
        }
    }

    async fn run(&mut self, query: Query) -> &ViewState {
        let ticket = self.begin(&query);
        let page_size = match query {
            Query::Category(_) => self.category_page_size,
            Query::Search(_) => self.search_page_size,
        };
        let articles = self.fetcher.fetch(&mut self.cache, &query, page_size).await;
        self.complete(ticket, &query, &articles, OffsetDateTime::now_utc());
        &self.state
    }

    /// Issues a new ticket and switches to the loading state.
    pub fn begin(&mut self, query: &Query) -> Ticket {
        self.issued += 1;
        self.state = ViewState::Loading;
        self.page.clear_for_loading();
        self.last_query = Some(query.clone());
        debug!(ticket = self.issued, key = query.cache_key(), "request issued");
        Ticket(self.issued)
    }

    /// Applies a finished request. Returns false, leaving the page alone,
    /// when a newer request has been issued since `ticket`.
    pub fn complete(&mut self, ticket: Ticket, query: &Query, articles: &[Article], now: OffsetDateTime) -> bool {
        if ticket.0 != self.issued {
            debug!(ticket = ticket.0, latest = self.issued, "dropping superseded results");
            return false;
        }
        if articles.is_empty() {
            let msg = match query {
                Query::Category(_) => "No news articles found for this category.",
                Query::Search(_) => "No results found for your search.",
            };
            info!(key = query.cache_key(), "no articles to show");
            self.state = ViewState::Error(msg.to_string());
            return true;
        }
        match query {
            Query::Category(_) => self.page.apply_headlines(articles, now),
            Query::Search(term) => self.page.apply_search(term, articles, now),
        }
        self.state = ViewState::Content;
        true
    }
}
