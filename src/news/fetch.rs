use super::cache::NewsCache;
use super::error::FetchError;
use super::fallback;
use super::model::{Article, ArticlesResponse, Query};
use crate::config::RuntimeConfig;
use anyhow::Result;
use futures_util::StreamExt;
use reqwest::Client;
use time::OffsetDateTime;
use tracing::{debug, info, warn};
use url::Url;

/// Talks to the headlines/search API and keeps the cache filled.
pub struct Fetcher {
    client: Client,
    api_base: String,
    api_key: String,
    country: String,
}

impl Fetcher {
    pub fn new(cfg: &RuntimeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("news-desk/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .connect_timeout(cfg.connect_timeout)
            .timeout(cfg.timeout)
            .build()?;
        if cfg.api_key.is_empty() {
            warn!("no API key configured; requests will likely be rejected");
        }
        Ok(Self {
            client,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            country: cfg.country.clone(),
        })
    }

    /// Returns articles for `query`: from the cache when fresh, otherwise
    /// from the network. A failed request yields the built-in fallback
    /// articles for the query's key, which are never cached.
    pub async fn fetch(&self, cache: &mut NewsCache, query: &Query, page_size: u32) -> Vec<Article> {
        let key = query.cache_key();
        if let Some(hit) = cache.get(key) {
            debug!(key, count = hit.len(), "serving cached articles");
            return hit.to_vec();
        }

        match self.request(query, page_size).await {
            Ok(resp) => {
                let articles = resp.articles;
                info!(
                    key,
                    count = articles.len(),
                    total = resp.total_results,
                    status = resp.status.as_deref(),
                    "fetched articles"
                );
                cache.put(key, articles.clone());
                debug!(keys = cache.len(), "cache updated");
                articles
            }
            Err(err) => {
                warn!(key, kind = err.kind(), error = %err, "news request failed; serving fallback articles");
                fallback::articles_for(key, OffsetDateTime::now_utc())
            }
        }
    }

    pub fn request_url(&self, query: &Query, page_size: u32) -> Result<Url, FetchError> {
        let page_size = page_size.to_string();
        let url = match query {
            Query::Category(id) => Url::parse_with_params(
                &format!("{}/top-headlines", self.api_base),
                &[
                    ("country", self.country.as_str()),
                    ("category", id.as_str()),
                    ("pageSize", page_size.as_str()),
                    ("apiKey", self.api_key.as_str()),
                ],
            )?,
            Query::Search(term) => Url::parse_with_params(
                &format!("{}/everything", self.api_base),
                &[
                    ("q", term.as_str()),
                    ("pageSize", page_size.as_str()),
                    ("sortBy", "publishedAt"),
                    ("apiKey", self.api_key.as_str()),
                ],
            )?,
        };
        Ok(url)
    }

    async fn request(&self, query: &Query, page_size: u32) -> Result<ArticlesResponse, FetchError> {
        let url = self.request_url(query, page_size)?;
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Api { status });
        }

        // Stream with a max size limit
        let mut stream = resp.bytes_stream();
        let mut buf: Vec<u8> = Vec::new();
        let limit = max_body_bytes();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if buf.len() + chunk.len() > limit {
                return Err(FetchError::BodyTooLarge { limit });
            }
            buf.extend_from_slice(&chunk);
        }

        Ok(serde_json::from_slice(&buf)?)
    }
}

fn max_body_bytes() -> usize {
    // 5 MB cap
    5 * 1024 * 1024
}
