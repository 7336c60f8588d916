//! Catalog Endpoints
//!
//! URL building and JSON decoding for the three read endpoints:
//! categories (`type`), item summaries (`pokemon?offset&limit`) and
//! item details.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::HttpClient;
use crate::config::normalize_base;
use crate::error::FetchResult;
use crate::models::{Item, ItemDetail, NamedResource, ResourcePage};

/// Characters escaped when a name is used as a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'<')
    .add(b'>');

/// Upper bound on followed `next` links when listing categories
const MAX_CATEGORY_PAGES: usize = 16;

pub struct CatalogApi<C> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> CatalogApi<C> {
    pub fn new(client: C, base_url: &str) -> Self {
        Self {
            client,
            base_url: normalize_base(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn categories_url(&self) -> String {
        format!("{}type", self.base_url)
    }

    pub fn page_url(&self, offset: u32, limit: u32) -> String {
        format!("{}pokemon?offset={}&limit={}", self.base_url, offset, limit)
    }

    /// Detail address for a summary: its own reference, or one built from the name
    pub fn detail_url(&self, summary: &NamedResource) -> String {
        if summary.url.is_empty() {
            format!(
                "{}pokemon/{}",
                self.base_url,
                utf8_percent_encode(&summary.name, PATH_SEGMENT)
            )
        } else {
            summary.url.clone()
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        debug!(url, "GET");
        let body = self.client.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Every category entry, following `next` cursors to the end
    pub async fn fetch_categories(&self) -> FetchResult<Vec<NamedResource>> {
        let mut url = self.categories_url();
        let mut results = Vec::new();

        for _ in 0..MAX_CATEGORY_PAGES {
            let page: ResourcePage = self.get_json(&url).await?;
            results.extend(page.results);
            match page.next {
                Some(next) if next != url => url = next,
                _ => return Ok(results),
            }
        }

        warn!(pages = MAX_CATEGORY_PAGES, "category listing truncated");
        Ok(results)
    }

    pub async fn fetch_page(&self, offset: u32, limit: u32) -> FetchResult<ResourcePage> {
        self.get_json(&self.page_url(offset, limit)).await
    }

    pub async fn fetch_detail(&self, summary: &NamedResource) -> FetchResult<Item> {
        let detail: ItemDetail = self.get_json(&self.detail_url(summary)).await?;
        Ok(detail.into())
    }
}
