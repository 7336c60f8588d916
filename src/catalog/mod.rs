//! Catalog Service Bindings
//!
//! HTTP access to the upstream catalog. The transport is an injected
//! [`HttpClient`] so the widget can run against fixtures in tests.

mod api;
mod client;
#[cfg(test)]
pub mod fixture;

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::FetchResult;

pub use api::CatalogApi;
pub use client::ReqwestClient;

/// Minimal GET-only transport
#[async_trait(?Send)]
pub trait HttpClient {
    /// Fetch `url` and return the body of a successful response
    async fn get_text(&self, url: &str) -> FetchResult<String>;
}

#[async_trait(?Send)]
impl<T: HttpClient + ?Sized> HttpClient for Rc<T> {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        (**self).get_text(url).await
    }
}

/// Catalog API over a type-erased client, as handed to the component
pub type DynCatalogApi = CatalogApi<Rc<dyn HttpClient>>;
