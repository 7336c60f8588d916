//! In-memory catalog for tests
//!
//! Serves canned bodies by URL and records every request. Each request
//! yields to the runtime once before answering so concurrent loads
//! interleave the way real network calls do.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{json, Value};

use super::HttpClient;
use crate::error::{FetchError, FetchResult};

pub const BASE: &str = "http://catalog.test/api/v2/";

#[derive(Default)]
pub struct FixtureClient {
    responses: RefCell<HashMap<String, FetchResult<String>>>,
    requests: RefCell<Vec<String>>,
}

impl FixtureClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_json(&self, url: &str, value: Value) {
        self.set_body(url, &value.to_string());
    }

    pub fn set_body(&self, url: &str, body: &str) {
        self.responses.borrow_mut().insert(url.to_string(), Ok(body.to_string()));
    }

    pub fn set_error(&self, url: &str, err: FetchError) {
        self.responses.borrow_mut().insert(url.to_string(), Err(err));
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpClient for FixtureClient {
    async fn get_text(&self, url: &str) -> FetchResult<String> {
        self.requests.borrow_mut().push(url.to_string());
        tokio::task::yield_now().await;
        self.responses
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Status { status: 404, url: url.to_string() }))
    }
}

pub fn detail_url(id: u32) -> String {
    format!("{}pokemon/{}/", BASE, id)
}

/// List page whose entries point at `url` references under [`BASE`]
pub fn page_json(names: &[&str], next: Option<&str>) -> Value {
    let results: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| json!({ "name": name, "url": format!("{}type/{}/", BASE, i + 1) }))
        .collect();
    json!({ "count": names.len(), "next": next, "previous": null, "results": results })
}

/// Item summary page referencing `detail_url(id)` for each `(id, name)`
pub fn summary_page_json(entries: &[(u32, &str)], next: Option<&str>) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(id, name)| json!({ "name": name, "url": detail_url(*id) }))
        .collect();
    json!({ "count": 1000, "next": next, "previous": null, "results": results })
}

pub fn detail_json(id: u32, name: &str, tags: &[&str]) -> Value {
    let types: Vec<Value> = tags
        .iter()
        .enumerate()
        .map(|(i, tag)| json!({ "slot": i + 1, "type": { "name": tag, "url": "" } }))
        .collect();
    json!({
        "id": id,
        "name": name,
        "sprites": { "front_default": format!("https://img.test/{}.png", id) },
        "types": types,
    })
}
