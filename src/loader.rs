//! Catalog Loaders
//!
//! Async glue between [`CatalogApi`] and a [`StateCell`]. Failures are
//! logged and swallowed here; callers only get an outcome to inspect.

use futures::future::try_join_all;
use tracing::{debug, error, info};

use crate::catalog::{CatalogApi, HttpClient};
use crate::error::FetchResult;
use crate::models::Item;
use crate::state::{ListState, LoadBlocked, PageRequest, StateCell};

/// What a call to [`load_next_page`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { added: usize },
    /// Another load was already running
    InFlight,
    /// Upstream reported no further pages
    Exhausted,
    Failed,
}

/// Fetch the category list into `state`.
///
/// Returns whether the tags were replaced; on failure the previous tags stay.
pub async fn load_categories<C, S>(api: &CatalogApi<C>, state: &S) -> bool
where
    C: HttpClient,
    S: StateCell,
{
    match api.fetch_categories().await {
        Ok(categories) => {
            let names = categories.into_iter().map(|c| c.name);
            let Some(count) = state.write_state(|s| {
                s.set_available_tags(names);
                s.available_tags().len()
            }) else {
                debug!("list state gone, categories dropped");
                return false;
            };
            info!(count, "loaded categories");
            true
        }
        Err(e) => {
            error!(kind = e.kind(), error = %e, "failed to load categories");
            false
        }
    }
}

/// Clears the loading flag however the load ends, including being dropped
struct LoadingGuard<'a, S: StateCell> {
    state: &'a S,
}

impl<S: StateCell> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.state.write_state(ListState::finish_load);
    }
}

/// Resolve one page of summaries into items; all details or nothing
async fn fetch_page_items<C: HttpClient>(
    api: &CatalogApi<C>,
    request: PageRequest,
) -> FetchResult<(Vec<Item>, bool)> {
    let page = api.fetch_page(request.offset, request.limit).await?;
    let has_more = page.has_next();
    let items = try_join_all(page.results.iter().map(|summary| api.fetch_detail(summary))).await?;
    Ok((items, has_more))
}

/// Load the next page into `state` unless a load is running or the listing is done
pub async fn load_next_page<C, S>(api: &CatalogApi<C>, state: &S) -> LoadOutcome
where
    C: HttpClient,
    S: StateCell,
{
    // A state that is gone takes no more pages
    let begin = state
        .write_state(ListState::begin_load)
        .unwrap_or(Err(LoadBlocked::Exhausted));
    let request = match begin {
        Ok(request) => request,
        Err(LoadBlocked::InFlight) => {
            debug!("page load already in flight");
            return LoadOutcome::InFlight;
        }
        Err(LoadBlocked::Exhausted) => {
            debug!("no more pages");
            return LoadOutcome::Exhausted;
        }
    };
    let _guard = LoadingGuard { state };

    match fetch_page_items(api, request).await {
        Ok((items, has_more)) => {
            let added = state.write_state(|s| s.commit_page(items, has_more)).unwrap_or(0);
            info!(offset = request.offset, added, has_more, "loaded page");
            LoadOutcome::Loaded { added }
        }
        Err(e) => {
            error!(offset = request.offset, kind = e.kind(), error = %e, "failed to load page");
            LoadOutcome::Failed
        }
    }
}
