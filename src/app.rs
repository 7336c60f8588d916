//! Product List App
//!
//! Wires host-page configuration and the production HTTP client into the
//! widget.

use std::rc::Rc;

use leptos::prelude::*;
use tracing::info;

use crate::catalog::{CatalogApi, HttpClient, ReqwestClient};
use crate::components::ProductList;
use crate::config::WidgetConfig;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let client: Rc<dyn HttpClient> = Rc::new(ReqwestClient::new());
    let api = CatalogApi::new(client, &config.api_base);
    info!(base = api.base_url(), page_size = config.page_size(), "mounting product list");

    view! {
        <ProductList
            api=api
            headline=config.headline.clone()
            page_size=config.page_size()
        />
    }
}
