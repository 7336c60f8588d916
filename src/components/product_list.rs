//! Product List Component
//!
//! Top-level widget: optional headline, category filter, the visible items
//! and the pagination footer.

use leptos::prelude::*;

use crate::catalog::DynCatalogApi;
use crate::components::{CategoryFilter, ItemCard, LoadMoreButton};
use crate::config::DEFAULT_PAGE_SIZE;
use crate::context::ListContext;
use crate::state::ListState;

#[component]
pub fn ProductList(
    api: DynCatalogApi,
    #[prop(optional, into)] headline: String,
    #[prop(default = DEFAULT_PAGE_SIZE)] page_size: u32,
) -> impl IntoView {
    let state = RwSignal::new(ListState::new(page_size));
    let ctx = ListContext::new(state, api);
    provide_context(ctx);

    // Categories and the first page load independently on mount
    Effect::new(move |_| {
        ctx.load_categories();
        ctx.load_more();
    });

    let visible = move || state.with(|s| s.visible().to_vec());
    let summary = move || state.with(|s| format!("{} of {} items", s.visible().len(), s.items().len()));
    let header = (!headline.is_empty()).then(|| {
        view! {
            <div class="header">
                <h1>{headline}</h1>
            </div>
        }
    });

    view! {
        <div class="product-list">
            {header}

            <CategoryFilter />

            <div class="item-grid">
                <For
                    each=visible
                    key=|item| item.id
                    children=move |item| view! { <ItemCard item=item /> }
                />
            </div>

            <p class="item-count">{summary}</p>

            <LoadMoreButton />
        </div>
    }
}
