//! Load More Button Component
//!
//! Pagination footer. Shows "Load more" while upstream has further pages,
//! otherwise a control to start the listing over.

use leptos::prelude::*;

use crate::context::ListContext;

#[component]
pub fn LoadMoreButton() -> impl IntoView {
    let ctx = expect_context::<ListContext>();

    let has_more = move || ctx.state.with(|s| s.has_more());
    let loading = move || ctx.state.with(|s| s.is_loading());

    view! {
        <div class="list-footer">
            <Show
                when=has_more
                fallback=move || view! {
                    <button
                        class="start-over-btn"
                        disabled=loading
                        on:click=move |_| ctx.start_over()
                    >
                        "Start over"
                    </button>
                }
            >
                <button
                    class="load-more-btn"
                    disabled=loading
                    on:click=move |_| ctx.load_more()
                >
                    {move || if loading() { "Loading..." } else { "Load more" }}
                </button>
            </Show>
        </div>
    }
}
