//! Item Card Component

use leptos::prelude::*;

use crate::models::Item;

/// A single catalog entry with its image and category chips
#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let Item { id, name, image, tags } = item;

    let picture = (!image.is_empty()).then(|| {
        let alt = name.clone();
        view! { <img class="item-image" src=image alt=alt loading="lazy" /> }
    });

    view! {
        <article class="item-card">
            {picture}
            <span class="item-id">{format!("#{:03}", id)}</span>
            <h2 class="item-name">{name}</h2>
            <div class="item-tags">
                {tags
                    .into_iter()
                    .map(|tag| {
                        let class = format!("tag-chip tag-{}", tag);
                        view! { <span class=class>{tag}</span> }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
