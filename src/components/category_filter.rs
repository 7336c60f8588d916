//! Category Filter Component
//!
//! One checkbox per selectable category. At most two may be checked; a
//! third click is rejected and the checkbox flips back.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::ListContext;
use crate::state::MAX_SELECTED_TAGS;

#[component]
fn CategoryCheckbox(name: String) -> impl IntoView {
    let ctx = expect_context::<ListContext>();

    let checked_name = name.clone();
    let is_selected = move || ctx.state.with(|s| s.selection().contains(&checked_name));

    let value = name.clone();
    let toggle_name = name.clone();
    let on_change = move |ev: web_sys::Event| {
        let selected = ctx.toggle_tag(&toggle_name);
        // The browser already flipped the box; force it to match the state
        if let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            input.set_checked(selected);
        }
    };

    view! {
        <label class="category-option">
            <input
                type="checkbox"
                value=value
                prop:checked=is_selected
                on:change=on_change
            />
            <span class="category-name">{name}</span>
        </label>
    }
}

/// Category checkboxes
#[component]
pub fn CategoryFilter() -> impl IntoView {
    let ctx = expect_context::<ListContext>();

    let tags = move || ctx.state.with(|s| s.available_tags().to_vec());
    let no_tags = move || ctx.state.with(|s| s.available_tags().is_empty());
    let selected_count = move || ctx.state.with(|s| s.selection().len());

    view! {
        <fieldset class="category-filter">
            <legend>{move || format!("Types ({}/{})", selected_count(), MAX_SELECTED_TAGS)}</legend>

            <For
                each=tags
                key=|name| name.clone()
                children=move |name| view! { <CategoryCheckbox name=name /> }
            />

            <Show when=no_tags>
                <div class="no-tags-message">"No types available"</div>
            </Show>
        </fieldset>
    }
}
