//! Search box and select filter shared by the list views.

use crate::shared::icons::icon;
use leptos::prelude::*;

/// Search box with a clear button. Every keystroke is applied immediately.
#[component]
pub fn SearchInput(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                placeholder=placeholder
                class:search-input--active=move || !value.get().trim().is_empty()
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    on:click=move |_| on_change.run(String::new())
                    title="Clear"
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Select filter over the distinct values of one field; "" means all
#[component]
pub fn FilterSelect(
    /// Label of the "all values" option, e.g. "All Countries"
    all_label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    options: Signal<Vec<String>>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="filter-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{all_label}</option>
            {move || {
                let selected = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let is_selected = option == selected;
                        view! { <option value=option.clone() selected=is_selected>{option.clone()}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}
