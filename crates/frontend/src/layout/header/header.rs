use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button
                    class="button button--ghost"
                    aria-label="Toggle sidebar"
                    on:click=move |_| ctx.toggle_sidebar()
                >
                    {icon("menu")}
                </button>
                <span class="header__title">"Roy's CMS"</span>
            </div>
            <div class="header__actions">
                <span class="header__section">{move || ctx.active().label()}</span>
            </div>
        </header>
    }
}
