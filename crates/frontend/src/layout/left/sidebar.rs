//! Sidebar with one entry per section; collapsed it shows icons only.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::enums::section::Section;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="sidebar">
            <ul class="sidebar__menu">
                {Section::all()
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <button
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || ctx.active() == section
                                    title=section.label()
                                    on:click=move |_| ctx.select_section(section)
                                >
                                    <span class="sidebar__icon">{icon(section.icon())}</span>
                                    <Show when=move || ctx.sidebar_open()>
                                        <span class="sidebar__label">{section.label()}</span>
                                    </Show>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
