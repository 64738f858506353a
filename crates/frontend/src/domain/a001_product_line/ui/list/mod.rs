//! Home section: product lines as cards.

use crate::domain::a001_product_line::ui::details::open_product_line_details;
use crate::shared::components::list_page::{
    delete_item, empty_message, page_signal, use_list_controller, Controller, ListPagination,
    LoadStatus,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::details_view_model::DetailsLauncher;
use crate::shared::dialogs::use_notifications;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_product_line::aggregate::ProductLine;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
fn ProductLineCard(
    line: ProductLine,
    on_edit: Callback<EntityId>,
    on_delete: Callback<EntityId>,
) -> impl IntoView {
    let id = line.id;

    view! {
        <div class="product-line-card">
            <div class="product-line-card__banner">
                <span class="product-line-card__icon">{line.icon()}</span>
            </div>
            <div class="product-line-card__body">
                <h3 class="product-line-card__title">{line.product_line.clone()}</h3>
                <p class="product-line-card__text">{line.text_description.clone()}</p>
            </div>
            <div class="product-line-card__actions">
                <button class="button button--ghost" title="Edit" on:click=move |_| on_edit.run(id)>
                    {icon("edit")}
                </button>
                <button class="button button--ghost button--danger" title="Delete" on:click=move |_| on_delete.run(id)>
                    {icon("delete")}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ProductLineList() -> impl IntoView {
    let controller: Controller<ProductLine> = use_list_controller();
    let notifications = use_notifications();
    let launcher = DetailsLauncher::new();
    let state = controller.state().signal();
    let page = page_signal(&controller);

    let search_term = Signal::derive(move || state.with(|s| s.query.search_term.clone()));
    let on_search = Callback::new(move |term: String| state.update(|s| s.set_search_term(term)));

    let on_add = {
        let controller = controller.clone();
        move |_| open_product_line_details(launcher, &controller, None)
    };
    let on_edit = {
        let controller = controller.clone();
        Callback::new(move |id: EntityId| {
            if let Some(line) = state.with_untracked(|s| s.find(id).cloned()) {
                open_product_line_details(launcher, &controller, Some(&line));
            }
        })
    };
    let on_delete = {
        let controller = controller.clone();
        Callback::new(move |id: EntityId| delete_item(&controller, notifications, id))
    };

    let is_idle = move || state.with(|s| !s.loading && s.error.is_none());

    view! {
        <div class="page">
            <PageHeader title="ClassicModels CMS" subtitle="Manage your classic model inventory".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=on_add>
                    {icon("plus")}
                    " Add Product Line"
                </Button>
            </PageHeader>

            <SearchInput value=search_term on_change=on_search placeholder="Search product lines..." />

            <LoadStatus controller=controller.clone() />

            <Show when=is_idle>
                <div class="product-line-grid">
                    <For
                        each=move || page.get().items
                        key=|line| (line.id, line.product_line.clone(), line.text_description.clone())
                        children=move |line| view! {
                            <ProductLineCard line=line on_edit=on_edit on_delete=on_delete />
                        }
                    />
                </div>
                {move || {
                    let empty_page = page.with(|p| p.items.is_empty());
                    let no_items = state.with(|s| s.items.is_empty());
                    let term = search_term.get();
                    if no_items {
                        Some(view! {
                            <p class="list-empty">"No product lines available. Add some product lines to get started!"</p>
                        }.into_any())
                    } else if empty_page {
                        Some(view! { <p class="list-empty">{empty_message(&term, "product lines")}</p> }.into_any())
                    } else {
                        None
                    }
                }}
            </Show>

            <ListPagination controller=controller.clone() />
        </div>
    }
}
