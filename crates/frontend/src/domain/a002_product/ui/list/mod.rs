use crate::domain::a002_product::ui::details::open_product_details;
use crate::shared::components::list_page::{
    delete_item, empty_message, page_signal, use_list_controller, use_lookup, Controller,
    ListPagination, LoadStatus, RowActions,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::details_view_model::DetailsLauncher;
use crate::shared::dialogs::use_notifications;
use crate::shared::icons::icon;
use crate::shared::list_utils::{FilterSelect, SearchInput};
use crate::shared::number_format::{format_count, format_money};
use contracts::domain::a001_product_line::aggregate::ProductLine;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

const LINE_FILTER: &str = "productLine";

#[component]
pub fn ProductList() -> impl IntoView {
    let controller: Controller<Product> = use_list_controller();
    let notifications = use_notifications();
    let launcher = DetailsLauncher::new();
    let product_lines = use_lookup::<ProductLine>();
    let state = controller.state().signal();
    let page = page_signal(&controller);

    let search_term = Signal::derive(move || state.with(|s| s.query.search_term.clone()));
    let line_filter = Signal::derive(move || state.with(|s| s.query.filter(LINE_FILTER).to_string()));
    let line_options = Signal::derive(move || state.with(|s| s.filter_options(LINE_FILTER)));

    let on_add = {
        let controller = controller.clone();
        move |_| open_product_details(launcher, &controller, product_lines, None)
    };
    let on_edit = {
        let controller = controller.clone();
        Callback::new(move |id: EntityId| {
            if let Some(product) = state.with_untracked(|s| s.find(id).cloned()) {
                open_product_details(launcher, &controller, product_lines, Some(&product));
            }
        })
    };
    let on_delete = {
        let controller = controller.clone();
        Callback::new(move |id: EntityId| delete_item(&controller, notifications, id))
    };

    view! {
        <div class="page">
            <PageHeader title="Products">
                <Button appearance=ButtonAppearance::Primary on_click=on_add>
                    {icon("plus")}
                    " Add Product"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=search_term
                    on_change=Callback::new(move |term: String| state.update(|s| s.set_search_term(term)))
                    placeholder="Search products by code, name, line or vendor..."
                />
                <FilterSelect
                    all_label="All Product Lines"
                    value=line_filter
                    options=line_options
                    on_change=Callback::new(move |line: String| state.update(|s| s.set_filter(LINE_FILTER, line)))
                />
            </div>

            <LoadStatus controller=controller.clone() />

            <Show when=move || state.with(|s| !s.loading && s.error.is_none())>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Code"</th>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Line"</th>
                                <th class="table__header-cell">"Vendor"</th>
                                <th class="table__header-cell">"Scale"</th>
                                <th class="table__header-cell">"Stock"</th>
                                <th class="table__header-cell">"Buy Price"</th>
                                <th class="table__header-cell">"MSRP"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let items = page.get().items;
                                if items.is_empty() {
                                    let message = if state.with(|s| s.items.is_empty()) {
                                        "No products available. Add some products to get started!".to_string()
                                    } else {
                                        empty_message(&search_term.get(), "products")
                                    };
                                    return view! {
                                        <tr><td class="table__cell list-empty" colspan="9">{message}</td></tr>
                                    }.into_any();
                                }
                                items.into_iter().map(|product| {
                                    let id = product.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--mono">{product.product_code.clone()}</td>
                                            <td class="table__cell">{product.product_name.clone()}</td>
                                            <td class="table__cell">{product.product_line.clone()}</td>
                                            <td class="table__cell">{product.product_vendor.clone()}</td>
                                            <td class="table__cell">{product.product_scale.clone()}</td>
                                            <td class="table__cell">
                                                <span class=format!("stock-badge {}", product.stock_class())>
                                                    {format_count(product.quantity_in_stock.into())}
                                                </span>
                                            </td>
                                            <td class="table__cell table__cell--number">{format_money(product.buy_price)}</td>
                                            <td class="table__cell table__cell--number">{format_money(product.msrp)}</td>
                                            <RowActions id=id on_edit=on_edit on_delete=on_delete />
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>

            <ListPagination controller=controller.clone() />
        </div>
    }
}
