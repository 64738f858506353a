use crate::domain::a004_order::ui::details::open_order_details;
use crate::shared::components::list_page::{
    delete_item, empty_message, page_signal, use_list_controller, use_lookup, Controller,
    ListPagination, LoadStatus, RowActions,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::{format_date, format_optional_date};
use crate::shared::details_view_model::DetailsLauncher;
use crate::shared::dialogs::use_notifications;
use crate::shared::icons::icon;
use crate::shared::list_utils::{FilterSelect, SearchInput};
use contracts::domain::a003_customer::aggregate::{customer_name, Customer};
use contracts::domain::a004_order::aggregate::Order;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

const STATUS_FILTER: &str = "status";

#[component]
pub fn OrderList() -> impl IntoView {
    let controller: Controller<Order> = use_list_controller();
    let notifications = use_notifications();
    let launcher = DetailsLauncher::new();
    let customers = use_lookup::<Customer>();
    let state = controller.state().signal();
    let page = page_signal(&controller);

    let search_term = Signal::derive(move || state.with(|s| s.query.search_term.clone()));
    let status_filter =
        Signal::derive(move || state.with(|s| s.query.filter(STATUS_FILTER).to_string()));
    let statuses = Signal::derive(move || state.with(|s| s.filter_options(STATUS_FILTER)));

    let on_add = {
        let controller = controller.clone();
        move |_| open_order_details(launcher, &controller, customers, None)
    };
    let on_edit = {
        let controller = controller.clone();
        Callback::new(move |id: EntityId| {
            if let Some(order) = state.with_untracked(|s| s.find(id).cloned()) {
                open_order_details(launcher, &controller, customers, Some(&order));
            }
        })
    };
    let on_delete = {
        let controller = controller.clone();
        Callback::new(move |id: EntityId| delete_item(&controller, notifications, id))
    };

    view! {
        <div class="page">
            <PageHeader title="Orders">
                <Button appearance=ButtonAppearance::Primary on_click=on_add>
                    {icon("plus")}
                    " Add Order"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=search_term
                    on_change=Callback::new(move |term: String| state.update(|s| s.set_search_term(term)))
                    placeholder="Search orders by ID, status, comments or customer number..."
                />
                <FilterSelect
                    all_label="All Statuses"
                    value=status_filter
                    options=statuses
                    on_change=Callback::new(move |status: String| state.update(|s| s.set_filter(STATUS_FILTER, status)))
                />
            </div>

            <LoadStatus controller=controller.clone() />

            <Show when=move || state.with(|s| !s.loading && s.error.is_none())>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Order ID"</th>
                                <th class="table__header-cell">"Customer"</th>
                                <th class="table__header-cell">"Order Date"</th>
                                <th class="table__header-cell">"Required"</th>
                                <th class="table__header-cell">"Shipped"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Comments"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let items = page.get().items;
                                if items.is_empty() {
                                    let message = if state.with(|s| s.items.is_empty()) {
                                        "No orders available. Add some orders to get started!".to_string()
                                    } else {
                                        empty_message(&search_term.get(), "orders")
                                    };
                                    return view! {
                                        <tr><td class="table__cell list-empty" colspan="8">{message}</td></tr>
                                    }.into_any();
                                }
                                let known = customers.get();
                                items.into_iter().map(|order| {
                                    let id = order.id;
                                    let customer = customer_name(&known, order.customernumber);
                                    let comments = order.comments.clone().unwrap_or_default();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--mono">{format!("#{}", id)}</td>
                                            <td class="table__cell table__cell--truncate" title=customer.clone()>{customer.clone()}</td>
                                            <td class="table__cell">{format_date(order.orderdate)}</td>
                                            <td class="table__cell">{format_date(order.requireddate)}</td>
                                            <td class="table__cell">{format_optional_date(order.shippeddate)}</td>
                                            <td class="table__cell">
                                                <span class=format!("status-badge {}", order.status.badge_class())>
                                                    {order.status.label()}
                                                </span>
                                            </td>
                                            <td class="table__cell table__cell--truncate" title=comments.clone()>
                                                {if comments.is_empty() { "-".to_string() } else { comments.clone() }}
                                            </td>
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
