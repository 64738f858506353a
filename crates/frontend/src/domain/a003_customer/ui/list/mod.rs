use crate::domain::a003_customer::ui::details::open_customer_details;
use crate::shared::components::list_page::{
    delete_item, empty_message, page_signal, use_list_controller, use_lookup, Controller,
    ListPagination, LoadStatus, RowActions,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::details_view_model::DetailsLauncher;
use crate::shared::dialogs::use_notifications;
use crate::shared::icons::icon;
use crate::shared::list_utils::{FilterSelect, SearchInput};
use crate::shared::number_format::format_money;
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a005_employee::aggregate::{employee_name, Employee};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

const COUNTRY_FILTER: &str = "country";

/// Sales rep cell: the employee's name when loaded, "#id" otherwise
fn sales_rep_label(employees: &[Employee], id: Option<EntityId>) -> String {
    match (employee_name(employees, id), id) {
        (Some(name), _) => name,
        (None, Some(id)) => format!("#{}", id),
        (None, None) => "None".to_string(),
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let controller: Controller<Customer> = use_list_controller();
    let notifications = use_notifications();
    let launcher = DetailsLauncher::new();
    let employees = use_lookup::<Employee>();
    let state = controller.state().signal();
    let page = page_signal(&controller);

    let search_term = Signal::derive(move || state.with(|s| s.query.search_term.clone()));
    let country_filter =
        Signal::derive(move || state.with(|s| s.query.filter(COUNTRY_FILTER).to_string()));
    let countries = Signal::derive(move || state.with(|s| s.filter_options(COUNTRY_FILTER)));

    let on_add = {
        let controller = controller.clone();
        move |_| open_customer_details(launcher, &controller, employees, None)
    };
    let on_edit = {
        let controller = controller.clone();
        Callback::new(move |id: EntityId| {
            if let Some(customer) = state.with_untracked(|s| s.find(id).cloned()) {
                open_customer_details(launcher, &controller, employees, Some(&customer));
            }
        })
    };
    let on_delete = {
        let controller = controller.clone();
        Callback::new(move |id: EntityId| delete_item(&controller, notifications, id))
    };

    view! {
        <div class="page">
            <PageHeader title="Customers">
                <Button appearance=ButtonAppearance::Primary on_click=on_add>
                    {icon("plus")}
                    " Add Customer"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=search_term
                    on_change=Callback::new(move |term: String| state.update(|s| s.set_search_term(term)))
                    placeholder="Search customers by name, contact, city, country, or ID..."
                />
                <FilterSelect
                    all_label="All Countries"
                    value=country_filter
                    options=countries
                    on_change=Callback::new(move |country: String| state.update(|s| s.set_filter(COUNTRY_FILTER, country)))
                />
            </div>

            <LoadStatus controller=controller.clone() />

            <Show when=move || state.with(|s| !s.loading && s.error.is_none())>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"ID"</th>
                                <th class="table__header-cell">"Company"</th>
                                <th class="table__header-cell">"Contact"</th>
                                <th class="table__header-cell">"Phone"</th>
                                <th class="table__header-cell">"City"</th>
                                <th class="table__header-cell">"Country"</th>
                                <th class="table__header-cell">"Sales Rep"</th>
                                <th class="table__header-cell">"Credit Limit"</th>
                                <th class="table__header-cell">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let items = page.get().items;
                                if items.is_empty() {
                                    let message = if state.with(|s| s.items.is_empty()) {
                                        "No customers available. Add some customers to get started!".to_string()
                                    } else {
                                        empty_message(&search_term.get(), "customers")
                                    };
                                    return view! {
                                        <tr><td class="table__cell list-empty" colspan="9">{message}</td></tr>
                                    }.into_any();
                                }
                                let reps = employees.get();
                                items.into_iter().map(|customer| {
                                    let id = customer.id;
                                    let credit = match customer.credit_limit {
                                        Some(limit) => view! { <span class="money">{format_money(limit)}</span> }.into_any(),
                                        None => view! { <span class="muted">"No limit"</span> }.into_any(),
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--mono">{format!("#{}", id)}</td>
                                            <td class="table__cell">{customer.customer_name.clone()}</td>
                                            <td class="table__cell">{customer.contact_name()}</td>
                                            <td class="table__cell">{customer.phone.clone()}</td>
                                            <td class="table__cell">{customer.city.clone()}</td>
                                            <td class="table__cell">{customer.country.clone()}</td>
                                            <td class="table__cell">{sales_rep_label(&reps, customer.sales_rep_employee_number)}</td>
                                            <td class="table__cell table__cell--number">{credit}</td>
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
