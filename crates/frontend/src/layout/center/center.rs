use super::placeholder::Placeholder;
use crate::domain::a001_product_line::ui::list::ProductLineList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a005_employee::ui::list::EmployeeList;
use crate::layout::global_context::use_global_context;
use contracts::enums::section::Section;
use leptos::prelude::*;

/// Mounts the view of the active section.
///
/// Switching sections drops the previous view; the new one fetches again.
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_global_context();
    // sidebar toggles must not remount the view
    let active = Memo::new(move |_| ctx.active());

    view! {
        <div data-zone="center" class="center">
            {move || match active.get() {
                Section::Home => view! { <ProductLineList /> }.into_any(),
                Section::Products => view! { <ProductList /> }.into_any(),
                Section::Customers => view! { <CustomerList /> }.into_any(),
                Section::Orders => view! { <OrderList /> }.into_any(),
                Section::Employees => view! { <EmployeeList /> }.into_any(),
                section @ (Section::Payments | Section::Offices) => {
                    view! { <Placeholder section=section /> }.into_any()
                }
            }}
        </div>
    }
}
