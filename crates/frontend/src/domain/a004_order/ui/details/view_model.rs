use super::view::OrderDetails;
use crate::shared::components::list_page::Controller;
use crate::shared::date_utils::today;
use crate::shared::details_view_model::{DetailsLauncher, DetailsViewModel};
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a004_order::aggregate::Order;
use contracts::domain::a004_order::form::OrderForm;
use contracts::enums::order_status::OrderStatus;
use contracts::shared::form::FormState;
use leptos::prelude::*;

#[derive(Clone)]
pub struct OrderDetailsViewModel {
    pub base: DetailsViewModel<OrderForm>,
    pub customers: RwSignal<Vec<Customer>>,
}

impl OrderDetailsViewModel {
    /// "Company - First Last" per customer
    pub fn customer_options(&self) -> Signal<Vec<(String, String)>> {
        let customers = self.customers;
        Signal::derive(move || {
            customers.with(|list| {
                list.iter()
                    .map(|c| (c.id.to_string(), format!("{} - {}", c.customer_name, c.contact_name())))
                    .collect()
            })
        })
    }

    pub fn status_options(&self) -> Signal<Vec<(String, String)>> {
        Signal::derive(|| {
            OrderStatus::all()
                .into_iter()
                .map(|s| (s.label().to_string(), s.label().to_string()))
                .collect()
        })
    }
}

/// Add forms start with today's order date
pub fn open_order_details(
    launcher: DetailsLauncher,
    controller: &Controller<Order>,
    customers: RwSignal<Vec<Customer>>,
    order: Option<&Order>,
) {
    let state = match order {
        Some(order) => FormState::for_edit(order),
        None => FormState::for_add(today()),
    };

    launcher.open(state, controller, move |base| {
        let vm = OrderDetailsViewModel { base, customers };
        view! { <OrderDetails vm=vm /> }.into_any()
    });
}
