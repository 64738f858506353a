use super::view::CustomerDetails;
use crate::shared::components::list_page::Controller;
use crate::shared::date_utils::today;
use crate::shared::details_view_model::{DetailsLauncher, DetailsViewModel};
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a003_customer::form::CustomerForm;
use contracts::domain::a005_employee::aggregate::Employee;
use contracts::shared::form::FormState;
use leptos::prelude::*;

#[derive(Clone)]
pub struct CustomerDetailsViewModel {
    pub base: DetailsViewModel<CustomerForm>,
    pub employees: RwSignal<Vec<Employee>>,
}

impl CustomerDetailsViewModel {
    /// Sales rep choices as "First Last (#id)"
    pub fn sales_rep_options(&self) -> Signal<Vec<(String, String)>> {
        let employees = self.employees;
        Signal::derive(move || {
            employees.with(|list| {
                list.iter()
                    .map(|e| (e.id.to_string(), format!("{} (#{})", e.full_name(), e.id)))
                    .collect()
            })
        })
    }
}

pub fn open_customer_details(
    launcher: DetailsLauncher,
    controller: &Controller<Customer>,
    employees: RwSignal<Vec<Employee>>,
    customer: Option<&Customer>,
) {
    let state = match customer {
        Some(customer) => FormState::for_edit(customer),
        None => FormState::for_add(today()),
    };

    launcher.open(state, controller, move |base| {
        let vm = CustomerDetailsViewModel { base, employees };
        view! { <CustomerDetails vm=vm /> }.into_any()
    });
}
