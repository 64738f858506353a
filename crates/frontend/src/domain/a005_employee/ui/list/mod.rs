//! Employees are read-only here: no add, edit or delete.

use crate::shared::components::list_page::{
    empty_message, page_signal, use_list_controller, Controller, ListPagination, LoadStatus,
};
use crate::shared::components::page_header::PageHeader;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a005_employee::aggregate::Employee;
use leptos::prelude::*;

fn or_dash(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or("-")
        .to_string()
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let controller: Controller<Employee> = use_list_controller();
    let state = controller.state().signal();
    let page = page_signal(&controller);
    let search_term = Signal::derive(move || state.with(|s| s.query.search_term.clone()));

    view! {
        <div class="page">
            <PageHeader title="Employees" subtitle="Read-only directory".to_string()>
                {()}
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=search_term
                    on_change=Callback::new(move |term: String| state.update(|s| s.set_search_term(term)))
                    placeholder="Search employees by name, email, job title or ID..."
                />
            </div>

            <LoadStatus controller=controller.clone() />

            <Show when=move || state.with(|s| !s.loading && s.error.is_none())>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"ID"</th>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Job Title"</th>
                                <th class="table__header-cell">"Email"</th>
                                <th class="table__header-cell">"Extension"</th>
                                <th class="table__header-cell">"Office"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let items = page.get().items;
                                if items.is_empty() {
                                    let message = empty_message(&search_term.get(), "employees");
                                    return view! {
                                        <tr><td class="table__cell list-empty" colspan="6">{message}</td></tr>
                                    }.into_any();
                                }
                                items.into_iter().map(|employee| view! {
                                    <tr class="table__row">
                                        <td class="table__cell table__cell--mono">{format!("#{}", employee.id)}</td>
                                        <td class="table__cell">{employee.full_name()}</td>
                                        <td class="table__cell">{or_dash(&employee.job_title)}</td>
                                        <td class="table__cell">{or_dash(&employee.email)}</td>
                                        <td class="table__cell">{or_dash(&employee.extension)}</td>
                                        <td class="table__cell">{or_dash(&employee.office_code)}</td>
                                    </tr>
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

#[cfg(test)]
mod tests {
    use super::or_dash;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(&Some("x101".into())), "x101");
        assert_eq!(or_dash(&Some("  ".into())), "-");
        assert_eq!(or_dash(&None), "-");
    }
}
