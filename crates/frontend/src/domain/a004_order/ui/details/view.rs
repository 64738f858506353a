use super::view_model::OrderDetailsViewModel;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::form_field::{FieldKind, FormField, SelectField};
use leptos::prelude::*;

#[component]
pub fn OrderDetails(vm: OrderDetailsViewModel) -> impl IntoView {
    let base = vm.base.clone();
    let save = {
        let base = base.clone();
        Callback::new(move |_| base.save_command())
    };
    let cancel = {
        let base = base.clone();
        Callback::new(move |_| base.cancel_command())
    };

    view! {
        <DetailsForm
            title=base.title()
            submit_label=base.submit_label()
            saving=base.saving
            on_save=save
            on_cancel=cancel
        >
            <SelectField
                label="Customer"
                name="customernumber"
                required=true
                placeholder="Select a customer..."
                value=base.value(|f| f.customernumber.clone())
                error=base.error("customernumber")
                options=vm.customer_options()
                on_change=base.setter("customernumber", |f, v| f.customernumber = v)
            />
            <div class="form-row">
                <FormField
                    label="Order Date"
                    name="orderdate"
                    kind=FieldKind::Date
                    required=true
                    value=base.value(|f| f.orderdate.clone())
                    error=base.error("orderdate")
                    on_input=base.setter("orderdate", |f, v| f.orderdate = v)
                />
                <FormField
                    label="Required Date"
                    name="requireddate"
                    kind=FieldKind::Date
                    required=true
                    value=base.value(|f| f.requireddate.clone())
                    error=base.error("requireddate")
                    on_input=base.setter("requireddate", |f, v| f.requireddate = v)
                />
                <FormField
                    label="Shipped Date"
                    name="shippeddate"
                    kind=FieldKind::Date
                    value=base.value(|f| f.shippeddate.clone())
                    error=base.error("shippeddate")
                    on_input=base.setter("shippeddate", |f, v| f.shippeddate = v)
                />
            </div>
            <SelectField
                label="Status"
                name="status"
                required=true
                value=base.value(|f| f.status.clone())
                error=base.error("status")
                options=vm.status_options()
                on_change=base.setter("status", |f, v| f.status = v)
            />
            <FormField
                label="Comments"
                name="comments"
                kind=FieldKind::TextArea
                value=base.value(|f| f.comments.clone())
                error=base.error("comments")
                on_input=base.setter("comments", |f, v| f.comments = v)
            />
        </DetailsForm>
    }
}
