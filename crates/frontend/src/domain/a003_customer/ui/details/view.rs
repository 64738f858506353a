use super::view_model::CustomerDetailsViewModel;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::form_field::{FieldKind, FormField, SelectField};
use leptos::prelude::*;

#[component]
pub fn CustomerDetails(vm: CustomerDetailsViewModel) -> impl IntoView {
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
            <FormField
                label="Customer Name"
                name="customerName"
                required=true
                value=base.value(|f| f.customer_name.clone())
                error=base.error("customerName")
                on_input=base.setter("customerName", |f, v| f.customer_name = v)
            />
            <div class="form-row">
                <FormField
                    label="Contact First Name"
                    name="contactFirstName"
                    required=true
                    value=base.value(|f| f.contact_first_name.clone())
                    error=base.error("contactFirstName")
                    on_input=base.setter("contactFirstName", |f, v| f.contact_first_name = v)
                />
                <FormField
                    label="Contact Last Name"
                    name="contactLastName"
                    required=true
                    value=base.value(|f| f.contact_last_name.clone())
                    error=base.error("contactLastName")
                    on_input=base.setter("contactLastName", |f, v| f.contact_last_name = v)
                />
            </div>
            <FormField
                label="Phone"
                name="phone"
                required=true
                value=base.value(|f| f.phone.clone())
                error=base.error("phone")
                on_input=base.setter("phone", |f, v| f.phone = v)
            />
            <FormField
                label="Address Line 1"
                name="addressLine1"
                required=true
                value=base.value(|f| f.address_line1.clone())
                error=base.error("addressLine1")
                on_input=base.setter("addressLine1", |f, v| f.address_line1 = v)
            />
            <FormField
                label="Address Line 2"
                name="addressLine2"
                value=base.value(|f| f.address_line2.clone())
                error=base.error("addressLine2")
                on_input=base.setter("addressLine2", |f, v| f.address_line2 = v)
            />
            <div class="form-row">
                <FormField
                    label="City"
                    name="city"
                    required=true
                    value=base.value(|f| f.city.clone())
                    error=base.error("city")
                    on_input=base.setter("city", |f, v| f.city = v)
                />
                <FormField
                    label="State"
                    name="state"
                    value=base.value(|f| f.state.clone())
                    error=base.error("state")
                    on_input=base.setter("state", |f, v| f.state = v)
                />
                <FormField
                    label="Postal Code"
                    name="postalCode"
                    value=base.value(|f| f.postal_code.clone())
                    error=base.error("postalCode")
                    on_input=base.setter("postalCode", |f, v| f.postal_code = v)
                />
            </div>
            <FormField
                label="Country"
                name="country"
                required=true
                value=base.value(|f| f.country.clone())
                error=base.error("country")
                on_input=base.setter("country", |f, v| f.country = v)
            />
            <div class="form-row">
                <SelectField
                    label="Sales Representative"
                    name="salesRepEmployeeNumber"
                    placeholder="No Sales Rep"
                    value=base.value(|f| f.sales_rep_employee_number.clone())
                    error=base.error("salesRepEmployeeNumber")
                    options=vm.sales_rep_options()
                    on_change=base.setter("salesRepEmployeeNumber", |f, v| f.sales_rep_employee_number = v)
                />
                <FormField
                    label="Credit Limit"
                    name="creditLimit"
                    kind=FieldKind::Number
                    value=base.value(|f| f.credit_limit.clone())
                    error=base.error("creditLimit")
                    on_input=base.setter("creditLimit", |f, v| f.credit_limit = v)
                />
            </div>
        </DetailsForm>
    }
}
