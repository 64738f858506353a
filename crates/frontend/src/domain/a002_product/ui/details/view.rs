use super::view_model::ProductDetailsViewModel;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::form_field::{FieldKind, FormField, SelectField};
use leptos::prelude::*;

#[component]
pub fn ProductDetails(vm: ProductDetailsViewModel) -> impl IntoView {
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
            <div class="form-row">
                <FormField
                    label="Product Code"
                    name="productCode"
                    required=true
                    value=base.value(|f| f.product_code.clone())
                    error=base.error("productCode")
                    on_input=base.setter("productCode", |f, v| f.product_code = v)
                />
                <FormField
                    label="Product Name"
                    name="productName"
                    required=true
                    value=base.value(|f| f.product_name.clone())
                    error=base.error("productName")
                    on_input=base.setter("productName", |f, v| f.product_name = v)
                />
            </div>
            <SelectField
                label="Product Line"
                name="productLine"
                required=true
                placeholder="Select a product line..."
                value=base.value(|f| f.product_line.clone())
                error=base.error("productLine")
                options=vm.line_options()
                on_change=base.setter("productLine", |f, v| f.product_line = v)
            />
            <div class="form-row">
                <FormField
                    label="Vendor"
                    name="productVendor"
                    required=true
                    value=base.value(|f| f.product_vendor.clone())
                    error=base.error("productVendor")
                    on_input=base.setter("productVendor", |f, v| f.product_vendor = v)
                />
                <FormField
                    label="Scale"
                    name="productScale"
                    required=true
                    value=base.value(|f| f.product_scale.clone())
                    error=base.error("productScale")
                    on_input=base.setter("productScale", |f, v| f.product_scale = v)
                />
            </div>
            <FormField
                label="Description"
                name="productDescription"
                kind=FieldKind::TextArea
                required=true
                value=base.value(|f| f.product_description.clone())
                error=base.error("productDescription")
                on_input=base.setter("productDescription", |f, v| f.product_description = v)
            />
            <div class="form-row">
                <FormField
                    label="Quantity in Stock"
                    name="quantityInStock"
                    kind=FieldKind::Number
                    required=true
                    value=base.value(|f| f.quantity_in_stock.clone())
                    error=base.error("quantityInStock")
                    on_input=base.setter("quantityInStock", |f, v| f.quantity_in_stock = v)
                />
                <FormField
                    label="Buy Price"
                    name="buyPrice"
                    kind=FieldKind::Number
                    required=true
                    value=base.value(|f| f.buy_price.clone())
                    error=base.error("buyPrice")
                    on_input=base.setter("buyPrice", |f, v| f.buy_price = v)
                />
                <FormField
                    label="MSRP"
                    name="msrp"
                    kind=FieldKind::Number
                    required=true
                    value=base.value(|f| f.msrp.clone())
                    error=base.error("msrp")
                    on_input=base.setter("msrp", |f, v| f.msrp = v)
                />
            </div>
        </DetailsForm>
    }
}
