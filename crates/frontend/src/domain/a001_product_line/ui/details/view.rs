use super::view_model::ProductLineDetailsViewModel;
use crate::shared::components::details_form::DetailsForm;
use crate::shared::components::form_field::{FieldKind, FormField};
use leptos::prelude::*;

#[component]
pub fn ProductLineDetails(vm: ProductLineDetailsViewModel) -> impl IntoView {
    let save = {
        let vm = vm.clone();
        Callback::new(move |_| vm.save_command())
    };
    let cancel = {
        let vm = vm.clone();
        Callback::new(move |_| vm.cancel_command())
    };

    view! {
        <DetailsForm
            title=vm.title()
            submit_label=vm.submit_label()
            saving=vm.saving
            on_save=save
            on_cancel=cancel
        >
            <FormField
                label="Product Line Name"
                name="productLine"
                required=true
                value=vm.value(|f| f.product_line.clone())
                error=vm.error("productLine")
                on_input=vm.setter("productLine", |f, v| f.product_line = v)
            />
            <FormField
                label="Description"
                name="textDescription"
                kind=FieldKind::TextArea
                required=true
                value=vm.value(|f| f.text_description.clone())
                error=vm.error("textDescription")
                on_input=vm.setter("textDescription", |f, v| f.text_description = v)
            />
        </DetailsForm>
    }
}
