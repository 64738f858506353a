//! Frame of every add/edit form: title bar, field area and the save/cancel row.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DetailsForm(
    #[prop(into)]
    title: String,
    #[prop(into)]
    submit_label: String,
    #[prop(into)]
    saving: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="details-container">
            <div class="details-header">
                <h2>{title}</h2>
                <button class="button button--ghost" aria-label="Close" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                </button>
            </div>

            <div class="details-form">
                {children()}

                <div class="details-actions">
                    <Flex justify=FlexJustify::End>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=move |_| on_save.run(())
                        >
                            {move || if saving.get() { "Saving...".to_string() } else { submit_label.clone() }}
                        </Button>
                    </Flex>
                </div>
            </div>
        </div>
    }
}
