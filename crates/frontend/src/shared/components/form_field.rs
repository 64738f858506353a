//! Labelled inputs bound to one field of a form state, with its error line.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
    TextArea,
}

#[component]
pub fn FormField(
    label: &'static str,
    /// Field key, also used as the input id
    name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    error: Signal<Option<String>>,
    on_input: Callback<String>,
    #[prop(optional)]
    kind: FieldKind,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let input = match kind {
        FieldKind::TextArea => view! {
            <textarea
                id=name
                name=name
                rows="3"
                class:input--error=move || error.get().is_some()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any(),
        _ => {
            let input_type = match kind {
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    id=name
                    name=name
                    step=(kind == FieldKind::Number).then_some("any")
                    class:input--error=move || error.get().is_some()
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group">
            <label for=name>{label}{required.then_some(" *")}</label>
            {input}
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </div>
    }
}

/// `<select>` variant; `options` are (value, label) pairs
#[component]
pub fn SelectField(
    label: &'static str,
    name: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    on_change: Callback<String>,
    /// Label of the empty first option; omitted when `None`
    #[prop(optional)]
    placeholder: Option<&'static str>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>{label}{required.then_some(" *")}</label>
            <select
                id=name
                name=name
                class:input--error=move || error.get().is_some()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {placeholder.map(|p| view! { <option value="">{p}</option> })}
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(v, l)| {
                            let is_selected = v == selected;
                            view! { <option value=v selected=is_selected>{l}</option> }
                        })
                        .collect_view()
                }}
            </select>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </div>
    }
}
