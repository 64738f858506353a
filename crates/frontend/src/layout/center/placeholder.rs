use contracts::enums::section::Section;
use contracts::shared::navigation::is_placeholder;
use leptos::prelude::*;

fn placeholder_icon(section: Section) -> &'static str {
    match section {
        Section::Payments => "💳",
        Section::Offices => "🏢",
        _ => "📄",
    }
}

/// Stand-in for sections that have no view yet
#[component]
pub fn Placeholder(section: Section) -> impl IntoView {
    if !is_placeholder(section) {
        log::warn!("placeholder rendered for section with a view: {}", section.id());
    }

    view! {
        <div class="page">
            <h1 class="page-header__title">{section.label()}</h1>
            <div class="placeholder-card">
                <div class="placeholder-card__icon">{placeholder_icon(section)}</div>
                <h3>{format!("{} Management", section.label())}</h3>
                <p>"This section is under development."</p>
                <span class="placeholder-card__badge">"Coming Soon"</span>
            </div>
        </div>
    }
}
