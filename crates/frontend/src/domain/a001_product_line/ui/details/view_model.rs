use super::view::ProductLineDetails;
use crate::shared::components::list_page::Controller;
use crate::shared::date_utils::today;
use crate::shared::details_view_model::{DetailsLauncher, DetailsViewModel};
use contracts::domain::a001_product_line::aggregate::ProductLine;
use contracts::domain::a001_product_line::form::ProductLineForm;
use contracts::shared::form::FormState;
use leptos::prelude::*;

pub type ProductLineDetailsViewModel = DetailsViewModel<ProductLineForm>;

/// `None` opens an empty add form
pub fn open_product_line_details(
    launcher: DetailsLauncher,
    controller: &Controller<ProductLine>,
    line: Option<&ProductLine>,
) {
    let state = match line {
        Some(line) => FormState::for_edit(line),
        None => FormState::for_add(today()),
    };
    launcher.open(state, controller, |vm| view! { <ProductLineDetails vm=vm /> }.into_any());
}
