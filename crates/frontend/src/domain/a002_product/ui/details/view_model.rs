use super::view::ProductDetails;
use crate::shared::components::list_page::Controller;
use crate::shared::date_utils::today;
use crate::shared::details_view_model::{DetailsLauncher, DetailsViewModel};
use contracts::domain::a001_product_line::aggregate::ProductLine;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a002_product::form::ProductForm;
use contracts::shared::form::FormState;
use leptos::prelude::*;

/// Product form plus the known product lines for its line selector
#[derive(Clone)]
pub struct ProductDetailsViewModel {
    pub base: DetailsViewModel<ProductForm>,
    pub product_lines: RwSignal<Vec<ProductLine>>,
}

impl ProductDetailsViewModel {
    /// (value, label) pairs; the product's current line stays selectable
    /// even when it is missing from the lookup
    pub fn line_options(&self) -> Signal<Vec<(String, String)>> {
        let lines = self.product_lines;
        let form = self.base.form.signal();
        Signal::derive(move || {
            let mut names: Vec<String> =
                lines.with(|l| l.iter().map(|line| line.product_line.clone()).collect());
            let current = form.with(|s| s.data.product_line.trim().to_string());
            if !current.is_empty() && !names.contains(&current) {
                names.push(current);
            }
            names.sort();
            names.into_iter().map(|name| (name.clone(), name)).collect()
        })
    }
}

pub fn open_product_details(
    launcher: DetailsLauncher,
    controller: &Controller<Product>,
    product_lines: RwSignal<Vec<ProductLine>>,
    product: Option<&Product>,
) {
    let state = match product {
        Some(product) => FormState::for_edit(product),
        None => FormState::for_add(today()),
    };

    launcher.open(state, controller, move |base| {
        let vm = ProductDetailsViewModel { base, product_lines };
        view! { <ProductDetails vm=vm /> }.into_any()
    });
}
