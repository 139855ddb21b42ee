//! Product grid and category bar.

use crate::dom::{self, Elements};
use crate::state;
use sf_api_types::Product;

/// Fetch products (optionally for one category) and redraw the grid.
/// On failure the grid keeps its previous content.
pub async fn load_products(els: &Elements, category: Option<String>) {
    if let Some(loading) = &els.loading {
        dom::set_visible(loading, true);
    }

    let catalog = state::catalog();
    match catalog.fetch_products(category.as_deref()).await {
        Ok(products) => render_products(els, &products),
        Err(e) => gloo_console::error!("Failed to fetch products:", e.to_string()),
    }

    if let Some(loading) = &els.loading {
        dom::set_visible(loading, false);
    }
}

pub async fn load_categories(els: &Elements) {
    match state::catalog().fetch_categories().await {
        Ok(categories) => dom::set_inner_html(&els.categories, &sf_view::category_bar(&categories)),
        Err(e) => gloo_console::error!("Failed to fetch categories:", e.to_string()),
    }
}

pub fn render_products(els: &Elements, products: &[Product]) {
    dom::set_inner_html(&els.products, &sf_view::product_grid(products));
}

/// Filter the last fetched catalog by the search box; no network.
pub fn on_search(els: &Elements) {
    let query = dom::get_input_value(&els.search);
    render_products(els, &state::catalog().search(&query));
}
