//! Cart panel, badge, running total and confirm button.

use crate::dom::{self, Elements};
use sf_api_types::{CartItem, ProductId};

/// Redraw every cart-derived region from `items`.
pub fn render(els: &Elements, items: &[CartItem]) {
    let panel = sf_view::cart_panel(items);
    dom::set_text(&els.cart_title, panel.title);
    dom::set_inner_html(&els.cart, &panel.body);
    els.confirm_sale_btn.set_disabled(!panel.confirm_enabled);

    dom::set_text(
        &els.cart_badge,
        &sf_view::badge_text(sf_cart_core::distinct_item_count(items)),
    );
    dom::set_text(
        &els.cart_total,
        &sf_view::total_text(sf_cart_core::cart_total(items)),
    );
}

pub fn product_id(el: &web_sys::Element) -> Option<ProductId> {
    el.get_attribute("data-product-id")?
        .parse::<u64>()
        .ok()
        .map(ProductId)
}
