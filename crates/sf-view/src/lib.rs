//! HTML projections of catalog and cart state.
//!
//! Every function is pure: the same input renders the same markup, and the
//! caller replaces the whole target region with it. Interactive controls
//! carry `data-action` plus a product id or category, never a cart index.

mod cart;
mod catalog;
mod detail;
mod html;

pub use cart::{CART_EMPTY_TITLE, CART_FILLED_TITLE, CartPanel, badge_text, cart_panel, total_text};
pub use catalog::{ALL_PRODUCTS_LABEL, DESCRIPTION_EXCERPT_CHARS, category_bar, product_card, product_grid};
pub use detail::{detail_error, missing_product_id, product_detail};
pub use html::{escape, excerpt, format_price};

/// `data-action` values emitted by the renderers.
pub mod action {
    pub const BUY: &str = "buy";
    pub const CATEGORY: &str = "category";
    pub const ALL_PRODUCTS: &str = "all-products";
    pub const INCREASE: &str = "increase";
    pub const DECREASE: &str = "decrease";
    pub const REMOVE: &str = "remove";
}
