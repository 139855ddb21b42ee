//! Storefront WASM frontend.
//!
//! Renders the catalog and cart into the page and wires user events to the
//! cart store. Each concern lives in its own module.

pub mod api;
pub mod cart_view;
pub mod catalog_view;
pub mod dom;
pub mod events;
pub mod logging;
pub mod product_detail;
pub mod state;
pub mod storage;
pub mod toast;

use sf_cart_core::CartStore;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);

    if dom::by_id("product-detail").is_some() {
        product_detail::init().await
    } else {
        init().await
    }
}

/// Storefront page initialisation.
async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;

    // Restore the cart and redraw its regions on every change
    let mut cart = CartStore::load(storage::BrowserStorage)
        .with_notifier(toast::Toast::new(els.toast.clone(), els.toast_body.clone()));
    {
        let els2 = els.clone();
        cart.subscribe(move |_, items| cart_view::render(&els2, items));
    }
    cart_view::render(&els, cart.items());
    state::install_cart(cart);

    events::bind_events(&els)?;

    catalog_view::load_products(&els, None).await;
    catalog_view::load_categories(&els).await;

    Ok(())
}
