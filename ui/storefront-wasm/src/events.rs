//! Event binding.
//!
//! Rendered markup is replaced wholesale, so clicks are delegated: one
//! listener per region reads `data-action` from the nearest marked ancestor.

use crate::cart_view;
use crate::catalog_view;
use crate::dom::{self, Elements};
use crate::state;
use sf_cart_core::CartError;
use sf_view::action;
use wasm_bindgen::prelude::*;

/// Attach an event handler that lives for the rest of the page.
macro_rules! on {
    ($el:expr, $event:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::Event)>);
        $el.add_event_listener_with_callback($event, cb.as_ref().unchecked_ref())?;
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) -> Result<(), JsValue> {
    // ── Search ──
    {
        let els2 = els.clone();
        on!(els.search, "input", move |_: web_sys::Event| {
            catalog_view::on_search(&els2);
        });
    }

    // ── Categories ──
    {
        let els2 = els.clone();
        on!(els.categories, "click", move |e: web_sys::Event| {
            let Some((act, el)) = dom::action_target(&e) else {
                return;
            };
            let category = match act.as_str() {
                action::CATEGORY => el.get_attribute("data-category"),
                action::ALL_PRODUCTS => None,
                _ => return,
            };
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                catalog_view::load_products(&els3, category).await;
            });
        });
    }

    // ── Buy ──
    on!(els.products, "click", move |e: web_sys::Event| {
        let Some((act, el)) = dom::action_target(&e) else {
            return;
        };
        if act != action::BUY {
            return;
        }
        let Some(product) = cart_view::product_id(&el).and_then(|id| state::catalog().find(id))
        else {
            gloo_console::warn!("buy clicked for a product missing from the catalog");
            return;
        };
        state::with_cart_mut(|cart| cart.add_or_increment(&product));
    });

    // ── Cart lines ──
    on!(els.cart, "click", move |e: web_sys::Event| {
        let Some((act, el)) = dom::action_target(&e) else {
            return;
        };
        let Some(id) = cart_view::product_id(&el) else {
            return;
        };
        let result = state::with_cart_mut(|cart| match act.as_str() {
            action::INCREASE => cart.increase(id),
            action::DECREASE => cart.decrease(id),
            action::REMOVE => cart.remove(id),
            _ => Ok(()),
        });
        if let Some(Err(err)) = result {
            report(&err);
        }
    });

    // ── Confirm sale ──
    on!(els.confirm_sale_btn, "click", move |_: web_sys::Event| {
        state::with_cart_mut(|cart| cart.clear());
    });

    Ok(())
}

fn report(err: &CartError) {
    gloo_console::warn!("cart update rejected:", err.to_string());
}
