//! Single-product page (`product-detail.html?id=N`).

use crate::dom::{self, DetailElements};
use crate::state;
use sf_api_types::ProductId;
use wasm_bindgen::prelude::*;

pub async fn init() -> Result<(), JsValue> {
    let els = DetailElements::bind()?;
    let target: &web_sys::Element = els.product_detail.as_ref();

    let Some(raw_id) = product_id_from_url() else {
        dom::set_inner_html(target, &sf_view::missing_product_id());
        return Ok(());
    };

    let Ok(id) = raw_id.trim().parse::<u64>().map(ProductId) else {
        dom::set_inner_html(
            target,
            &sf_view::detail_error(&format!("invalid product id {raw_id:?}")),
        );
        return Ok(());
    };

    if let Some(loading) = &els.loading_message {
        dom::set_visible(loading, true);
    }

    match state::catalog().fetch_product(id).await {
        Ok(product) => {
            dom::set_inner_html(target, &sf_view::product_detail(&product));
            dom::set_visible(&els.product_detail, true);
        }
        Err(e) => {
            gloo_console::error!("Failed to fetch product:", e.to_string());
            dom::set_inner_html(target, &sf_view::detail_error(&e.to_string()));
        }
    }

    if let Some(loading) = &els.loading_message {
        dom::set_visible(loading, false);
    }

    Ok(())
}

fn product_id_from_url() -> Option<String> {
    let search = dom::window().location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("id").filter(|id| !id.trim().is_empty())
}
