//! DOM element bindings.
//!
//! All regions are resolved once at startup. To add a region, add a field
//! here and bind it in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

// ── Helpers ──

fn doc() -> Document {
    window().document().expect_throw("window has no document")
}

pub fn window() -> web_sys::Window {
    web_sys::window().expect_throw("no global window")
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn set_visible(el: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    let _ = el.style().set_property("display", display);
}

/// Nearest ancestor-or-self of the event target carrying `data-action`.
pub fn action_target(event: &web_sys::Event) -> Option<(String, Element)> {
    let target: Element = event.target()?.dyn_into().ok()?;
    let el = target.closest("[data-action]").ok()??;
    let action = el.get_attribute("data-action")?;
    Some((action, el))
}

// ── Storefront page ──

/// DOM regions of the storefront page.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    pub products: Element,
    pub categories: Element,
    pub search: HtmlInputElement,
    pub loading: Option<HtmlElement>,

    pub cart: Element,
    pub cart_title: Element,
    pub cart_badge: Element,
    pub cart_total: Element,
    pub confirm_sale_btn: HtmlButtonElement,

    pub toast: Element,
    pub toast_body: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_typed {
    ($ty:ty, $id:expr) => {
        by_id_typed::<$ty>($id).ok_or_else(|| {
            JsValue::from_str(&format!("missing {} #{}", stringify!($ty), $id))
        })?
    };
}

macro_rules! get_within {
    ($parent:expr, $selector:expr) => {
        query_within(&$parent, $selector)
            .ok_or_else(|| JsValue::from_str(&format!("missing {}", $selector)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        let cart_button = get_el!("cart-button");
        let toast = get_el!("liveToast");

        Ok(Elements {
            products: get_el!("products"),
            categories: get_el!("categories"),
            search: get_typed!(HtmlInputElement, "search"),
            loading: by_id_typed::<HtmlElement>("loading"),

            cart: get_el!("cart"),
            cart_title: get_el!("cart-title"),
            cart_badge: get_within!(cart_button, ".badge-number"),
            cart_total: get_el!("cart-total"),
            confirm_sale_btn: get_typed!(HtmlButtonElement, "confirm-sale"),

            toast_body: get_within!(toast, ".toast-body"),
            toast,
        })
    }
}

// ── Product detail page ──

#[derive(Clone)]
pub struct DetailElements {
    pub product_detail: HtmlElement,
    pub loading_message: Option<HtmlElement>,
}

impl DetailElements {
    pub fn bind() -> Result<DetailElements, JsValue> {
        Ok(DetailElements {
            product_detail: get_typed!(HtmlElement, "product-detail"),
            loading_message: by_id_typed::<HtmlElement>("loading-message"),
        })
    }
}
