//! Global application state.
//!
//! `thread_local!` storage (WASM is single-threaded). Cart listeners run
//! inside `with_cart_mut` and receive the lines directly; they must not call
//! back into this module.

use crate::api::{self, HttpCatalog};
use crate::storage::BrowserStorage;
use sf_cart_core::CartStore;
use sf_catalog_client::Catalog;
use std::cell::RefCell;
use std::rc::Rc;

pub type Cart = CartStore<BrowserStorage>;

thread_local! {
    static CART: RefCell<Option<Cart>> = const { RefCell::new(None) };
    static CATALOG: Rc<Catalog<HttpCatalog>> =
        Rc::new(Catalog::new(HttpCatalog::new(api::base_url())));
}

/// Shared catalog handle. Clone it out before awaiting.
pub fn catalog() -> Rc<Catalog<HttpCatalog>> {
    CATALOG.with(Rc::clone)
}

pub fn install_cart(cart: Cart) {
    CART.with(|c| *c.borrow_mut() = Some(cart));
}

/// Run a closure with mutable access to the cart. `None` before `install_cart`.
pub fn with_cart_mut<F, R>(f: F) -> Option<R>
where
    F: FnOnce(&mut Cart) -> R,
{
    CART.with(|c| c.borrow_mut().as_mut().map(f))
}

