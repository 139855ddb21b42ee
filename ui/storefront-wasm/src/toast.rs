//! Toast implementation of the cart's `UserNotification`.

use crate::dom;
use gloo_timers::callback::Timeout;
use sf_cart_core::UserNotification;
use std::cell::RefCell;
use web_sys::Element;

const VISIBLE_MS: u32 = 3_000;

thread_local! {
    // Replacing the handle drops, and so cancels, the previous hide timer.
    static HIDE_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

pub struct Toast {
    toast: Element,
    body: Element,
}

impl Toast {
    pub fn new(toast: Element, body: Element) -> Self {
        Self { toast, body }
    }
}

impl UserNotification for Toast {
    fn show(&self, message: &str) {
        dom::set_text(&self.body, message);
        dom::add_class(&self.toast, "show");

        let toast = self.toast.clone();
        let timer = Timeout::new(VISIBLE_MS, move || dom::remove_class(&toast, "show"));
        HIDE_TIMER.with(|t| *t.borrow_mut() = Some(timer));
    }
}
