use crate::action;
use crate::html::{escape, format_price};
use sf_api_types::CartItem;

pub const CART_EMPTY_TITLE: &str = "Tu carrito se encuentra vacio.";
pub const CART_FILLED_TITLE: &str = "Estos son tus productos:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanel {
    pub title: &'static str,
    pub body: String,
    pub confirm_enabled: bool,
}

pub fn cart_panel(items: &[CartItem]) -> CartPanel {
    let title = if items.is_empty() {
        CART_EMPTY_TITLE
    } else {
        CART_FILLED_TITLE
    };

    CartPanel {
        title,
        body: items.iter().map(cart_line).collect::<Vec<_>>().join("\n"),
        confirm_enabled: !items.is_empty(),
    }
}

fn cart_line(item: &CartItem) -> String {
    let id = item.id();
    format!(
        r#"<div class="col-12 w-100 mb-3" data-product-id="{id}">
  <div class="list-group w-100">
    <div class="d-flex align-items-center justify-content-between">
      <h6 class="mb-0 flex-grow-1 text-truncate me-3">{title}</h6>
      <p class="mb-0 opacity-75 text-end pe-3">{line_total}</p>
      <button class="btn btn-danger d-flex align-items-center justify-content-center" data-action="{remove}" data-product-id="{id}" title="Eliminar">
        <i class="material-icons">close</i>
      </button>
    </div>
    <div class="d-flex align-items-center gap-2">
      <button class="btn btn-sm btn-outline-secondary" data-action="{decrease}" data-product-id="{id}">&minus;</button>
      <strong class="font-bold">x {quantity}</strong>
      <button class="btn btn-sm btn-outline-secondary" data-action="{increase}" data-product-id="{id}">&plus;</button>
    </div>
  </div>
</div>"#,
        title = escape(&item.product.title),
        line_total = format_price(item.line_total()),
        quantity = item.quantity,
        remove = action::REMOVE,
        decrease = action::DECREASE,
        increase = action::INCREASE,
    )
}

pub fn badge_text(count: usize) -> String {
    count.to_string()
}

pub fn total_text(total: f64) -> String {
    format!("Total: {}", format_price(total))
}
