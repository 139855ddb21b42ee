use crate::action;
use crate::html::{escape, excerpt, format_price};
use sf_api_types::Product;

pub const DESCRIPTION_EXCERPT_CHARS: usize = 100;
pub const ALL_PRODUCTS_LABEL: &str = "Todos";

pub fn product_card(product: &Product) -> String {
    let title = escape(&product.title);
    format!(
        r#"<div class="col-sm-6 col-md-4 col-lg-3">
  <div class="card h-100 shadow-sm p-3">
    <div class="ratio ratio-4x3">
      <img src="{image}" class="card-img-top img-fluid object-cover" alt="{title}">
    </div>
    <div class="card-body d-flex flex-column">
      <h5 class="card-title">{title}</h5>
      <p class="card-text text-success fw-bold">{price}</p>
      <p class="card-text text-muted text-truncate" style="max-width: 250px;">{description}</p>
      <div class="mt-auto d-flex justify-content-between">
        <button type="button" class="btn btn-primary" data-action="{buy}" data-product-id="{id}">Comprar</button>
        <a href="product-detail.html?id={id}" class="btn btn-link">Ver detalle</a>
      </div>
    </div>
  </div>
</div>"#,
        image = escape(&product.image),
        price = format_price(product.price),
        description = escape(&excerpt(&product.description, DESCRIPTION_EXCERPT_CHARS)),
        buy = action::BUY,
        id = product.id,
    )
}

pub fn product_grid(products: &[Product]) -> String {
    if products.is_empty() {
        return r#"<div class="col-12 text-center text-muted py-5">No se encontraron productos.</div>"#
            .to_string();
    }
    products.iter().map(product_card).collect::<Vec<_>>().join("\n")
}

pub fn category_bar(categories: &[String]) -> String {
    let mut items = vec![format!(
        r#"<li class="list-inline-item"><a class="btn btn-primary w-100" data-action="{}">{}</a></li>"#,
        action::ALL_PRODUCTS,
        ALL_PRODUCTS_LABEL
    )];
    for category in categories {
        let category = escape(category);
        items.push(format!(
            r#"<li class="list-inline-item"><a class="btn btn-outline-primary w-100" data-action="{}" data-category="{category}">{category}</a></li>"#,
            action::CATEGORY
        ));
    }
    format!(
        r#"<ul class="list-inline d-flex flex-wrap justify-content-evenly p-3">{}</ul>"#,
        items.join("")
    )
}
