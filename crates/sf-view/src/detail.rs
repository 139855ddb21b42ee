use crate::html::{escape, format_price};
use sf_api_types::Product;

pub fn product_detail(product: &Product) -> String {
    let title = escape(&product.title);
    format!(
        r#"<div class="card">
  <div class="card-header">
    <h4>{title}</h4>
  </div>
  <div class="card-body">
    <div class="text-center mb-3">
      <img src="{image}" alt="{title}" class="img-fluid rounded" style="max-height: 300px; object-fit: contain;">
    </div>
    <p><strong>Price:</strong> {price}</p>
    <p><strong>Description:</strong> {description}</p>
    <p><strong>Category:</strong> {category}</p>
    <p><strong>Rate:</strong> {rate} ({count})</p>
    <a href="index.html" class="btn btn-primary">Go Back</a>
  </div>
</div>"#,
        image = escape(&product.image),
        price = format_price(product.price),
        description = escape(&product.description),
        category = escape(&product.category),
        rate = product.rating.rate,
        count = product.rating.count,
    )
}

pub fn detail_error(message: &str) -> String {
    format!(
        r#"<div class="alert alert-danger">Error loading product: {}</div>"#,
        escape(message)
    )
}

pub fn missing_product_id() -> String {
    r#"<div class="alert alert-danger">Product ID not specified in the URL!</div>"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_shows_all_product_fields() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 9,
            "title": "WD 2TB Elements Portable External Hard Drive",
            "price": 64,
            "description": "USB 3.0 and USB 2.0 compatibility",
            "category": "electronics",
            "image": "https://fakestoreapi.com/img/61IBBVJvSDL._AC_SY879_.jpg",
            "rating": { "rate": 3.3, "count": 203 }
        }))
        .unwrap();

        let html = product_detail(&product);
        assert!(html.contains("<h4>WD 2TB Elements Portable External Hard Drive</h4>"));
        assert!(html.contains("$64.00"));
        assert!(html.contains("electronics"));
        assert!(html.contains("3.3 (203)"));
    }

    #[test]
    fn errors_are_escaped() {
        assert!(detail_error("HTTP <404>").contains("HTTP &lt;404&gt;"));
        assert!(missing_product_id().contains("alert-danger"));
    }
}
