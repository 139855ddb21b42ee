use async_trait::async_trait;
use sf_api_types::{Product, ProductId};
use std::cell::RefCell;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("catalog HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("catalog transport: {0}")]
    Transport(String),
    #[error("catalog decode: {0}")]
    Decode(String),
}

/// Remote product catalog.
///
/// Futures are not required to be `Send`: the browser implementation holds
/// JS handles across awaits.
#[async_trait(?Send)]
pub trait CatalogSource {
    async fn fetch_products(&self, category: Option<&str>) -> Result<Vec<Product>, RemoteError>;
    async fn fetch_categories(&self) -> Result<Vec<String>, RemoteError>;
    async fn fetch_product(&self, id: ProductId) -> Result<Product, RemoteError>;
}

/// A catalog source plus the snapshot of the last successful product fetch.
///
/// Single-threaded: the snapshot is never borrowed across an await.
pub struct Catalog<S> {
    source: S,
    snapshot: RefCell<Vec<Product>>,
}

impl<S> Catalog<S>
where
    S: CatalogSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            snapshot: RefCell::new(Vec::new()),
        }
    }

    pub async fn fetch_products(&self, category: Option<&str>) -> Result<Vec<Product>, RemoteError> {
        match self.source.fetch_products(category).await {
            Ok(products) => {
                debug!(?category, count = products.len(), "catalog snapshot replaced");
                self.replace_snapshot(products.clone());
                Ok(products)
            }
            Err(err) => {
                warn!(?category, error = %err, "failed to fetch products");
                Err(err)
            }
        }
    }

    pub async fn fetch_categories(&self) -> Result<Vec<String>, RemoteError> {
        self.source.fetch_categories().await.inspect_err(|err| {
            warn!(error = %err, "failed to fetch categories");
        })
    }

    pub async fn fetch_product(&self, id: ProductId) -> Result<Product, RemoteError> {
        self.source.fetch_product(id).await.inspect_err(|err| {
            warn!(%id, error = %err, "failed to fetch product");
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> Catalog<S> {
    pub fn products(&self) -> Vec<Product> {
        self.snapshot.borrow().clone()
    }

    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.snapshot
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Filter the snapshot without touching the network.
    pub fn search(&self, query: &str) -> Vec<Product> {
        filter_products(&self.snapshot.borrow(), query)
    }

    fn replace_snapshot(&self, products: Vec<Product>) {
        *self.snapshot.borrow_mut() = products;
    }
}

/// Case-insensitive substring match on title or description.
/// A blank query keeps every product.
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_api_types::Rating;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn product(id: u64, title: &str, description: &str, category: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_owned(),
            price: 10.0,
            description: description.to_owned(),
            category: category.to_owned(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    #[derive(Default)]
    struct StaticCatalog {
        products: Vec<Product>,
        fail: bool,
        calls: AtomicUsize,
    }

    #[async_trait(?Send)]
    impl CatalogSource for StaticCatalog {
        async fn fetch_products(&self, category: Option<&str>) -> Result<Vec<Product>, RemoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RemoteError::Transport("connection refused".into()));
            }
            Ok(self
                .products
                .iter()
                .filter(|p| category.is_none_or(|c| p.category == c))
                .cloned()
                .collect())
        }

        async fn fetch_categories(&self) -> Result<Vec<String>, RemoteError> {
            if self.fail {
                return Err(RemoteError::Status {
                    status: 500,
                    url: "/products/categories".into(),
                });
            }
            let mut categories: Vec<String> =
                self.products.iter().map(|p| p.category.clone()).collect();
            categories.dedup();
            Ok(categories)
        }

        async fn fetch_product(&self, id: ProductId) -> Result<Product, RemoteError> {
            self.products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(RemoteError::Status {
                    status: 404,
                    url: format!("/products/{id}"),
                })
        }
    }

    fn shop() -> StaticCatalog {
        StaticCatalog {
            products: vec![
                product(1, "Blue Shirt", "cotton", "men's clothing"),
                product(2, "Red Hat", "wool", "men's clothing"),
                product(3, "Silver Ring", "a shirt-free accessory", "jewelery"),
            ],
            ..StaticCatalog::default()
        }
    }

    #[test]
    fn search_matches_title_case_insensitively() {
        let products = vec![
            product(1, "Blue Shirt", "", ""),
            product(2, "Red Hat", "", ""),
        ];

        let found = filter_products(&products, "shirt");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Blue Shirt");
    }

    #[test]
    fn search_matches_description_and_blank_query_keeps_all() {
        let products = shop().products;
        let ids: Vec<u64> = filter_products(&products, "SHIRT")
            .iter()
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(filter_products(&products, "   ").len(), 3);
        assert!(filter_products(&products, "laptop").is_empty());
    }

    #[tokio::test]
    async fn fetch_replaces_snapshot_used_by_search() -> anyhow::Result<()> {
        let catalog = Catalog::new(shop());
        assert!(catalog.search("").is_empty());

        let all = catalog.fetch_products(None).await?;
        assert_eq!(all.len(), 3);

        let jewelery = catalog.fetch_products(Some("jewelery")).await?;
        assert_eq!(jewelery.len(), 1);
        assert_eq!(catalog.products(), jewelery);
        let hits: Vec<ProductId> = catalog.search("shirt").iter().map(|p| p.id).collect();
        assert_eq!(hits, vec![ProductId(3)]);
        assert_eq!(catalog.source().calls.load(Ordering::SeqCst), 2);
        Ok(())
    }

    #[tokio::test]
    async fn failed_fetch_leaves_snapshot_unchanged() -> anyhow::Result<()> {
        let catalog = Catalog::new(shop());
        catalog.fetch_products(None).await?;

        let failing = Catalog::new(StaticCatalog {
            fail: true,
            ..StaticCatalog::default()
        });
        let err = failing.fetch_products(None).await.unwrap_err();
        assert!(matches!(err, RemoteError::Transport(_)));
        assert!(failing.products().is_empty());
        assert!(failing.fetch_categories().await.is_err());

        assert_eq!(catalog.products().len(), 3);
        assert_eq!(catalog.find(ProductId(2)).map(|p| p.title), Some("Red Hat".into()));
        Ok(())
    }

    #[tokio::test]
    async fn fetch_product_surfaces_not_found() {
        let catalog = Catalog::new(shop());
        let err = catalog.fetch_product(ProductId(99)).await.unwrap_err();
        assert_eq!(
            err,
            RemoteError::Status {
                status: 404,
                url: "/products/99".into()
            }
        );
    }
}
