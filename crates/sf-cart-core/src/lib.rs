use sf_api_types::{CartItem, Product, ProductId};
use sf_storage::{CartStorage, StorageError};
use thiserror::Error;
use tracing::{debug, warn};

pub const CART_STORAGE_KEY: &str = "cart";

pub const REMOVED_MESSAGE: &str = "El producto ha sido eliminado del carrito correctamente.";

pub fn added_message(title: &str) -> String {
    format!("El producto \"{title}\" ha sido agregado al carrito.")
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("stored cart is malformed: {0}")]
    StorageParse(#[from] serde_json::Error),
    #[error("cart index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("product {0} is not in the cart")]
    ItemNotFound(ProductId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    Added(ProductId),
    Incremented(ProductId),
    Decremented(ProductId),
    Removed(ProductId),
    Cleared,
}

/// Transient message surface (a toast in the browser).
pub trait UserNotification {
    fn show(&self, message: &str);
}

type Listener = Box<dyn FnMut(&CartChange, &[CartItem])>;

/// Decode a persisted cart line by line. Lines that do not fit a `CartItem`
/// are dropped on their own; zero quantities are dropped and duplicate
/// product ids merged. Only a value that is not a JSON array is an error.
pub fn decode_cart(raw: &str) -> Result<Vec<CartItem>, CartError> {
    let lines: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let mut items: Vec<CartItem> = Vec::with_capacity(lines.len());
    for (line, value) in lines.into_iter().enumerate() {
        let item: CartItem = match serde_json::from_value(value) {
            Ok(item) => item,
            Err(err) => {
                warn!(line, error = %err, "dropping unreadable cart line");
                continue;
            }
        };
        if item.quantity == 0 {
            continue;
        }
        match items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => items.push(item),
        }
    }
    Ok(items)
}

pub fn encode_cart(items: &[CartItem]) -> Result<String, CartError> {
    Ok(serde_json::to_string(items)?)
}

/// Sum of price × quantity; 0 for no lines.
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Number of lines, regardless of quantity. This is what the cart badge shows.
pub fn distinct_item_count(items: &[CartItem]) -> usize {
    items.len()
}

/// Owner of the cart lines and their persisted mirror.
///
/// Every mutation writes the whole cart back to storage and then notifies
/// subscribers with the post-mutation lines.
pub struct CartStore<S> {
    items: Vec<CartItem>,
    storage: S,
    listeners: Vec<Listener>,
    notifier: Option<Box<dyn UserNotification>>,
}

impl<S> CartStore<S>
where
    S: CartStorage,
{
    /// Never fails: a missing, unreadable or malformed value yields an empty cart.
    pub fn load(storage: S) -> Self {
        let items = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => decode_cart(&raw).unwrap_or_else(|err| {
                warn!(error = %err, "discarding stored cart");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "cart storage unreadable");
                Vec::new()
            }
        };
        debug!(lines = items.len(), "cart loaded");

        Self {
            items,
            storage,
            listeners: Vec::new(),
            notifier: None,
        }
    }

    pub fn with_notifier(mut self, notifier: impl UserNotification + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&CartChange, &[CartItem]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn add_or_increment(&mut self, product: &Product) {
        let change = match self.position(product.id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                debug!(id = %product.id, quantity = item.quantity, "cart quantity updated");
                CartChange::Incremented(product.id)
            }
            None => {
                self.items.push(CartItem::new(product.clone()));
                self.notify(&added_message(&product.title));
                CartChange::Added(product.id)
            }
        };
        self.commit(change);
    }

    pub fn increase(&mut self, id: ProductId) -> Result<(), CartError> {
        let index = self.position(id).ok_or(CartError::ItemNotFound(id))?;
        self.increase_at(index)
    }

    pub fn increase_at(&mut self, index: usize) -> Result<(), CartError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })?;
        item.quantity = item.quantity.saturating_add(1);
        let id = item.id();
        self.commit(CartChange::Incremented(id));
        Ok(())
    }

    pub fn decrease(&mut self, id: ProductId) -> Result<(), CartError> {
        let index = self.position(id).ok_or(CartError::ItemNotFound(id))?;
        self.decrease_at(index)
    }

    /// Removes the line instead of leaving a zero quantity.
    pub fn decrease_at(&mut self, index: usize) -> Result<(), CartError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CartError::IndexOutOfRange { index, len })?;
        if item.quantity <= 1 {
            return self.remove_at(index);
        }
        item.quantity -= 1;
        let id = item.id();
        self.commit(CartChange::Decremented(id));
        Ok(())
    }

    pub fn remove(&mut self, id: ProductId) -> Result<(), CartError> {
        let index = self.position(id).ok_or(CartError::ItemNotFound(id))?;
        self.remove_at(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<(), CartError> {
        if index >= self.items.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        self.notify(REMOVED_MESSAGE);
        self.commit(CartChange::Removed(removed.id()));
        Ok(())
    }

    /// Sale confirmation.
    pub fn clear(&mut self) {
        self.items.clear();
        self.commit(CartChange::Cleared);
    }

    fn commit(&mut self, change: CartChange) {
        if let Err(err) = self.persist() {
            warn!(error = %err, ?change, "cart not persisted");
        }
        for listener in &mut self.listeners {
            listener(&change, &self.items);
        }
    }

    fn persist(&self) -> Result<(), CartError> {
        let raw = encode_cart(&self.items)?;
        self.storage.set(CART_STORAGE_KEY, &raw)?;
        Ok(())
    }

    fn notify(&self, message: &str) {
        if let Some(notifier) = &self.notifier {
            notifier.show(message);
        }
    }
}

impl<S> CartStore<S> {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        cart_total(&self.items)
    }

    pub fn distinct_item_count(&self) -> usize {
        distinct_item_count(&self.items)
    }

    pub fn total_unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
