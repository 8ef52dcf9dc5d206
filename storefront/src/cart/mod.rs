//! Cart manager
//!
//! At most one line per item id, every quantity >= 1. The full line list is
//! written to the injected [`CartStore`] after every mutation and read back
//! when the cart is opened.

pub mod store;

use std::sync::Arc;

use shared::models::{CartLine, FoodItem};

use crate::utils::ErrorCode;

pub use store::{CART_KEY, CartStore, JsonFileCartStore, MemoryCartStore, StoreError, StoreResult};

pub struct Cart {
    lines: Vec<CartLine>,
    store: Arc<dyn CartStore>,
}

impl Cart {
    /// Restore the cart from `store`.
    ///
    /// Unreadable or malformed state is discarded and the cart starts empty.
    pub fn open(store: Arc<dyn CartStore>) -> Self {
        let lines = match store.load() {
            Ok(Some(lines)) => normalize(lines),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding persisted cart");
                Vec::new()
            }
        };
        Self { lines, store }
    }

    /// Empty cart backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::open(Arc::new(MemoryCartStore::new()))
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Increment the line for this item, or add it with quantity 1
    pub fn add_item(&mut self, item: FoodItem) {
        match self.lines.iter_mut().find(|l| l.item.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine::new(item, 1)),
        }
        self.persist();
    }

    /// Set a line's quantity; anything below 1 removes the line.
    ///
    /// Returns `false` when no line has this id.
    pub fn set_quantity(&mut self, id: &str, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove_item(id);
        }
        let Some(line) = self.lines.iter_mut().find(|l| l.id() == id) else {
            return false;
        };
        line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.persist();
        true
    }

    /// Delete the line if present
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id() != id);
        let removed = self.lines.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Sum of parsed unit price × quantity, saturating at `i64::MAX`
    pub fn total(&self) -> i64 {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(0, i64::saturating_add)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.lines) {
            tracing::warn!(error = %e, code = %ErrorCode::CartStorageFailed, "Failed to persist cart");
        }
    }
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart").field("lines", &self.lines).finish()
    }
}

/// Merge duplicate ids and drop zero quantities from restored state
fn normalize(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut merged: Vec<CartLine> = Vec::with_capacity(lines.len());
    for line in lines.into_iter().filter(|l| l.quantity >= 1) {
        match merged.iter_mut().find(|m| m.id() == line.id()) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => merged.push(line),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ayam() -> FoodItem {
        FoodItem::new("1", "Ayam Geprek", "Rp 10.000")
    }

    fn cireng() -> FoodItem {
        FoodItem::new("2", "Cireng", "Rp 5.000")
    }

    #[test]
    fn test_add_same_item_twice_increments() {
        let mut cart = Cart::in_memory();
        cart.add_item(ayam());
        cart.add_item(ayam());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("1").unwrap().quantity, 2);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::in_memory();
        cart.add_item(ayam());
        assert!(cart.set_quantity("1", 0));
        assert!(!cart.contains("1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let mut cart = Cart::in_memory();
        cart.add_item(ayam());
        cart.set_quantity("1", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id() {
        let mut cart = Cart::in_memory();
        assert!(!cart.set_quantity("9", 4));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::in_memory();
        cart.add_item(cireng());
        assert!(!cart.remove_item("1"));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::in_memory();
        cart.add_item(ayam());
        cart.set_quantity("1", 2);
        cart.add_item(cireng());
        assert_eq!(cart.total(), 25000);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_total_saturates_on_huge_amounts() {
        let mut cart = Cart::in_memory();
        cart.add_item(FoodItem::new("1", "Mahal", "Rp 9.000.000.000"));
        cart.set_quantity("1", 4_000_000_000);
        assert_eq!(cart.total(), i64::MAX);

        cart.set_quantity("1", 1_000_000_000);
        cart.add_item(FoodItem::new("2", "Mahal Juga", "Rp 9.000.000.000.000.000.000"));
        assert_eq!(cart.total(), i64::MAX);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let store = Arc::new(MemoryCartStore::new());
        let mut cart = Cart::open(store.clone());

        cart.add_item(ayam());
        let saved: Vec<CartLine> = serde_json::from_str(&store.raw().unwrap()).unwrap();
        assert_eq!(saved.len(), 1);

        cart.set_quantity("1", 5);
        let saved: Vec<CartLine> = serde_json::from_str(&store.raw().unwrap()).unwrap();
        assert_eq!(saved[0].quantity, 5);

        cart.clear();
        assert_eq!(store.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn test_restore_from_store() {
        let store = Arc::new(MemoryCartStore::new());
        {
            let mut cart = Cart::open(store.clone());
            cart.add_item(ayam());
            cart.add_item(cireng());
            cart.add_item(cireng());
        }
        let cart = Cart::open(store);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get("2").unwrap().quantity, 2);
    }

    #[test]
    fn test_malformed_state_is_discarded() {
        let store = Arc::new(MemoryCartStore::with_raw("{\"lines\": oops"));
        let cart = Cart::open(store);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_restored_duplicates_are_merged() {
        let raw = serde_json::to_string(&vec![
            CartLine { item: ayam(), quantity: 1 },
            CartLine { item: ayam(), quantity: 2 },
            CartLine { item: cireng(), quantity: 0 },
        ])
        .unwrap();
        let cart = Cart::open(Arc::new(MemoryCartStore::with_raw(raw)));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("1").unwrap().quantity, 3);
    }
}
