/*
 * Responsibility
 * - orders の in-memory store
 * - handler からは repo の API だけを見せる (lock の扱いはここに閉じる)
 */
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer: String,
    pub item: String,
    pub quantity: u32,
}

#[derive(Clone, Default)]
pub struct OrderRepo {
    inner: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl OrderRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// 疎通・テスト用のサンプルデータ入り。
    pub fn with_samples() -> Self {
        let repo = Self::new();
        repo.create("spring", "galaxy ipa", 6);
        repo.create("scott", "pilsner", 12);
        repo
    }

    pub fn list(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.read().values().cloned().collect();
        // HashMap なので一覧は順序が揺れる。レスポンスを決定的にする
        orders.sort_by_key(|o| o.id);
        orders
    }

    pub fn get(&self, id: Uuid) -> Option<Order> {
        self.read().get(&id).cloned()
    }

    pub fn create(&self, customer: &str, item: &str, quantity: u32) -> Order {
        let order = Order {
            id: Uuid::new_v4(),
            customer: customer.to_string(),
            item: item.to_string(),
            quantity,
        };
        self.write().insert(order.id, order.clone());
        order
    }

    /// 消せたら true、元々なければ false。
    pub fn delete(&self, id: Uuid) -> bool {
        self.write().remove(&id).is_some()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Order>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Order>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_get_and_delete() {
        let repo = OrderRepo::new();
        let order = repo.create("spring", "stout", 2);

        assert_eq!(repo.get(order.id).map(|o| o.item), Some("stout".into()));
        assert!(repo.delete(order.id));
        assert!(!repo.delete(order.id));
        assert!(repo.get(order.id).is_none());
    }
}
