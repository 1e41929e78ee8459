/*
 * Responsibility
 * - Orders の request/response DTO
 * - validation (形式チェック) 用の validate() を持たせる
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::order_repo::Order;

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer: String,
    pub item: String,
    pub quantity: u32,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.customer.trim().is_empty() {
            return Err("customer is required");
        }
        if self.item.trim().is_empty() {
            return Err("item is required");
        }
        if self.quantity == 0 {
            return Err("quantity must be positive");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer: String,
    pub item: String,
    pub quantity: u32,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            customer: o.customer,
            item: o.item,
            quantity: o.quantity,
        }
    }
}
