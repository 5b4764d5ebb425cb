use async_trait::async_trait;

use crate::error::OrderResult;
use crate::models::{CreateOrder, Order, OrderFilter, UpdateOrder};

/// Repository trait for Order persistence
///
/// Orders are never deleted, so there is no delete operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order
    async fn create(&self, input: CreateOrder) -> OrderResult<Order>;

    /// Get an order by ID, with product references unresolved
    async fn get_by_id(&self, id: &str) -> OrderResult<Option<Order>>;

    /// List orders sorted by ID ascending, honoring offset and limit
    async fn list(&self, filter: OrderFilter) -> OrderResult<Vec<Order>>;

    /// Apply `input` to the stored order and persist it
    ///
    /// Fails with `OrderError::NotFound` when no order has this ID.
    async fn update(&self, id: &str, input: UpdateOrder) -> OrderResult<Order>;

    /// Count orders matching a filter (offset and limit are ignored)
    async fn count(&self, filter: OrderFilter) -> OrderResult<u64>;
}
