//! Order Service - the operations callers use

use std::sync::Arc;

use domain_products::ProductRepository;
use tracing::instrument;
use validator::Validate;

use crate::error::OrderResult;
use crate::models::{CreateOrder, Order, OrderFilter, PopulatedOrder, UpdateOrder};
use crate::repository::OrderRepository;

/// Order service: list, get, create, edit
///
/// Reads that return a single order resolve its product references through
/// the product repository.
pub struct OrderService<R: OrderRepository, P: ProductRepository> {
    orders: Arc<R>,
    products: Arc<P>,
}

impl<R: OrderRepository, P: ProductRepository> OrderService<R, P> {
    pub fn new(orders: R, products: P) -> Self {
        Self {
            orders: Arc::new(orders),
            products: Arc::new(products),
        }
    }

    /// Page through orders sorted by ID
    ///
    /// Listed orders carry product IDs, not resolved products. A limit of
    /// zero yields an empty page.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: OrderFilter) -> OrderResult<Vec<Order>> {
        if filter.limit == 0 {
            return Ok(Vec::new());
        }
        self.orders.list(filter).await
    }

    /// Number of orders the filter would match across all pages
    #[instrument(skip(self))]
    pub async fn count(&self, filter: OrderFilter) -> OrderResult<u64> {
        self.orders.count(filter).await
    }

    /// Get an order with its products resolved; `None` when it does not exist
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> OrderResult<Option<PopulatedOrder>> {
        match self.orders.get_by_id(id).await? {
            Some(order) => Ok(Some(self.resolve_products(order).await?)),
            None => Ok(None),
        }
    }

    /// Validate and persist a new order, then resolve its products
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateOrder) -> OrderResult<PopulatedOrder> {
        input.validate()?;
        let order = self.orders.create(input).await?;
        self.resolve_products(order).await
    }

    /// Overwrite the fields present in `change`, persist, and resolve products
    ///
    /// Returns `OrderError::NotFound` when the order does not exist.
    #[instrument(skip(self, change))]
    pub async fn edit(&self, id: &str, change: UpdateOrder) -> OrderResult<PopulatedOrder> {
        change.validate()?;
        let order = self.orders.update(id, change).await?;
        self.resolve_products(order).await
    }

    /// Replace the order's product IDs with product documents
    ///
    /// One batched lookup per order. IDs without a matching product are
    /// dropped from the result.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn resolve_products(&self, order: Order) -> OrderResult<PopulatedOrder> {
        let found = self.products.get_many(&order.products).await?;

        if found.len() < order.products.len() {
            tracing::debug!(
                referenced = order.products.len(),
                found = found.len(),
                "Some product references did not resolve"
            );
        }

        Ok(order.populate(found))
    }
}

impl<R: OrderRepository, P: ProductRepository> Clone for OrderService<R, P> {
    fn clone(&self) -> Self {
        Self {
            orders: Arc::clone(&self.orders),
            products: Arc::clone(&self.products),
        }
    }
}
