//! MongoDB implementation of OrderRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc},
    options::IndexOptions,
};
use tracing::instrument;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, Order, OrderFilter, UpdateOrder};
use crate::repository::OrderRepository;

/// Default collection name
pub const ORDERS_COLLECTION: &str = "orders";

/// MongoDB implementation of the OrderRepository
pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, ORDERS_COLLECTION)
    }

    /// Create a new MongoOrderRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Order>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Order> {
        &self.collection
    }

    /// Index the fields the list filters query on
    pub async fn init_indexes(&self) -> OrderResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "products": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_products".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "status": 1 })
                .options(IndexOptions::builder().name("idx_status".to_string()).build())
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Order indexes created successfully");
        Ok(())
    }

    /// Build a MongoDB filter document from OrderFilter
    fn build_filter(filter: &OrderFilter) -> Document {
        let mut doc = doc! {};

        // Equality on an array field matches any element
        if let Some(ref product_id) = filter.product_id {
            doc.insert("products", product_id);
        }

        if let Some(ref status) = filter.status {
            doc.insert("status", status.to_string());
        }

        doc
    }

    fn id_filter(id: &str) -> Document {
        doc! { "_id": id }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, input), fields(products = input.products.len()))]
    async fn create(&self, input: CreateOrder) -> OrderResult<Order> {
        let order = Order::new(input);

        self.collection.insert_one(&order).await?;

        tracing::info!(order_id = %order.id, status = %order.status, "Order created successfully");
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> OrderResult<Option<Order>> {
        let order = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: OrderFilter) -> OrderResult<Vec<Order>> {
        let cursor = self
            .collection
            .find(Self::build_filter(&filter))
            .sort(doc! { "_id": 1 })
            .skip(filter.offset)
            .limit(i64::from(filter.limit))
            .await?;
        let orders: Vec<Order> = cursor.try_collect().await?;

        Ok(orders)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: &str, input: UpdateOrder) -> OrderResult<Order> {
        let filter = Self::id_filter(id);
        let mut order = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        order.apply_update(input);

        self.collection.replace_one(filter, &order).await?;

        tracing::info!(order_id = %id, status = %order.status, "Order updated successfully");
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: OrderFilter) -> OrderResult<u64> {
        let count = self
            .collection
            .count_documents(Self::build_filter(&filter))
            .await?;
        Ok(count)
    }
}
