use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, ProductFilter, UpdateProduct};

/// Repository trait for Product persistence
///
/// Implementations can use different storage backends. With the `mock`
/// feature enabled, `MockProductRepository` is generated for tests in
/// dependent crates.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>>;

    /// Fetch every product whose ID is in `ids`, in no particular order
    ///
    /// Unknown IDs are skipped.
    async fn get_many(&self, ids: &[String]) -> ProductResult<Vec<Product>>;

    /// List products sorted by ID ascending, honoring offset and limit
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Apply `input` to the stored product and persist it
    ///
    /// Fails with `ProductError::NotFound` when no product has this ID.
    async fn update(&self, id: &str, input: UpdateProduct) -> ProductResult<Product>;

    /// Delete a product by ID, returning how many documents were removed
    async fn delete(&self, id: &str) -> ProductResult<u64>;

    /// Count products matching a filter (offset and limit are ignored)
    async fn count(&self, filter: ProductFilter) -> ProductResult<u64>;
}
