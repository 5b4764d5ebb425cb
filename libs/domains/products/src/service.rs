//! Product Service - the operations callers use

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::ProductResult;
use crate::models::{CreateProduct, DeleteOutcome, Product, ProductFilter, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service: list, get, create, edit, destroy
///
/// Input is validated here before it reaches the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Borrow the repository (used for reference resolution by orders)
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Page through products sorted by ID, optionally restricted to a tag
    ///
    /// A limit of zero yields an empty page.
    #[instrument(skip(self))]
    pub async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        if filter.limit == 0 {
            return Ok(Vec::new());
        }
        self.repository.list(filter).await
    }

    /// Number of products the filter would match across all pages
    #[instrument(skip(self))]
    pub async fn count(&self, filter: ProductFilter) -> ProductResult<u64> {
        self.repository.count(filter).await
    }

    /// Get a product by ID; `None` when it does not exist
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(id).await
    }

    /// Validate and persist a new product
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Overwrite the fields present in `change` and persist
    ///
    /// Returns `ProductError::NotFound` when the product does not exist.
    #[instrument(skip(self, change))]
    pub async fn edit(&self, id: &str, change: UpdateProduct) -> ProductResult<Product> {
        change.validate()?;
        self.repository.update(id, change).await
    }

    /// Delete a product. Orders referencing it keep the dangling ID.
    #[instrument(skip(self))]
    pub async fn destroy(&self, id: &str) -> ProductResult<DeleteOutcome> {
        let deleted_count = self.repository.delete(id).await?;
        Ok(DeleteOutcome { deleted_count })
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::models::{ProductLinks, ProductTag, ProductUrls, ProductUser};
    use crate::repository::MockProductRepository;

    fn create_input(id: &str) -> CreateProduct {
        CreateProduct {
            id: Some(id.to_string()),
            description: Some("Mountain at dawn".to_string()),
            alt_description: None,
            likes: 3,
            urls: ProductUrls {
                regular: "https://img.example/r.jpg".to_string(),
                small: "https://img.example/s.jpg".to_string(),
                thumb: "https://img.example/t.jpg".to_string(),
            },
            links: ProductLinks {
                self_link: format!("https://api.example/photos/{id}"),
                html: format!("https://example/photos/{id}"),
            },
            user: ProductUser {
                id: "u1".to_string(),
                first_name: "Ada".to_string(),
                last_name: None,
                portfolio_url: None,
                username: "ada".to_string(),
            },
            tags: vec![ProductTag::new("mountain")],
        }
    }

    #[tokio::test]
    async fn test_create_delegates_valid_input() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Ok(Product::new(input)));

        let service = ProductService::new(mock_repo);
        let product = service.create(create_input("p1")).await.unwrap();

        assert_eq!(product.id, "p1");
        assert!(product.has_tag("mountain"));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_touching_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let mut input = create_input("p1");
        input.urls.thumb = String::new();

        let service = ProductService::new(mock_repo);
        let err = service.create(input).await.unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_get_missing_product_is_none() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .withf(|id| id == "missing")
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        assert!(service.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_with_zero_limit_skips_query() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().never();

        let service = ProductService::new(mock_repo);
        let filter = ProductFilter {
            limit: 0,
            ..Default::default()
        };

        assert!(service.list(filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_passes_filter_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .withf(|filter| {
                filter.tag.as_deref() == Some("mountain") && filter.limit == 25 && filter.offset == 0
            })
            .returning(|_| Ok(vec![Product::new(create_input("p1"))]));

        let service = ProductService::new(mock_repo);
        let products = service.list(ProductFilter::with_tag("mountain")).await.unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_edit_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update()
            .returning(|id, _| Err(ProductError::NotFound(id.to_string())));

        let service = ProductService::new(mock_repo);
        let change = UpdateProduct {
            likes: Some(10),
            ..Default::default()
        };
        let err = service.edit("nope", change).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(ref id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_edit_rejects_invalid_change() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().never();

        let change = UpdateProduct {
            tags: Some(vec![ProductTag::new("")]),
            ..Default::default()
        };

        let service = ProductService::new(mock_repo);
        let err = service.edit("p1", change).await.unwrap_err();

        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_destroy_reports_deleted_count() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .withf(|id| id == "p1")
            .returning(|_| Ok(1));
        mock_repo
            .expect_delete()
            .withf(|id| id == "gone")
            .returning(|_| Ok(0));

        let service = ProductService::new(mock_repo);

        assert_eq!(service.destroy("p1").await.unwrap().deleted_count, 1);
        assert_eq!(service.destroy("gone").await.unwrap().deleted_count, 0);
    }
}
