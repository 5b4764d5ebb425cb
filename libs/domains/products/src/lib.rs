//! Products Domain
//!
//! Product catalog records stored in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← list / get / create / edit / destroy, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{MongoProductRepository, ProductFilter, ProductService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("shop");
//!
//! let service = ProductService::new(MongoProductRepository::new(&db));
//! let first_page = service.list(ProductFilter::with_tag("nature")).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use models::{
    CreateProduct, DeleteOutcome, Product, ProductFilter, ProductLinks, ProductTag, ProductUrls,
    ProductUser, UpdateProduct, new_document_id,
};
pub use mongodb::MongoProductRepository;
#[cfg(any(test, feature = "mock"))]
pub use repository::MockProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
