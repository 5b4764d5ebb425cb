//! Orders Domain
//!
//! Buyer orders referencing catalog products, stored in MongoDB.
//!
//! Orders store product IDs. [`OrderService::get`], [`OrderService::create`]
//! and [`OrderService::edit`] hand back a [`PopulatedOrder`] whose products
//! were looked up in one batch through a [`domain_products::ProductRepository`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_orders::{CreateOrder, MongoOrderRepository, OrderService, OrderStatus};
//! use domain_products::MongoProductRepository;
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("shop");
//!
//! let service = OrderService::new(
//!     MongoOrderRepository::new(&db),
//!     MongoProductRepository::new(&db),
//! );
//!
//! let order = service
//!     .create(CreateOrder {
//!         id: None,
//!         buyer_email: "a@b.com".to_string(),
//!         products: vec!["p1".to_string()],
//!         status: OrderStatus::default(),
//!     })
//!     .await?;
//! assert_eq!(order.status, OrderStatus::Created);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{OrderError, OrderResult};
pub use models::{CreateOrder, Order, OrderFilter, OrderStatus, PopulatedOrder, UpdateOrder};
pub use mongodb::MongoOrderRepository;
pub use repository::OrderRepository;
pub use service::OrderService;
