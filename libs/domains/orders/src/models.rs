use std::collections::HashMap;

use domain_products::{Product, new_document_id};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use validator::{Validate, ValidationError};

/// Default page size for list queries
pub const DEFAULT_LIMIT: u32 = 25;

/// Order status
///
/// Any status may be set at any time; there are no transition rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Created,
    Pending,
    Completed,
}

/// Order entity as stored in MongoDB
///
/// `products` holds product IDs; see [`PopulatedOrder`] for the resolved form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub buyer_email: String,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Order with its product references replaced by product documents
///
/// References that did not resolve are left out; the remaining products keep
/// the order of the stored IDs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedOrder {
    #[serde(rename = "_id")]
    pub id: String,
    pub buyer_email: String,
    pub products: Vec<Product>,
    pub status: OrderStatus,
}

/// DTO for creating a new order
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    /// Caller-chosen identifier; generated when absent
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub id: Option<String>,
    #[validate(length(min = 1))]
    pub buyer_email: String,
    #[serde(default)]
    #[validate(custom(function = "validate_product_ids"))]
    pub products: Vec<String>,
    #[serde(default)]
    pub status: OrderStatus,
}

/// DTO for editing an existing order
///
/// Fields that are `Some` replace the stored values. `products` takes IDs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateOrder {
    #[validate(length(min = 1))]
    pub buyer_email: Option<String>,
    #[validate(custom(function = "validate_product_ids"))]
    pub products: Option<Vec<String>>,
    pub status: Option<OrderStatus>,
}

/// Query options for listing orders; set filters are AND-combined
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    /// Only orders referencing this product
    pub product_id: Option<String>,
    pub status: Option<OrderStatus>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for OrderFilter {
    fn default() -> Self {
        Self {
            product_id: None,
            status: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

fn validate_product_ids(ids: &[String]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| id.is_empty()) {
        let mut err = ValidationError::new("empty_product_id");
        err.message = Some("product IDs must not be empty".into());
        return Err(err);
    }
    Ok(())
}

impl Order {
    /// Create a new order from CreateOrder DTO
    pub fn new(input: CreateOrder) -> Self {
        Self {
            id: input.id.unwrap_or_else(new_document_id),
            buyer_email: input.buyer_email,
            products: input.products,
            status: input.status,
        }
    }

    /// Apply updates from UpdateOrder DTO
    pub fn apply_update(&mut self, update: UpdateOrder) {
        if let Some(buyer_email) = update.buyer_email {
            self.buyer_email = buyer_email;
        }
        if let Some(products) = update.products {
            self.products = products;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }

    /// Attach product documents to this order's references
    ///
    /// `found` may be in any order and may lack some IDs. A product listed
    /// twice in the order appears twice in the result.
    pub fn populate(self, found: Vec<Product>) -> PopulatedOrder {
        let by_id: HashMap<String, Product> = found
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        let products = self
            .products
            .iter()
            .filter_map(|id| by_id.get(id).cloned())
            .collect();

        PopulatedOrder {
            id: self.id,
            buyer_email: self.buyer_email,
            products,
            status: self.status,
        }
    }
}

impl PopulatedOrder {
    /// IDs of the attached products, in order
    pub fn product_ids(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.id.as_str()).collect()
    }
}
