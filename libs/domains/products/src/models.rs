use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Default page size for list queries
pub const DEFAULT_LIMIT: u32 = 25;

/// Generate a document identifier
///
/// UUIDv7 in simple (hex) form: ascending `_id` order follows creation order.
pub fn new_document_id() -> String {
    Uuid::now_v7().simple().to_string()
}

/// Image URLs in the sizes the storefront renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProductUrls {
    #[validate(length(min = 1))]
    pub regular: String,
    #[validate(length(min = 1))]
    pub small: String,
    #[validate(length(min = 1))]
    pub thumb: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProductLinks {
    /// API link (stored under the key `self`)
    #[serde(rename = "self")]
    #[validate(length(min = 1))]
    pub self_link: String,
    /// Public page
    #[validate(length(min = 1))]
    pub html: String,
}

/// Author of the product photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProductUser {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[validate(length(min = 1))]
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProductTag {
    #[validate(length(min = 1))]
    pub title: String,
}

impl ProductTag {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Product entity - represents a product stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_description: Option<String>,
    pub likes: i64,
    pub urls: ProductUrls,
    pub links: ProductLinks,
    pub user: ProductUser,
    #[serde(default)]
    pub tags: Vec<ProductTag>,
}

/// DTO for creating a new product
///
/// Required fields are enforced by the type; [`Validate`] rejects empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProduct {
    /// Caller-chosen identifier; generated when absent
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    pub likes: i64,
    #[validate(nested)]
    pub urls: ProductUrls,
    #[validate(nested)]
    pub links: ProductLinks,
    #[validate(nested)]
    pub user: ProductUser,
    #[serde(default)]
    #[validate(nested)]
    pub tags: Vec<ProductTag>,
}

/// DTO for editing an existing product
///
/// Every field that is `Some` replaces the stored value. Nested objects are
/// replaced as a whole; they are never merged key by key. The optional text
/// fields use `Some(None)` for an explicit `null`, which clears them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProduct {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub alt_description: Option<Option<String>>,
    pub likes: Option<i64>,
    #[validate(nested)]
    pub urls: Option<ProductUrls>,
    #[validate(nested)]
    pub links: Option<ProductLinks>,
    #[validate(nested)]
    pub user: Option<ProductUser>,
    #[validate(nested)]
    pub tags: Option<Vec<ProductTag>>,
}

/// Wrap any present value, `null` included, in `Some`
///
/// Paired with `#[serde(default)]` so an absent key stays `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Query options for listing products
#[derive(Debug, Clone, Deserialize)]
pub struct ProductFilter {
    /// Only products carrying a tag with this title
    pub tag: Option<String>,
    /// Maximum number of results
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Number of results to skip
    #[serde(default)]
    pub offset: u64,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            tag: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ProductFilter {
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Default::default()
        }
    }
}

/// Result of a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: input.id.unwrap_or_else(new_document_id),
            description: input.description,
            alt_description: input.alt_description,
            likes: input.likes,
            urls: input.urls,
            links: input.links,
            user: input.user,
            tags: input.tags,
        }
    }

    /// Apply updates from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(alt_description) = update.alt_description {
            self.alt_description = alt_description;
        }
        if let Some(likes) = update.likes {
            self.likes = likes;
        }
        if let Some(urls) = update.urls {
            self.urls = urls;
        }
        if let Some(links) = update.links {
            self.links = links;
        }
        if let Some(user) = update.user {
            self.user = user;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
    }

    /// True when one of the tags has exactly this title
    pub fn has_tag(&self, title: &str) -> bool {
        self.tags.iter().any(|tag| tag.title == title)
    }
}
