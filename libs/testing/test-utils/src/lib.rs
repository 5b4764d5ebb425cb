//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let db = mongo.database();
//!     let product_id = builder.id("product", 1);
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic values
///
/// Values derive from a seed, so a test produces the same identifiers on
/// every run.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from a hash of the test name
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_order");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Document identifier; zero-padded `n` keeps lexicographic order numeric
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.id("product", 3), "product-7-0003");
    /// assert!(builder.id("product", 9) < builder.id("product", 10));
    /// ```
    pub fn id(&self, prefix: &str, n: u32) -> String {
        format!("{}-{}-{:04}", prefix, self.seed, n)
    }

    /// Buyer email address unique to this builder
    pub fn email(&self, local: &str) -> String {
        format!("{}+{}@example.test", local, self.seed)
    }

    /// Descriptive text tagged with the seed
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that IDs appear in strictly ascending order
    pub fn assert_sorted_ids<'a>(ids: impl IntoIterator<Item = &'a str>, context: &str) {
        let ids: Vec<&str> = ids.into_iter().collect();
        for pair in ids.windows(2) {
            assert!(
                pair[0] < pair[1],
                "{}: ids not ascending: {:?} then {:?}",
                context,
                pair[0],
                pair[1]
            );
        }
    }
}
