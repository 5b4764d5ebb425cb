use core_config::{FromEnv, env_or_default};
use database::mongodb::MongoConfig;
use domain_orders::mongodb::ORDERS_COLLECTION;
use domain_products::mongodb::PRODUCTS_COLLECTION;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Collection names, overridable per deployment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collections {
    pub products: String,
    pub orders: String,
}

impl FromEnv for Collections {
    fn from_env() -> Result<Self, core_config::ConfigError> {
        Ok(Self {
            products: env_or_default("PRODUCTS_COLLECTION", PRODUCTS_COLLECTION),
            orders: env_or_default("ORDERS_COLLECTION", ORDERS_COLLECTION),
        })
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub collections: Collections,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let collections = Collections::from_env()?;

        Ok(Self {
            mongodb,
            collections,
            environment,
        })
    }
}
