use std::path::PathBuf;

use clap::{Args, Subcommand};
use database::mongodb::{Client, HealthStatus, MongoConfig, check_health_detailed, client_options};
use domain_orders::{
    CreateOrder, MongoOrderRepository, OrderFilter, OrderService, OrderStatus, UpdateOrder,
};
use domain_products::{
    CreateProduct, MongoProductRepository, ProductFilter, ProductService, UpdateProduct,
};
use eyre::{Result, eyre};
use tracing::info;

use crate::input::{STDIN, print_json, read_json};

/// Where a create/edit document comes from
#[derive(Args, Debug)]
pub struct DocumentArgs {
    /// JSON document path, or `-` for stdin
    #[arg(short, long, default_value = STDIN)]
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct PageArgs {
    /// Maximum number of results
    #[arg(short, long, default_value_t = domain_products::models::DEFAULT_LIMIT)]
    pub limit: u32,

    /// Number of results to skip
    #[arg(short, long, default_value_t = 0)]
    pub offset: u64,
}

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// List products sorted by ID
    List {
        /// Only products carrying this tag title
        #[arg(short, long)]
        tag: Option<String>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one product
    Get { id: String },

    /// Create a product from a JSON document
    Create {
        #[command(flatten)]
        input: DocumentArgs,
    },

    /// Overwrite the fields present in a JSON document
    Edit {
        id: String,

        #[command(flatten)]
        input: DocumentArgs,
    },

    /// Delete a product
    Destroy { id: String },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// List orders sorted by ID
    List {
        /// Only orders referencing this product
        #[arg(short, long)]
        product_id: Option<String>,

        /// Only orders in this status (CREATED, PENDING, COMPLETED)
        #[arg(short, long)]
        status: Option<OrderStatus>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// Show one order with its products resolved
    Get { id: String },

    /// Create an order from a JSON document
    Create {
        #[command(flatten)]
        input: DocumentArgs,
    },

    /// Overwrite the fields present in a JSON document
    Edit {
        id: String,

        #[command(flatten)]
        input: DocumentArgs,
    },
}

/// Ping the server once, without the verified connect and its retries
pub async fn probe_health(config: &MongoConfig) -> Result<HealthStatus> {
    let client = Client::with_options(client_options(config).await?)?;
    Ok(check_health_detailed(&client).await)
}

pub fn health_report(status: &HealthStatus) -> serde_json::Value {
    serde_json::json!({
        "healthy": status.healthy,
        "message": status.message,
        "responseTimeMs": status.response_time_ms,
    })
}

pub async fn run_products(
    service: &ProductService<MongoProductRepository>,
    command: ProductCommand,
) -> Result<()> {
    match command {
        ProductCommand::List { tag, page } => {
            let filter = ProductFilter {
                tag,
                limit: page.limit,
                offset: page.offset,
            };
            print_json(&service.list(filter).await?)
        }
        ProductCommand::Get { id } => {
            let product = service
                .get(&id)
                .await?
                .ok_or_else(|| eyre!("Product {} not found", id))?;
            print_json(&product)
        }
        ProductCommand::Create { input } => {
            let input: CreateProduct = read_json(&input.file).await?;
            let product = service.create(input).await?;
            info!(product_id = %product.id, "Product created");
            print_json(&product)
        }
        ProductCommand::Edit { id, input } => {
            let change: UpdateProduct = read_json(&input.file).await?;
            print_json(&service.edit(&id, change).await?)
        }
        ProductCommand::Destroy { id } => print_json(&service.destroy(&id).await?),
    }
}

pub async fn run_orders(
    service: &OrderService<MongoOrderRepository, MongoProductRepository>,
    command: OrderCommand,
) -> Result<()> {
    match command {
        OrderCommand::List {
            product_id,
            status,
            page,
        } => {
            let filter = OrderFilter {
                product_id,
                status,
                limit: page.limit,
                offset: page.offset,
            };
            print_json(&service.list(filter).await?)
        }
        OrderCommand::Get { id } => {
            let order = service
                .get(&id)
                .await?
                .ok_or_else(|| eyre!("Order {} not found", id))?;
            print_json(&order)
        }
        OrderCommand::Create { input } => {
            let input: CreateOrder = read_json(&input.file).await?;
            let order = service.create(input).await?;
            info!(order_id = %order.id, "Order created");
            print_json(&order)
        }
        OrderCommand::Edit { id, input } => {
            let change: UpdateOrder = read_json(&input.file).await?;
            print_json(&service.edit(&id, change).await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_probe_health_reports_unreachable_server() {
        let mut config = MongoConfig::with_database("mongodb://127.0.0.1:1", "shop");
        config.connect_timeout_secs = 1;
        config.server_selection_timeout_secs = 1;

        let status = probe_health(&config).await.unwrap();

        assert!(!status.healthy);
        assert!(status.message.is_some());

        let report = health_report(&status);
        assert_eq!(report["healthy"], false);
        assert!(report["message"].is_string());
        assert!(report["responseTimeMs"].is_u64());
    }

    #[test]
    fn test_health_report_for_healthy_server() {
        let status = HealthStatus {
            healthy: true,
            message: None,
            response_time_ms: 3,
        };

        let report = health_report(&status);
        assert_eq!(
            report,
            serde_json::json!({ "healthy": true, "message": null, "responseTimeMs": 3 })
        );
    }
}
