//! Shop CLI
//!
//! Manage catalog products and buyer orders stored in MongoDB.
//! Documents are printed as pretty JSON on stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use color_eyre::Section;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_orders::{MongoOrderRepository, OrderService};
use domain_products::{MongoProductRepository, ProductService};
use eyre::Result;
use tracing::info;

mod commands;
mod config;
mod input;

use commands::{OrderCommand, ProductCommand};
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "shop")]
#[command(about = "Manage shop products and orders stored in MongoDB")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Catalog products
    #[command(subcommand)]
    Products(ProductCommand),

    /// Buyer orders
    #[command(subcommand)]
    Orders(OrderCommand),

    /// Create the indexes the list filters rely on
    InitIndexes,

    /// Ping the database and report latency
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let cli = Cli::parse();

    let config = Config::from_env()
        .suggestion("Set MONGODB_URL and MONGODB_DATABASE (or MONGO_URL and MONGO_DATABASE)")?;

    init_tracing(&config.environment);

    // Health reports an unreachable server instead of failing to connect
    if let Commands::Health = cli.command {
        let status = commands::probe_health(&config.mongodb).await?;
        input::print_json(&commands::health_report(&status))?;
        if !status.healthy {
            eyre::bail!("MongoDB is unreachable");
        }
        return Ok(());
    }

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    let mongo_client =
        database::mongodb::connect_from_config_with_retry(&config.mongodb, None).await?;
    let db = mongo_client.database(config.mongodb.database());

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    let product_repository = || {
        MongoProductRepository::with_collection(&db, &config.collections.products)
    };
    let order_repository = MongoOrderRepository::with_collection(&db, &config.collections.orders);

    match cli.command {
        Commands::Products(command) => {
            let service = ProductService::new(product_repository());
            commands::run_products(&service, command).await?;
        }
        Commands::Orders(command) => {
            let service = OrderService::new(order_repository, product_repository());
            commands::run_orders(&service, command).await?;
        }
        Commands::InitIndexes => {
            product_repository().init_indexes().await?;
            order_repository.init_indexes().await?;
            info!("Indexes ready");
        }
        Commands::Health => unreachable!("handled before connecting"),
    }

    Ok(())
}
