//! JSON in, JSON out

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::AsyncReadExt;

/// Path that selects stdin instead of a file
pub const STDIN: &str = "-";

/// Read a JSON document from `source`, or from stdin when it is `-`
pub async fn read_json<T: DeserializeOwned>(source: &Path) -> Result<T> {
    let raw = if source == Path::new(STDIN) {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .wrap_err("Failed to read document from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(source)
            .await
            .wrap_err_with(|| format!("Failed to read {}", source.display()))?
    };

    parse_json(&raw)
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).wrap_err("Input is not a valid JSON document")
}

/// Pretty-print `value` on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_orders::{CreateOrder, OrderStatus};
    use domain_products::UpdateProduct;

    #[test]
    fn test_parse_order_document() {
        let order: CreateOrder =
            parse_json(r#"{"buyerEmail": "a@b.com", "products": ["p1"]}"#).unwrap();
        assert_eq!(order.buyer_email, "a@b.com");
        assert_eq!(order.status, OrderStatus::Created);
    }

    #[test]
    fn test_parse_partial_product_change() {
        let change: UpdateProduct = parse_json(r#"{"likes": 7}"#).unwrap();
        assert_eq!(change.likes, Some(7));
        assert!(change.urls.is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        let err = parse_json::<UpdateProduct>("{likes: 7").unwrap_err();
        assert!(err.to_string().contains("not a valid JSON document"));
    }

    #[tokio::test]
    async fn test_read_json_from_file() {
        let path = std::env::temp_dir().join(format!("shop-cli-{}.json", std::process::id()));
        tokio::fs::write(&path, r#"{"status": "PENDING"}"#).await.unwrap();

        let change: domain_orders::UpdateOrder = read_json(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(change.status, Some(OrderStatus::Pending));
    }

    #[tokio::test]
    async fn test_read_json_missing_file_names_path() {
        let err = read_json::<UpdateProduct>(Path::new("/nonexistent/change.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/change.json"));
    }
}
