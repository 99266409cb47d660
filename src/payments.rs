use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::StorefrontError;

#[derive(Debug)]
pub struct PaymentsApiInitializationInfo {
    pub base_url: String,
    pub secret_key: String,
}

/// One product as returned by the provider's listing endpoint with
/// `expand[]=data.default_price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub default_price: PriceObject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceObject {
    pub id: String,
    pub currency: String,
    pub unit_amount: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListObject {
    pub data: Vec<ProductObject>,
    #[serde(default)]
    pub has_more: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn list_products(&self) -> Result<ProductListObject, StorefrontError>;
}

/// Calls the payments provider's product-listing operation over REST.
pub struct StripeCatalogGateway {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

impl StripeCatalogGateway {
    pub fn new(info: &PaymentsApiInitializationInfo) -> Self {
        StripeCatalogGateway {
            http: reqwest::Client::new(),
            base_url: info.base_url.clone(),
            secret_key: info.secret_key.clone(),
        }
    }
}

#[async_trait]
impl CatalogGateway for StripeCatalogGateway {
    async fn list_products(&self) -> Result<ProductListObject, StorefrontError> {
        let response = self
            .http
            .get(format!("{}/v1/products", self.base_url))
            .query(&[("expand[]", "data.default_price")])
            .bearer_auth(&self.secret_key)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<ProductListObject>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_listing_response_with_expanded_prices() {
        let body = r#"{
            "object": "list",
            "data": [
                {
                    "id": "prod_shirt",
                    "object": "product",
                    "name": "Shirt",
                    "images": ["https://files.example.com/shirt.png"],
                    "default_price": {
                        "id": "price_shirt",
                        "object": "price",
                        "currency": "brl",
                        "unit_amount": 9990
                    }
                }
            ],
            "has_more": false
        }"#;

        let list: ProductListObject = serde_json::from_str(body).unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].id, "prod_shirt");
        assert_eq!(list.data[0].default_price.unit_amount, Some(9990));
        assert!(!list.has_more);
    }

    #[test]
    fn tolerates_products_without_images() {
        let body = r#"{
            "data": [
                {
                    "id": "prod_bare",
                    "name": "Bare",
                    "default_price": {
                        "id": "price_bare",
                        "currency": "usd",
                        "unit_amount": 100
                    }
                }
            ]
        }"#;

        let list: ProductListObject = serde_json::from_str(body).unwrap();
        assert!(list.data[0].images.is_empty());
    }
}
