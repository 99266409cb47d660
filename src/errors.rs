use thiserror::Error;

/// Failures the storefront surfaces to callers or to the boot sequence.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("catalog request failed: {0}")]
    CatalogRequest(#[from] reqwest::Error),
    #[error("product {0} has no usable default price")]
    MissingPrice(String),
    #[error("product {product_id} has a negative price amount: {unit_amount}")]
    NegativePrice { product_id: String, unit_amount: i64 },
    #[error("unknown currency code {0}")]
    UnknownCurrency(String),
    #[error("product {0} is not in the current catalog")]
    ProductNotFound(String),
    #[error("slide index {index} is out of range for {slide_count} slides")]
    SlideOutOfRange { index: usize, slide_count: usize },
    #[error("message broker failure: {0}")]
    Broker(String),
    #[error("failed to publish event: {0}")]
    Publish(String),
}
