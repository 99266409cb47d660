use serde::{Deserialize, Serialize};

pub trait Response {}

/// One rendered carousel slide.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SlideResponse {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub display_price: String,
    pub detail_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DotResponse {
    pub index: usize,
    pub active: bool,
}

/// The whole storefront view: slides, dot indicators, and the state of the
/// two directional controls.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorefrontResponse {
    pub current_slide: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    pub slides: Vec<SlideResponse>,
    pub dots: Vec<DotResponse>,
}
impl Response for StorefrontResponse {}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProductDetailResponse {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub display_price: String,
    pub price: f64,
    pub default_price_id: String,
}
impl Response for ProductDetailResponse {}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AddToBagResponse {
    pub id: String,
}
impl Response for AddToBagResponse {}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BagItemResponse {
    pub id: String,
    pub name: String,
    pub display_price: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BagResponse {
    pub items: Vec<BagItemResponse>,
}
impl Response for BagResponse {}

#[derive(Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
}
impl Response for ApiError {}
