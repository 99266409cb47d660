use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{event, Level};

use crate::{
    carousel::{build_storefront_view, Carousel},
    cart::CartContext,
    catalog::CatalogCache,
    dtos::{
        AddToBagResponse, BagItemResponse, BagResponse, ProductDetailResponse, Response,
        StorefrontResponse,
    },
    errors::StorefrontError,
    events::{Event, MessageBroker, PRODUCT_ADDED_TO_BAG_QUEUE_NAME},
};

// traits
pub trait Command {}
pub trait Query {}

pub trait CommandHandler<C: Command, R: Response> {
    async fn handle(&self, input: &C) -> Result<R, StorefrontError>;
}

pub trait QueryHandler<Q: Query, R: Response> {
    async fn handle(&self, input: &Q) -> Result<R, StorefrontError>;
}

// commands
pub struct AdvanceSlideCommand {}
impl Command for AdvanceSlideCommand {}

pub struct RetreatSlideCommand {}
impl Command for RetreatSlideCommand {}

pub struct JumpToSlideCommand {
    pub index: usize,
}
impl Command for JumpToSlideCommand {}

#[derive(Serialize, Deserialize)]
pub struct AddToBagCommand {
    pub product_id: String,
}
impl Command for AddToBagCommand {}

// queries
pub struct GetStorefrontQuery {}
impl Query for GetStorefrontQuery {}

pub struct GetProductQuery {
    pub id: String,
}
impl Query for GetProductQuery {}

pub struct GetBagQuery {}
impl Query for GetBagQuery {}

// query handlers
pub struct GetStorefrontQueryHandler {
    catalog: Arc<CatalogCache>,
    carousel: Arc<RwLock<Carousel>>,
}

impl GetStorefrontQueryHandler {
    pub fn new(catalog: Arc<CatalogCache>, carousel: Arc<RwLock<Carousel>>) -> Self {
        GetStorefrontQueryHandler { catalog, carousel }
    }
}

impl QueryHandler<GetStorefrontQuery, StorefrontResponse> for GetStorefrontQueryHandler {
    async fn handle(&self, _: &GetStorefrontQuery) -> Result<StorefrontResponse, StorefrontError> {
        let snapshot = self.catalog.snapshot().await;
        let mut carousel = self.carousel.write().await;
        carousel.clamp_to(snapshot.products.len());
        build_storefront_view(&snapshot, &carousel)
    }
}

pub struct GetProductQueryHandler {
    catalog: Arc<CatalogCache>,
}

impl GetProductQueryHandler {
    pub fn new(catalog: Arc<CatalogCache>) -> Self {
        GetProductQueryHandler { catalog }
    }
}

impl QueryHandler<GetProductQuery, ProductDetailResponse> for GetProductQueryHandler {
    async fn handle(&self, input: &GetProductQuery) -> Result<ProductDetailResponse, StorefrontError> {
        let snapshot = self.catalog.snapshot().await;

        match snapshot.products.iter().find(|p| p.id == input.id) {
            Some(product) => Ok(ProductDetailResponse {
                id: product.id.clone(),
                name: product.name.clone(),
                image_url: product.image_url.clone(),
                display_price: product.formatted_price()?,
                price: product.price,
                default_price_id: product.default_price_id.clone(),
            }),
            None => Err(StorefrontError::ProductNotFound(input.id.clone())),
        }
    }
}

pub struct GetBagQueryHandler {
    cart: Arc<dyn CartContext>,
}

impl GetBagQueryHandler {
    pub fn new(cart: Arc<dyn CartContext>) -> Self {
        GetBagQueryHandler { cart }
    }
}

impl QueryHandler<GetBagQuery, BagResponse> for GetBagQueryHandler {
    async fn handle(&self, _: &GetBagQuery) -> Result<BagResponse, StorefrontError> {
        let mut items = Vec::new();
        for product in self.cart.items().await {
            items.push(BagItemResponse {
                id: product.id.clone(),
                name: product.name.clone(),
                display_price: product.formatted_price()?,
            });
        }

        Ok(BagResponse { items })
    }
}

// command handlers
pub struct AdvanceSlideCommandHandler {
    catalog: Arc<CatalogCache>,
    carousel: Arc<RwLock<Carousel>>,
}

impl AdvanceSlideCommandHandler {
    pub fn new(catalog: Arc<CatalogCache>, carousel: Arc<RwLock<Carousel>>) -> Self {
        AdvanceSlideCommandHandler { catalog, carousel }
    }
}

impl CommandHandler<AdvanceSlideCommand, StorefrontResponse> for AdvanceSlideCommandHandler {
    async fn handle(&self, _: &AdvanceSlideCommand) -> Result<StorefrontResponse, StorefrontError> {
        let snapshot = self.catalog.snapshot().await;
        let mut carousel = self.carousel.write().await;
        carousel.clamp_to(snapshot.products.len());
        carousel.advance(snapshot.products.len());
        build_storefront_view(&snapshot, &carousel)
    }
}

pub struct RetreatSlideCommandHandler {
    catalog: Arc<CatalogCache>,
    carousel: Arc<RwLock<Carousel>>,
}

impl RetreatSlideCommandHandler {
    pub fn new(catalog: Arc<CatalogCache>, carousel: Arc<RwLock<Carousel>>) -> Self {
        RetreatSlideCommandHandler { catalog, carousel }
    }
}

impl CommandHandler<RetreatSlideCommand, StorefrontResponse> for RetreatSlideCommandHandler {
    async fn handle(&self, _: &RetreatSlideCommand) -> Result<StorefrontResponse, StorefrontError> {
        let snapshot = self.catalog.snapshot().await;
        let mut carousel = self.carousel.write().await;
        carousel.clamp_to(snapshot.products.len());
        carousel.retreat();
        build_storefront_view(&snapshot, &carousel)
    }
}

pub struct JumpToSlideCommandHandler {
    catalog: Arc<CatalogCache>,
    carousel: Arc<RwLock<Carousel>>,
}

impl JumpToSlideCommandHandler {
    pub fn new(catalog: Arc<CatalogCache>, carousel: Arc<RwLock<Carousel>>) -> Self {
        JumpToSlideCommandHandler { catalog, carousel }
    }
}

impl CommandHandler<JumpToSlideCommand, StorefrontResponse> for JumpToSlideCommandHandler {
    async fn handle(&self, input: &JumpToSlideCommand) -> Result<StorefrontResponse, StorefrontError> {
        let snapshot = self.catalog.snapshot().await;
        let mut carousel = self.carousel.write().await;
        carousel.clamp_to(snapshot.products.len());
        carousel.jump_to(input.index, snapshot.products.len())?;
        build_storefront_view(&snapshot, &carousel)
    }
}

pub struct AddToBagCommandHandler {
    catalog: Arc<CatalogCache>,
    cart: Arc<dyn CartContext>,
    message_broker: Arc<dyn MessageBroker>,
}

impl AddToBagCommandHandler {
    pub fn new(
        catalog: Arc<CatalogCache>,
        cart: Arc<dyn CartContext>,
        message_broker: Arc<dyn MessageBroker>,
    ) -> Self {
        AddToBagCommandHandler {
            catalog,
            cart,
            message_broker,
        }
    }
}

impl CommandHandler<AddToBagCommand, AddToBagResponse> for AddToBagCommandHandler {
    async fn handle(&self, input: &AddToBagCommand) -> Result<AddToBagResponse, StorefrontError> {
        let snapshot = self.catalog.snapshot().await;

        let product = match snapshot.products.iter().find(|p| p.id == input.product_id) {
            Some(product) => product.clone(),
            None => return Err(StorefrontError::ProductNotFound(input.product_id.clone())),
        };

        self.cart.add(product.clone()).await;

        // The bag itself is the contract; the queue is informational.
        let bag_event = Event::ProductAddedToBagEvent {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_amount: product.unit_amount,
            currency: product.currency.clone(),
        };
        if let Err(e) = self
            .message_broker
            .publish_message(&bag_event, PRODUCT_ADDED_TO_BAG_QUEUE_NAME)
            .await
        {
            event!(Level::WARN, "Failed to publish bag event: {}", e);
        }

        Ok(AddToBagResponse { id: product.id })
    }
}
