// define modules in crate
mod carousel;
mod cart;
mod catalog;
mod cqrs;
mod domain;
mod dtos;
mod errors;
mod events;
mod payments;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use axum_prometheus::PrometheusMetricLayer;
use carousel::Carousel;
use cart::InMemoryCartContext;
use catalog::CatalogCache;
use cqrs::{
    AddToBagCommandHandler, AdvanceSlideCommandHandler, GetBagQueryHandler,
    GetProductQueryHandler, GetStorefrontQueryHandler, JumpToSlideCommandHandler,
    RetreatSlideCommandHandler,
};
use dotenv::dotenv;
use events::{RabbitMqInitializationInfo, RabbitMqMessageBroker};
use payments::{PaymentsApiInitializationInfo, StripeCatalogGateway};
use routes::*;
use state::AppState;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{event, Level};

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .with_ansi(false)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_current_span(true)
        .with_writer(std::fs::File::create(String::from(env::var("LOG_PATH").unwrap())).unwrap())
        .init();

    let payments_info = PaymentsApiInitializationInfo {
        base_url: env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| String::from("https://api.stripe.com")),
        secret_key: String::from(env::var("STRIPE_SECRET_KEY").unwrap()),
    };
    let catalog_gateway = Arc::new(StripeCatalogGateway::new(&payments_info));

    let catalog = Arc::new(CatalogCache::new(catalog_gateway));
    // The storefront cannot build without its first catalog load.
    catalog.revalidate().await.unwrap();

    let carousel = Arc::new(RwLock::new(Carousel::new()));
    let cart = Arc::new(InMemoryCartContext::new());

    let message_broker = Arc::new(
        RabbitMqMessageBroker::new(RabbitMqInitializationInfo::new(
            String::from(env::var("RABBITMQ_URI").unwrap()),
            env::var("RABBITMQ_PORT").unwrap().parse().unwrap(),
            String::from(env::var("RABBITMQ_USER").unwrap()),
            String::from(env::var("RABBITMQ_PASS").unwrap()),
        ))
        .await
        .unwrap(),
    );

    let state = Arc::new(AppState {
        get_storefront_query_handler: Arc::new(GetStorefrontQueryHandler::new(
            catalog.clone(),
            carousel.clone(),
        )),
        get_product_query_handler: Arc::new(GetProductQueryHandler::new(catalog.clone())),
        get_bag_query_handler: Arc::new(GetBagQueryHandler::new(cart.clone())),
        advance_slide_command_handler: Arc::new(AdvanceSlideCommandHandler::new(
            catalog.clone(),
            carousel.clone(),
        )),
        retreat_slide_command_handler: Arc::new(RetreatSlideCommandHandler::new(
            catalog.clone(),
            carousel.clone(),
        )),
        jump_to_slide_command_handler: Arc::new(JumpToSlideCommandHandler::new(
            catalog.clone(),
            carousel.clone(),
        )),
        add_to_bag_command_handler: Arc::new(AddToBagCommandHandler::new(
            catalog.clone(),
            cart.clone(),
            message_broker.clone(),
        )),
    });

    let revalidate_seconds: u64 = env::var("REVALIDATE_SECONDS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(7200);
    let catalog_for_revalidation = catalog.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(revalidate_seconds));
        // The interval fires immediately once; the startup load already covered it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = catalog_for_revalidation.revalidate().await {
                event!(
                    Level::ERROR,
                    "Catalog revalidation failed, serving the previous snapshot: {}",
                    e
                );
            }
        }
    });

    let (prometheus_layer, metrics_handle) = PrometheusMetricLayer::pair();

    let listener =
        tokio::net::TcpListener::bind(format!("0.0.0.0:{}", env::var("AXUM_PORT").unwrap()))
            .await
            .unwrap();

    axum::serve(
        listener,
        Router::new()
            .route("/", get(get_storefront))
            .route("/metrics", get(|| async move { metrics_handle.render() }))
            .route("/storefront/next", post(next_slide))
            .route("/storefront/prev", post(prev_slide))
            .route("/storefront/slides/{index}", post(jump_to_slide))
            .route("/products/{id}", get(get_product))
            .route("/bag", post(add_to_bag).get(get_bag))
            .with_state(state)
            .layer(prometheus_layer)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            ),
    )
    .await
    .unwrap();
}
