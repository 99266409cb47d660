use amqprs::{
    callbacks::{DefaultChannelCallback, DefaultConnectionCallback},
    channel::{
        BasicPublishArguments, Channel, ExchangeDeclareArguments, ExchangeType,
        QueueBindArguments, QueueDeclareArguments,
    },
    connection::{Connection, OpenConnectionArguments},
    BasicProperties, DELIVERY_MODE_PERSISTENT,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use crate::errors::StorefrontError;

pub static PRODUCT_ADDED_TO_BAG_QUEUE_NAME: &str = "product.added.to.bag";

pub struct RabbitMqInitializationInfo {
    uri: String,
    port: u16,
    username: String,
    password: String,
}

impl RabbitMqInitializationInfo {
    pub fn new(
        uri: String,
        port: u16,
        username: String,
        password: String,
    ) -> RabbitMqInitializationInfo {
        RabbitMqInitializationInfo {
            uri,
            port,
            username,
            password,
        }
    }
}

// events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ProductAddedToBagEvent {
        product_id: String,
        name: String,
        unit_amount: i64,
        currency: String,
    },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageBroker: Send + Sync {
    async fn publish_message(
        &self,
        event: &Event,
        destination_name: &str,
    ) -> Result<(), StorefrontError>;
}

// event brokers
pub struct RabbitMqMessageBroker {
    connection: Connection,
}

impl RabbitMqMessageBroker {
    pub async fn new(
        init_info: RabbitMqInitializationInfo,
    ) -> Result<RabbitMqMessageBroker, StorefrontError> {
        let connection = Connection::open(&OpenConnectionArguments::new(
            &init_info.uri,
            init_info.port,
            &init_info.username,
            &init_info.password,
        ))
        .await
        .map_err(|e| StorefrontError::Broker(format!("Failed to open RabbitMQ connection: {}", e)))?;

        connection
            .register_callback(DefaultConnectionCallback)
            .await
            .map_err(|e| {
                StorefrontError::Broker(format!("Failed to register connection callback: {}", e))
            })?;

        Ok(RabbitMqMessageBroker { connection })
    }

    pub async fn get_channel(&self, destination: &str) -> Result<Channel, StorefrontError> {
        let channel = self
            .connection
            .open_channel(None)
            .await
            .map_err(|e| StorefrontError::Broker(format!("Failed to get channel: {}", e)))?;

        channel
            .register_callback(DefaultChannelCallback)
            .await
            .map_err(|e| StorefrontError::Broker(format!("Failed to register channel callback: {}", e)))?;
        channel
            .exchange_declare(ExchangeDeclareArguments::new(
                destination,
                &ExchangeType::Fanout.to_string(),
            ))
            .await
            .map_err(|e| StorefrontError::Broker(format!("Failed to declare exchange: {}", e)))?;
        channel
            .queue_declare(QueueDeclareArguments::durable_client_named(destination))
            .await
            .map_err(|e| StorefrontError::Broker(format!("Failed to declare queue: {}", e)))?;
        channel
            .queue_bind(QueueBindArguments::new(destination, destination, ""))
            .await
            .map_err(|e| StorefrontError::Broker(format!("Failed to bind queue: {}", e)))?;

        Ok(channel)
    }
}

#[async_trait]
impl MessageBroker for RabbitMqMessageBroker {
    async fn publish_message(
        &self,
        event: &Event,
        destination_name: &str,
    ) -> Result<(), StorefrontError> {
        let channel = self.get_channel(destination_name).await?;

        let mut delivery_properties = BasicProperties::default();
        delivery_properties.with_delivery_mode(DELIVERY_MODE_PERSISTENT);

        let body = serde_json::to_string(&event)
            .map_err(|e| StorefrontError::Publish(format!("Failed to serialize event: {}", e)))?;
        event!(Level::DEBUG, "publishing {}", body);

        channel
            .basic_publish(
                delivery_properties,
                body.into_bytes(),
                BasicPublishArguments::new(destination_name, ""),
            )
            .await
            .map_err(|e| StorefrontError::Publish(format!("Failed to publish event to broker: {}", e)))
    }
}
