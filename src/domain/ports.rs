use crate::domain::model::VehicleAddedEvent;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// The raw CarQuery operations. Responses are the upstream JSON objects
/// after envelope stripping; the service layer does the reshaping.
#[async_trait]
pub trait VehicleApi: Send + Sync {
    async fn get_years(&self) -> Result<Map<String, Value>>;

    async fn get_makes(&self, year: i32) -> Result<Map<String, Value>>;

    async fn get_models(&self, year: i32, make: &str) -> Result<Map<String, Value>>;

    async fn get_trims(&self, year: i32, make: &str, model: &str) -> Result<Map<String, Value>>;

    async fn get_vehicle_body_style(&self, model_id: i64) -> Result<String>;
}

/// Outbound notification sink. No acknowledgment, no delivery guarantee.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: &VehicleAddedEvent);
}
