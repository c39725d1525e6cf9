pub mod client;
pub mod service;

pub use crate::domain::model::{MakeSummary, TrimSummary, Vehicle, VehicleAddedEvent};
pub use crate::domain::ports::{EventPublisher, VehicleApi};
pub use crate::utils::error::Result;
