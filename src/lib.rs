pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::CliConfig, ClientConfig};
pub use crate::core::client::{CarQueryClient, QueryKind};
pub use crate::core::service::{ConsolePublisher, VehicleService};
pub use crate::domain::model::{MakeSummary, TrimSummary, Vehicle, VehicleAddedEvent, VehicleSize};
pub use crate::domain::ports::{EventPublisher, VehicleApi};
pub use crate::utils::error::{LookupError, Result};
