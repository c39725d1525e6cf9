use crate::utils::error::{LookupError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel the body-style lookup returns when the detail response carries
/// no usable `model_body` field. Indistinguishable from a genuine "Unknown"
/// style reported by the upstream service.
pub const UNKNOWN_BODY_STYLE: &str = "Unknown";

pub const MIN_MODEL_YEAR: i32 = 1900;
pub const MAX_MODEL_YEAR: i32 = 2100;

/// Reduced make record: id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeSummary {
    pub make_id: String,
    pub make_display: String,
}

/// Reduced trim record: the trim's model id plus trim name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimSummary {
    pub model_id: String,
    pub model_trim: String,
}

/// Rough size class derived from the body-style text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleSize {
    Small,
    Midsize,
    Large,
}

impl VehicleSize {
    pub fn classify(body_style: &str) -> Self {
        let style = body_style.to_ascii_lowercase();
        let matches_any = |keywords: &[&str]| keywords.iter().any(|k| style.contains(k));

        if matches_any(&["subcompact", "minicompact", "compact", "two seater"]) {
            VehicleSize::Small
        } else if matches_any(&["large", "van", "pickup", "truck", "sport utility", "wagon"]) {
            VehicleSize::Large
        } else {
            VehicleSize::Midsize
        }
    }
}

impl fmt::Display for VehicleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleSize::Small => "small",
            VehicleSize::Midsize => "midsize",
            VehicleSize::Large => "large",
        };
        f.write_str(label)
    }
}

/// A vehicle keyed by (year, make, model). The body style is assigned after
/// construction via [`Vehicle::set_vehicle_type`], which rejects styles that
/// did not resolve to anything real.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub year: i32,
    pub make: String,
    pub model: String,
    vehicle_type: Option<String>,
}

impl Vehicle {
    pub fn new(year: i32, make: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let make = make.into();
        let model = model.into();

        if !(MIN_MODEL_YEAR..=MAX_MODEL_YEAR).contains(&year) {
            return Err(LookupError::ValidationError {
                message: format!("model year out of range: {}", year),
            });
        }
        if make.trim().is_empty() {
            return Err(LookupError::ValidationError {
                message: "make cannot be empty".to_string(),
            });
        }
        if model.trim().is_empty() {
            return Err(LookupError::ValidationError {
                message: "model cannot be empty".to_string(),
            });
        }

        Ok(Self {
            year,
            make,
            model,
            vehicle_type: None,
        })
    }

    pub fn vehicle_type(&self) -> Option<&str> {
        self.vehicle_type.as_deref()
    }

    /// Assigns the looked-up body style. A blank style or the
    /// [`UNKNOWN_BODY_STYLE`] sentinel means the model id resolved to no
    /// real vehicle, which is not a state this type accepts.
    pub fn set_vehicle_type(&mut self, style: impl Into<String>) -> Result<()> {
        let style = style.into();
        if style.trim().is_empty() || style == UNKNOWN_BODY_STYLE {
            return Err(LookupError::ValidationError {
                message: format!(
                    "no body style resolved for {} {} {}",
                    self.year, self.make, self.model
                ),
            });
        }
        self.vehicle_type = Some(style);
        Ok(())
    }

    /// Size classification, available once a body style has been assigned.
    pub fn size(&self) -> Option<VehicleSize> {
        self.vehicle_type.as_deref().map(VehicleSize::classify)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.year, self.make, self.model)?;
        if let Some(style) = &self.vehicle_type {
            write!(f, " ({})", style)?;
        }
        Ok(())
    }
}

/// Notification emitted after a vehicle has been assembled. Fire and forget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleAddedEvent {
    pub vehicle: Vehicle,
    pub occurred_at: DateTime<Utc>,
}

impl VehicleAddedEvent {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            occurred_at: Utc::now(),
        }
    }
}

impl fmt::Display for VehicleAddedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vehicle added: {}", self.vehicle)
    }
}
