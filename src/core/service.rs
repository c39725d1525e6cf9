use crate::domain::model::{MakeSummary, TrimSummary, Vehicle, VehicleAddedEvent};
use crate::domain::ports::{EventPublisher, VehicleApi};
use crate::utils::error::{LookupError, Result};
use serde_json::{Map, Value};

/// Default publisher: writes one human-readable line per event to stdout.
pub struct ConsolePublisher;

impl EventPublisher for ConsolePublisher {
    fn publish(&self, event: &VehicleAddedEvent) {
        println!("Event published: {}", event);
    }
}

/// Reduced lookup surface over the raw API, plus vehicle assembly.
///
/// Unlike the client, which tolerates malformed wire payloads, this layer
/// trusts the upstream shape: a response missing an expected key is an
/// error, not a default.
pub struct VehicleService<A: VehicleApi, P: EventPublisher> {
    api: A,
    publisher: P,
}

impl<A: VehicleApi, P: EventPublisher> VehicleService<A, P> {
    pub fn new(api: A, publisher: P) -> Self {
        Self { api, publisher }
    }

    /// Every model year the upstream covers, `min_year..=max_year`.
    pub async fn get_years(&self) -> Result<Vec<i32>> {
        let response = self.api.get_years().await?;
        let years = expect_key(&response, "Years")?;
        let min_year = int_field(years, "min_year")?;
        let max_year = int_field(years, "max_year")?;
        Ok((min_year..=max_year).collect())
    }

    /// Makes for a model year, in upstream order.
    pub async fn get_makes(&self, year: i32) -> Result<Vec<MakeSummary>> {
        let response = self.api.get_makes(year).await?;
        let makes = expect_key(&response, "Makes")?;
        Ok(serde_json::from_value(makes.clone())?)
    }

    /// Models for a year and make. Returned as the raw upstream records,
    /// not reduced like makes and trims are.
    pub async fn get_models(&self, year: i32, make: &str) -> Result<Vec<Value>> {
        let response = self.api.get_models(year, make).await?;
        let models = expect_key(&response, "Models")?;
        Ok(serde_json::from_value(models.clone())?)
    }

    /// Trims for a year, make and model, in upstream order.
    pub async fn get_trims(&self, year: i32, make: &str, model: &str) -> Result<Vec<TrimSummary>> {
        let response = self.api.get_trims(year, make, model).await?;
        let trims = expect_key(&response, "Trims")?;
        Ok(serde_json::from_value(trims.clone())?)
    }

    /// Assembles a vehicle: looks up the body style for `model_id`, assigns
    /// it, and announces the vehicle through the publisher. A model id that
    /// resolves to no real body style fails vehicle validation; that error
    /// is not intercepted here.
    pub async fn get_vehicle(
        &self,
        year: i32,
        make: &str,
        model: &str,
        model_id: i64,
    ) -> Result<Vehicle> {
        let mut vehicle = Vehicle::new(year, make, model)?;
        let body_style = self.api.get_vehicle_body_style(model_id).await?;
        vehicle.set_vehicle_type(body_style)?;

        let event = VehicleAddedEvent::new(vehicle.clone());
        self.publisher.publish(&event);

        Ok(vehicle)
    }
}

fn expect_key<'a>(response: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    response.get(key).ok_or_else(|| LookupError::MissingKeyError {
        key: key.to_string(),
    })
}

fn int_field(value: &Value, field: &str) -> Result<i32> {
    let raw = value.get(field).ok_or_else(|| LookupError::MissingKeyError {
        key: field.to_string(),
    })?;

    match raw {
        Value::String(s) => s.parse::<i32>().map_err(|e| LookupError::InvalidFieldValueError {
            field: field.to_string(),
            value: s.clone(),
            reason: e.to_string(),
        }),
        Value::Number(n) => n
            .as_i64()
            .map(|n| n as i32)
            .ok_or_else(|| LookupError::InvalidFieldValueError {
                field: field.to_string(),
                value: n.to_string(),
                reason: "expected an integer year".to_string(),
            }),
        other => Err(LookupError::InvalidFieldValueError {
            field: field.to_string(),
            value: other.to_string(),
            reason: "expected a year string".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingPublisher {
        events: Arc<Mutex<Vec<VehicleAddedEvent>>>,
    }

    impl RecordingPublisher {
        fn published(&self) -> Vec<VehicleAddedEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl EventPublisher for RecordingPublisher {
        fn publish(&self, event: &VehicleAddedEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    /// Canned responses, keyed per operation.
    #[derive(Default)]
    struct FakeApi {
        years: Value,
        makes: Value,
        models: Value,
        trims: Value,
        body_style: String,
    }

    fn as_map(value: &Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[async_trait]
    impl VehicleApi for FakeApi {
        async fn get_years(&self) -> Result<Map<String, Value>> {
            Ok(as_map(&self.years))
        }

        async fn get_makes(&self, _year: i32) -> Result<Map<String, Value>> {
            Ok(as_map(&self.makes))
        }

        async fn get_models(&self, _year: i32, _make: &str) -> Result<Map<String, Value>> {
            Ok(as_map(&self.models))
        }

        async fn get_trims(
            &self,
            _year: i32,
            _make: &str,
            _model: &str,
        ) -> Result<Map<String, Value>> {
            Ok(as_map(&self.trims))
        }

        async fn get_vehicle_body_style(&self, _model_id: i64) -> Result<String> {
            Ok(self.body_style.clone())
        }
    }

    fn service_with(api: FakeApi) -> (VehicleService<FakeApi, RecordingPublisher>, RecordingPublisher) {
        let publisher = RecordingPublisher::default();
        (VehicleService::new(api, publisher.clone()), publisher)
    }

    #[tokio::test]
    async fn test_get_years_expands_range_inclusive() {
        let (service, _) = service_with(FakeApi {
            years: json!({"Years": {"min_year": "2000", "max_year": "2020"}}),
            ..FakeApi::default()
        });

        let years = service.get_years().await.unwrap();

        assert_eq!(years.len(), 21);
        assert_eq!(years.first(), Some(&2000));
        assert_eq!(years.last(), Some(&2020));
    }

    #[tokio::test]
    async fn test_get_years_fails_on_missing_structure() {
        let (service, _) = service_with(FakeApi {
            years: json!({}),
            ..FakeApi::default()
        });

        let err = service.get_years().await.unwrap_err();
        assert!(matches!(err, LookupError::MissingKeyError { ref key } if key == "Years"));
    }

    #[tokio::test]
    async fn test_get_years_fails_on_missing_min_year() {
        let (service, _) = service_with(FakeApi {
            years: json!({"Years": {"max_year": "2020"}}),
            ..FakeApi::default()
        });

        let err = service.get_years().await.unwrap_err();
        assert!(matches!(err, LookupError::MissingKeyError { ref key } if key == "min_year"));
    }

    #[tokio::test]
    async fn test_get_years_fails_on_unparsable_year() {
        let (service, _) = service_with(FakeApi {
            years: json!({"Years": {"min_year": "twenty", "max_year": "2020"}}),
            ..FakeApi::default()
        });

        let err = service.get_years().await.unwrap_err();
        assert!(matches!(err, LookupError::InvalidFieldValueError { .. }));
    }

    #[tokio::test]
    async fn test_get_makes_reduces_records() {
        let (service, _) = service_with(FakeApi {
            makes: json!({"Makes": [
                {"make_id": "ford", "make_display": "Ford", "make_country": "USA"}
            ]}),
            ..FakeApi::default()
        });

        let makes = service.get_makes(2017).await.unwrap();

        assert_eq!(
            makes,
            vec![MakeSummary {
                make_id: "ford".to_string(),
                make_display: "Ford".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_get_makes_empty_sequence() {
        let (service, _) = service_with(FakeApi {
            makes: json!({"Makes": []}),
            ..FakeApi::default()
        });

        assert!(service.get_makes(2017).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_models_passes_records_through_unreduced() {
        let raw_model = json!({
            "model_id": "mustang",
            "model_name": "Mustang",
            "model_make_id": "ford"
        });
        let (service, _) = service_with(FakeApi {
            models: json!({"Models": [raw_model.clone()]}),
            ..FakeApi::default()
        });

        let models = service.get_models(2017, "Ford").await.unwrap();

        assert_eq!(models, vec![raw_model]);
    }

    #[tokio::test]
    async fn test_get_trims_reduces_records() {
        let (service, _) = service_with(FakeApi {
            trims: json!({"Trims": [
                {"model_id": "mustang_eco", "model_trim": "EcoBoost", "model_year": "2017"}
            ]}),
            ..FakeApi::default()
        });

        let trims = service.get_trims(2017, "ford", "mustang").await.unwrap();

        assert_eq!(
            trims,
            vec![TrimSummary {
                model_id: "mustang_eco".to_string(),
                model_trim: "EcoBoost".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_get_vehicle_assembles_and_publishes_once() {
        let (service, publisher) = service_with(FakeApi {
            body_style: "Sedan".to_string(),
            ..FakeApi::default()
        });

        let vehicle = service.get_vehicle(2017, "Ford", "Mustang", 68830).await.unwrap();

        assert_eq!(vehicle.year, 2017);
        assert_eq!(vehicle.make, "Ford");
        assert_eq!(vehicle.model, "Mustang");
        assert_eq!(vehicle.vehicle_type(), Some("Sedan"));

        let events = publisher.published();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].vehicle, vehicle);
    }

    #[tokio::test]
    async fn test_get_vehicle_unknown_body_style_fails_validation() {
        let (service, publisher) = service_with(FakeApi {
            body_style: "Unknown".to_string(),
            ..FakeApi::default()
        });

        let err = service
            .get_vehicle(2017, "Ford", "Mustang", 7453975397)
            .await
            .unwrap_err();

        assert!(matches!(err, LookupError::ValidationError { .. }));
        assert!(publisher.published().is_empty());
    }
}
