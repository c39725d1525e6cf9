use crate::config::ClientConfig;
use crate::domain::model::UNKNOWN_BODY_STYLE;
use crate::domain::ports::VehicleApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde_json::{Map, Value};
use url::form_urlencoded;

/// The five commands the upstream endpoint understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    GetYears,
    GetMakes,
    GetModels,
    GetTrims,
    GetModel,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::GetYears => "getYears",
            QueryKind::GetMakes => "getMakes",
            QueryKind::GetModels => "getModels",
            QueryKind::GetTrims => "getTrims",
            QueryKind::GetModel => "getModel",
        }
    }
}

/// Client for the CarQuery vehicle-data API.
///
/// Each operation issues exactly one GET request against the configured
/// endpoint and unwraps the JSONP envelope the service answers with. HTTP
/// failures propagate to the caller; a payload that fails to parse after
/// unwrapping yields an empty object instead (callers read that as "no
/// data available").
pub struct CarQueryClient {
    config: ClientConfig,
    client: Client,
}

impl CarQueryClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Builds the request URL for a command: base endpoint, `cmd` selector,
    /// then the parameters URL-encoded in the order given. Pure; identical
    /// inputs always produce the identical query string.
    pub fn build_url(&self, kind: QueryKind, params: &[(&str, String)]) -> String {
        let mut url = format!("{}&cmd={}", self.config.base_url, kind.as_str());
        if !params.is_empty() {
            let mut query = form_urlencoded::Serializer::new(String::new());
            for (key, value) in params {
                query.append_pair(key, value);
            }
            url.push('&');
            url.push_str(&query.finish());
        }
        url
    }

    async fn make_api_call(&self, url: String) -> Result<Map<String, Value>> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url.as_str())
            .header(USER_AGENT, self.config.user_agent.as_str())
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("API response status: {}", response.status());
        let body = response.text().await?;
        Ok(clean_response(&body))
    }
}

/// Strips the JSONP envelope (`?(` ... `);`) and parses the remainder.
///
/// Stripping is by character set, not fixed string: leading `?`/`(`/`[` and
/// trailing `]`/`)`/`;` are all trimmed. The `getModel` payload arrives
/// array-wrapped (`?([{...}]);`) and the bracket trimming unwraps it to the
/// inner object. Anything that still fails to parse as an object is reported
/// as a warning and becomes an empty object.
fn clean_response(text: &str) -> Map<String, Value> {
    let json_str = text
        .trim_start_matches(['?', '(', '['])
        .trim_end_matches([']', ')', ';']);

    match serde_json::from_str(json_str) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Error parsing JSON: {}", e);
            Map::new()
        }
    }
}

#[async_trait]
impl VehicleApi for CarQueryClient {
    async fn get_years(&self) -> Result<Map<String, Value>> {
        let url = self.build_url(QueryKind::GetYears, &[]);
        self.make_api_call(url).await
    }

    async fn get_makes(&self, year: i32) -> Result<Map<String, Value>> {
        let url = self.build_url(QueryKind::GetMakes, &[("year", year.to_string())]);
        self.make_api_call(url).await
    }

    async fn get_models(&self, year: i32, make: &str) -> Result<Map<String, Value>> {
        let url = self.build_url(
            QueryKind::GetModels,
            &[("year", year.to_string()), ("make", make.to_string())],
        );
        self.make_api_call(url).await
    }

    async fn get_trims(&self, year: i32, make: &str, model: &str) -> Result<Map<String, Value>> {
        let url = self.build_url(
            QueryKind::GetTrims,
            &[
                ("year", year.to_string()),
                ("make", make.to_string()),
                ("model", model.to_string()),
            ],
        );
        self.make_api_call(url).await
    }

    async fn get_vehicle_body_style(&self, model_id: i64) -> Result<String> {
        let url = self.build_url(QueryKind::GetModel, &[("model", model_id.to_string())]);
        let detail = self.make_api_call(url).await?;
        Ok(detail
            .get("model_body")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_BODY_STYLE)
            .to_string())
    }
}
