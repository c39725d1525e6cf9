pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://www.carqueryapi.com/api/0.3/?callback=?";
pub const DEFAULT_USER_AGENT: &str = "PostmanRuntime/7.39.0";

/// Static client configuration: the JSONP endpoint and the header set sent
/// with every request. Injected at construction and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)
    }
}
