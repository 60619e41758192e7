use anyhow::bail;
use anyhow::Result;
use clouseau_client::ApiClientBox;
use clouseau_client::ApiClientFactory;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub struct ApiClientManager {}

impl ApiClientManager {
    /// Builds the API client for the configured `api-url`.
    pub fn get() -> Result<ApiClientBox> {
        let api_url = Config::get(ConfigKey::ApiUrl);
        if api_url.is_empty() {
            bail!("No API URL configured, set api-url in the config file or pass --api-url");
        }

        return Ok(ApiClientFactory::create_http_client(api_url));
    }
}
