use crate::CliClientResult;

use dtf_config::EndpointConfig;
use dtf_core::{GatewayError, GatewayResponse, GatewayResult, TaskGateway, TaskQuery};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client as ReqwestClient;
use reqwest::header::CONTENT_TYPE;

/// HTTP client for the task bot API
pub struct Client {
    endpoint: EndpointConfig,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Scheme and host (e.g., "https://deadlinetaskbot.productlove.ru")
    pub fn new(base_url: &str) -> Self {
        Self::from_endpoint(EndpointConfig {
            base_url: base_url.to_string(),
        })
    }

    pub fn from_endpoint(endpoint: EndpointConfig) -> Self {
        Self {
            endpoint,
            client: ReqwestClient::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url.trim_end_matches('/')
    }

    /// Task creation endpoint, without query string
    pub fn task_url(&self) -> String {
        self.endpoint.task_url()
    }

    /// Create a hard task.
    ///
    /// Any HTTP status is returned as-is; only a request that could not
    /// complete is an error. The server reads the JSON content type even
    /// though a GET carries no body.
    pub async fn create_hard_task(&self, query: &TaskQuery) -> CliClientResult<GatewayResponse> {
        let task_url = self.task_url();
        let url = query.append_to(&task_url);
        debug!("GET {task_url}");

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read response body (status {status}): {e}");
                String::new()
            }
        };

        debug!("Task endpoint answered {status}");
        Ok(GatewayResponse::new(status, body))
    }
}

#[async_trait]
impl TaskGateway for Client {
    async fn send(&self, query: &TaskQuery) -> GatewayResult<GatewayResponse> {
        self.create_hard_task(query)
            .await
            .map_err(|e| GatewayError::transport(e.to_string()))
    }
}
