//! # HTTP Backend
//!
//! reqwest-based [`SalesApi`] over the backend's RPC-style endpoints. Every
//! operation is a POST under the configured base URL, authenticated with
//! HTTP basic auth from [`ApiConfig`].

use crate::api::{ApiError, SalesApi};
use crate::config::ApiConfig;
use crate::model::{
    Contragent, CreateOrderResponse, CreateTaskRequest, CreateTaskResponse, Order, Product, Task,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

/// `SalesApi` implementation speaking JSON over HTTP.
pub struct HttpSalesApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpSalesApi {
    /// Builds a client from connection settings.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        if config.base_url.trim().is_empty() {
            return Err(ApiError::Config("base_url is empty".to_string()));
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), name)
    }

    /// Runs one RPC call: POST the payload (if any), demand a success status
    /// and a non-empty body, decode the JSON.
    async fn call<B, R>(&self, name: &str, body: Option<&B>) -> Result<R, ApiError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(name);
        debug!(%url, "Calling backend");

        let mut request = self
            .client
            .post(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        if bytes.is_empty() {
            return Err(ApiError::EmptyResponse);
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Marker for calls that send no payload.
const NO_BODY: Option<&()> = None;

#[async_trait]
impl SalesApi for HttpSalesApi {
    #[instrument(skip(self))]
    async fn get_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.call("getTasks", NO_BODY).await
    }

    #[instrument(skip(self))]
    async fn get_contragents(&self) -> Result<Vec<Contragent>, ApiError> {
        self.call("getContragents", NO_BODY).await
    }

    #[instrument(skip(self))]
    async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        self.call("getProductV2", NO_BODY).await
    }

    #[instrument(skip(self, request))]
    async fn create_task(
        &self,
        request: &CreateTaskRequest,
    ) -> Result<CreateTaskResponse, ApiError> {
        self.call("setTask", Some(request)).await
    }

    #[instrument(skip(self, order))]
    async fn create_order(&self, order: &Order) -> Result<CreateOrderResponse, ApiError> {
        self.call("createOrder", Some(order)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            username: "program".to_string(),
            password: "secret".to_string(),
            timeout_secs: 10,
        }
    }

    #[test]
    fn endpoint_joins_regardless_of_trailing_slash() {
        let api = HttpSalesApi::new(config("http://backend.local/sales/")).unwrap();
        assert_eq!(
            api.endpoint("getTasks"),
            "http://backend.local/sales/getTasks"
        );

        let api = HttpSalesApi::new(config("http://backend.local/sales")).unwrap();
        assert_eq!(
            api.endpoint("createOrder"),
            "http://backend.local/sales/createOrder"
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let result = HttpSalesApi::new(config("  "));
        assert!(matches!(result, Err(ApiError::Config(_))));
    }
}
