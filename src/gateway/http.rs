use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::ApiConfig;

use super::error::{GatewayError, GatewayResult};

/// Wire envelope shared by every endpoint: success flag, optional payload,
/// optional human-readable message.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Shared HTTP client for the gateway layer. Owns the base URL and the
/// single timeout policy; everything else is per-call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(ApiClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::unwrap_data(path, response).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::unwrap_data(path, response).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::unwrap_data(path, response).await
    }

    /// POST without a body, for action endpoints that only acknowledge.
    pub async fn post_ack(&self, path: &str) -> GatewayResult<()> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::unwrap_ack(path, response).await
    }

    pub async fn post_json_ack<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<()> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::unwrap_ack(path, response).await
    }

    pub async fn put_json_ack<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<()> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::unwrap_ack(path, response).await
    }

    pub async fn delete_ack(&self, path: &str) -> GatewayResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::unwrap_ack(path, response).await
    }

    /// DELETE carrying a JSON body (the add-on endpoint wants the id there).
    pub async fn delete_json_ack<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> GatewayResult<()> {
        let response = self.client.delete(self.url(path)).json(body).send().await?;
        Self::unwrap_ack(path, response).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> GatewayResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::unwrap_data(path, response).await
    }

    async fn unwrap_data<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> GatewayResult<T> {
        let envelope = Self::read_envelope::<T>(path, response).await?;
        match envelope.data {
            Some(data) => Ok(data),
            None => Err(GatewayError::decode(format!(
                "{path}: success response without data"
            ))),
        }
    }

    async fn unwrap_ack<T>(path: &str, response: reqwest::Response) -> GatewayResult<T>
    where
        T: Default,
    {
        Self::read_envelope::<serde_json::Value>(path, response).await?;
        Ok(T::default())
    }

    /// Reads the body and normalizes the envelope: `success: false` becomes
    /// a `Rejected` carrying the backend's message, undecodable bodies on a
    /// 2xx become `Decode`, anything else is transport.
    async fn read_envelope<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> GatewayResult<ApiEnvelope<T>> {
        let status = response.status();
        let bytes = response.bytes().await?;

        let envelope: ApiEnvelope<T> = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(err) if status.is_success() => {
                error!("Undecodable response from {}: {}", path, err);
                return Err(GatewayError::decode(format!("{path}: {err}")));
            }
            Err(_) => {
                error!("HTTP {} from {}", status, path);
                return Err(GatewayError::network(format!("{path}: HTTP {status}")));
            }
        };

        if envelope.success {
            debug!("{} ok", path);
            Ok(envelope)
        } else {
            let message = envelope
                .message
                .unwrap_or_else(|| "Request rejected by server".to_string());
            Err(GatewayError::rejected(message))
        }
    }
}
