//! HTTP client for the Mesas REST endpoints.

use mesas_core::mesa::MesaFields;
use mesas_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// A table record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mesa {
    pub id: DbId,
    pub name: String,
    pub capacity: i32,
    pub status: String,
}

/// Body for `POST /mesas`. Status is left to the server default when `None`.
#[derive(Debug, Clone, Serialize)]
pub struct NewMesa {
    pub name: String,
    pub capacity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Payload of `GET /identity`.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    pub full_name: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct MesasApi {
    client: reqwest::Client,
    api_url: String,
}

impl MesasApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
        }
    }

    /// `GET /mesas`
    pub async fn list(&self) -> Result<Vec<Mesa>, ClientError> {
        let response = self
            .client
            .get(format!("{}/mesas", self.api_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `GET /mesas/{id}`
    pub async fn get(&self, id: DbId) -> Result<Mesa, ClientError> {
        let response = self
            .client
            .get(format!("{}/mesas/{id}", self.api_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /mesas`
    pub async fn create(&self, input: &NewMesa) -> Result<Mesa, ClientError> {
        let response = self
            .client
            .post(format!("{}/mesas", self.api_url))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `PUT /mesas/{id}` with a full replacement of the mutable fields.
    pub async fn update(&self, id: DbId, input: &MesaFields) -> Result<Mesa, ClientError> {
        let response = self
            .client
            .put(format!("{}/mesas/{id}", self.api_url))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /mesas/{id}`
    pub async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/mesas/{id}", self.api_url))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// `GET /identity`
    pub async fn identity(&self) -> Result<Identity, ClientError> {
        let response = self
            .client
            .get(format!("{}/identity", self.api_url))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Turn a non-2xx response into [`ClientError::Api`], preferring the
    /// `error` field of a JSON body over the raw text.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
