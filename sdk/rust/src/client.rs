use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::types::{Product, ProductId, ProductPayload};

/// HTTP client for the `/products` API.
///
/// Each method is exactly one round trip. Nothing is retried and no
/// timeout is applied beyond what the wrapped [`Client`] was built with.
#[derive(Debug, Clone)]
pub struct ProductClient {
    client: Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured reqwest client (timeouts, proxies, pooling).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn item_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    /// Fetch the full collection.
    pub async fn list_products(&self) -> ApiResult<Vec<Product>> {
        let resp = self.client.get(self.collection_url()).send().await?;
        decode(resp).await
    }

    /// Fetch a single product.
    pub async fn get_product(&self, id: ProductId) -> ApiResult<Product> {
        let resp = self.client.get(self.item_url(id)).send().await?;
        decode(resp).await
    }

    pub async fn create_product(&self, payload: &ProductPayload) -> ApiResult<Product> {
        let resp = self
            .client
            .post(self.collection_url())
            .json(payload)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> ApiResult<Product> {
        let resp = self
            .client
            .put(self.item_url(id))
            .json(payload)
            .send()
            .await?;
        decode(resp).await
    }

    /// Delete a product.
    ///
    /// Returns the response body when the server sent one; `204 No Content`
    /// and empty 2xx bodies yield `None`.
    pub async fn delete_product(&self, id: ProductId) -> ApiResult<Option<serde_json::Value>> {
        let resp = self.client.delete(self.item_url(id)).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_response(status, &text));
        }
        if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    let status = resp.status();
    let text = resp.text().await?;

    if !status.is_success() {
        return Err(ApiError::from_response(status, &text));
    }

    Ok(serde_json::from_str(&text)?)
}
