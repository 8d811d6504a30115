use crate::domain::model::{ContactRequest, OrderRequest, Product};
use crate::utils::error::Result;
use reqwest::Client;
use serde::Deserialize;

pub const PRODUCTS_PATH: &str = "/api/products";
pub const ORDERS_PATH: &str = "/api/orders/";
pub const CONTACT_PATH: &str = "/api/contact/";

/// Application-level outcome of a submit endpoint: the request produced a
/// response, and the backend either accepted or rejected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { detail: String },
}

/// Failure body shape of the backend: `{"detail": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: Option<String>,
}

/// Thin client over the storefront REST endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads the product collection. Any non-success status, transport
    /// failure, or undecodable body is an error; callers treat them all as
    /// the same loading failure.
    pub async fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = self.endpoint(PRODUCTS_PATH);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("products response status: {}", response.status());

        let products = response.error_for_status()?.json::<Vec<Product>>().await?;
        Ok(products)
    }

    /// Submits an order. `Err` means the request never produced a usable
    /// response; a rejection carries the backend's detail message or, when
    /// the body has none, the status's reason text.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<SubmitOutcome> {
        let url = self.endpoint(ORDERS_PATH);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(order).send().await?;
        Self::submit_outcome(response).await
    }

    /// Transmits a contact message, with the same contract as orders. The
    /// page controller records contact messages locally instead of calling
    /// this; the endpoint support is kept for when the backend route goes
    /// live.
    pub async fn send_contact(&self, contact: &ContactRequest) -> Result<SubmitOutcome> {
        let url = self.endpoint(CONTACT_PATH);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(contact).send().await?;
        Self::submit_outcome(response).await
    }

    async fn submit_outcome(response: reqwest::Response) -> Result<SubmitOutcome> {
        let status = response.status();
        if status.is_success() {
            return Ok(SubmitOutcome::Accepted);
        }

        let body = response.text().await?;
        let detail = serde_json::from_str::<ErrorDetail>(&body)
            .ok()
            .and_then(|err| err.detail)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

        Ok(SubmitOutcome::Rejected { detail })
    }
}
