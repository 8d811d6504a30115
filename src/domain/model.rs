use serde::{Deserialize, Serialize};

/// A catalog entry as served by `GET /api/products`. The optional fields
/// are defaulted at render time, not at decode time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub price: f64,
}

/// Body of `POST /api/orders/`, assembled from the order form fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub product_id: i64,
    pub quantity: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub shipping_address: String,
}

/// A contact inquiry. Built on contact submit; in the current flow it is
/// only recorded to the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
