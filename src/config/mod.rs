use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Which of the storefront pages to stand up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Product listing page.
    Products,
    /// Order page with the product select and order form.
    Order,
    /// Contact page.
    Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "shopfront")]
#[command(about = "Storefront page client for browsing products and submitting forms")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:8000")]
    pub base_url: String,

    #[arg(long, value_enum, default_value_t = PageKind::Products)]
    pub page: PageKind,

    #[arg(long, help = "Product id to order")]
    pub product_id: Option<i64>,

    #[arg(long, help = "Quantity to order")]
    pub quantity: Option<i64>,

    #[arg(long, help = "Customer or sender name")]
    pub name: Option<String>,

    #[arg(long, help = "Customer or sender email")]
    pub email: Option<String>,

    #[arg(long, help = "Shipping address for an order")]
    pub address: Option<String>,

    #[arg(long, help = "Subject of a contact message")]
    pub subject: Option<String>,

    #[arg(long, help = "Body of a contact message")]
    pub message: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// True when at least one order form flag was given.
    pub fn has_order_input(&self) -> bool {
        self.product_id.is_some()
            || self.quantity.is_some()
            || self.name.is_some()
            || self.email.is_some()
            || self.address.is_some()
    }

    /// True when at least one contact form flag was given.
    pub fn has_contact_input(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.subject.is_some()
            || self.message.is_some()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("base_url", &self.base_url)
    }
}
