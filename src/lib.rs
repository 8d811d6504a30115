#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod page;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, PageKind};

pub use crate::core::{ApiClient, PageController, SubmitOutcome};
pub use domain::model::{ContactRequest, OrderRequest, Product};
pub use domain::ports::{ConsoleNotifier, Notifier};
pub use page::Page;
pub use utils::error::{Result, ShopfrontError};
