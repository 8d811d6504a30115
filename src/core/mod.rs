// Core layer: the REST client and the controller that drives a page.
pub mod client;
pub mod controller;

pub use client::{ApiClient, SubmitOutcome};
pub use controller::PageController;
