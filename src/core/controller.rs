use crate::core::client::{ApiClient, SubmitOutcome};
use crate::domain::model::{ContactRequest, OrderRequest};
use crate::domain::ports::Notifier;
use crate::page::Page;

/// Acknowledgment shown after the backend accepts an order.
pub const ORDER_SUCCESS_MESSAGE: &str = "Order placed successfully!";

/// Prefix of the message shown when the backend rejects an order; the
/// backend's detail text is appended after a colon.
pub const ORDER_FAILURE_PREFIX: &str = "Failed to place order";

/// Message shown when an order request never reaches a usable response.
pub const ORDER_TRANSPORT_MESSAGE: &str = "An error occurred while placing your order.";

/// Acknowledgment shown after a contact message is recorded.
pub const CONTACT_THANKS_MESSAGE: &str =
    "Thank you for your message! We will get back to you shortly.";

/// Drives a [`Page`] through its lifecycle: load products when the page is
/// ready, then react to form submissions. All outcomes end in a notifier
/// message or updated page state; nothing here is fatal.
#[derive(Debug)]
pub struct PageController<N: Notifier> {
    client: ApiClient,
    notifier: N,
}

impl<N: Notifier> PageController<N> {
    pub fn new(client: ApiClient, notifier: N) -> Self {
        Self { client, notifier }
    }

    /// Entry point once a page exists. Pages without a product region skip
    /// the fetch entirely.
    pub async fn ready(&self, page: &mut Page) {
        if !page.has_product_target() {
            tracing::debug!("page has no product regions, skipping product load");
            return;
        }
        self.load_products(page).await;
    }

    /// Fetches the product collection and pushes it into whichever regions
    /// the page has. On failure every present region shows its error
    /// placeholder instead.
    pub async fn load_products(&self, page: &mut Page) {
        match self.client.fetch_products().await {
            Ok(products) => {
                tracing::info!("🛒 Loaded {} products", products.len());
                if let Some(list) = page.product_list.as_mut() {
                    list.show_products(&products);
                }
                if let Some(select) = page.product_select.as_mut() {
                    select.show_products(&products);
                }
            }
            Err(err) => {
                tracing::error!("Error fetching products: {}", err);
                if let Some(list) = page.product_list.as_mut() {
                    list.show_error();
                }
                if let Some(select) = page.product_select.as_mut() {
                    select.show_error();
                }
            }
        }
    }

    /// Submits the order form. The form is cleared only when the backend
    /// accepts the order; on rejection or transport failure the input stays
    /// in place so the visitor can retry.
    pub async fn submit_order(&self, page: &mut Page) {
        let Some(form) = page.order_form.as_mut() else {
            tracing::debug!("order submit ignored: page has no order form");
            return;
        };

        let order = OrderRequest {
            product_id: parse_int_field(form.value("product")),
            quantity: parse_int_field(form.value("quantity")),
            customer_name: form.value("name").to_string(),
            customer_email: form.value("email").to_string(),
            shipping_address: form.value("address").to_string(),
        };

        match self.client.place_order(&order).await {
            Ok(SubmitOutcome::Accepted) => {
                tracing::info!("🛒 Order accepted for product {}", order.product_id);
                self.notifier.alert(ORDER_SUCCESS_MESSAGE);
                form.reset();
            }
            Ok(SubmitOutcome::Rejected { detail }) => {
                tracing::warn!("Order rejected: {}", detail);
                self.notifier
                    .alert(&format!("{}: {}", ORDER_FAILURE_PREFIX, detail));
            }
            Err(err) => {
                tracing::error!("Error placing order: {}", err);
                self.notifier.alert(ORDER_TRANSPORT_MESSAGE);
            }
        }
    }

    /// Handles the contact form. Messages are recorded in the log and the
    /// sender is thanked; the contact endpoint is not called until the
    /// backend route goes live.
    pub async fn submit_contact(&self, page: &mut Page) {
        let Some(form) = page.contact_form.as_mut() else {
            tracing::debug!("contact submit ignored: page has no contact form");
            return;
        };

        let contact = ContactRequest {
            name: form.value("name").to_string(),
            email: form.value("email").to_string(),
            subject: form.value("subject").to_string(),
            message: form.value("message").to_string(),
        };

        tracing::info!("📨 Contact form submitted: {:?}", contact);
        self.notifier.alert(CONTACT_THANKS_MESSAGE);
        form.reset();
    }
}

/// Numeric form fields arrive as text; anything unparsable becomes 0 and is
/// left for the backend to reject.
fn parse_int_field(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, Default)]
    struct RecordingNotifier {
        alerts: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingNotifier {
        fn alerts(&self) -> Vec<String> {
            self.alerts.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.alerts.lock().unwrap().push(message.to_string());
        }
    }

    fn controller_for(base_url: &str) -> (PageController<RecordingNotifier>, RecordingNotifier) {
        let notifier = RecordingNotifier::default();
        let controller = PageController::new(ApiClient::new(base_url), notifier.clone());
        (controller, notifier)
    }

    fn fill_order_form(page: &mut Page) {
        let form = page.order_form.as_mut().unwrap();
        form.fill("product", "1");
        form.fill("quantity", "2");
        form.fill("name", "Ada Lovelace");
        form.fill("email", "ada@example.com");
        form.fill("address", "12 Analytical St");
    }

    #[tokio::test]
    async fn test_ready_renders_cards_and_options() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/products");
            then.status(200).json_body(serde_json::json!([
                {"id": 1, "name": "Product 1", "description": "Desc 1",
                 "image_url": "image1.jpg", "price": 10.99},
                {"id": 2, "name": "Product 2", "price": 5.0}
            ]));
        });

        let (controller, _) = controller_for(&server.base_url());
        let mut page = Page::storefront();
        controller.ready(&mut page).await;

        api_mock.assert();

        let list = page.product_list.as_ref().unwrap();
        assert_eq!(list.cards().len(), 2);
        assert_eq!(list.cards()[0].title, "Product 1");
        assert_eq!(list.cards()[0].price_label, "$10.99");
        assert_eq!(list.cards()[1].image_src, "placeholder.jpg");
        assert!(list.error().is_none());

        let options = page.product_select.as_ref().unwrap().options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].label, "-- Select a Product --");
        assert_eq!(options[1].value, "1");
        assert_eq!(options[1].label, "Product 1 - $10.99");
        assert_eq!(options[2].label, "Product 2 - $5.00");
    }

    #[tokio::test]
    async fn test_ready_with_empty_catalog() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/products");
            then.status(200).json_body(serde_json::json!([]));
        });

        let (controller, _) = controller_for(&server.base_url());
        let mut page = Page::storefront();
        controller.ready(&mut page).await;

        let list = page.product_list.as_ref().unwrap();
        assert!(list.cards().is_empty());
        assert!(list.error().is_none());

        // Only the placeholder option remains.
        let options = page.product_select.as_ref().unwrap().options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "-- Select a Product --");
    }

    #[tokio::test]
    async fn test_ready_shows_error_placeholders_on_server_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/products");
            then.status(500);
        });

        let (controller, _) = controller_for(&server.base_url());
        let mut page = Page::storefront();
        controller.ready(&mut page).await;

        let list = page.product_list.as_ref().unwrap();
        assert_eq!(list.error(), Some("Error loading products."));
        assert!(list.cards().is_empty());

        let options = page.product_select.as_ref().unwrap().options();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "Error loading products");
    }

    #[tokio::test]
    async fn test_ready_treats_undecodable_body_as_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/products");
            then.status(200).body("not json");
        });

        let (controller, _) = controller_for(&server.base_url());
        let mut page = Page::storefront();
        controller.ready(&mut page).await;

        let list = page.product_list.as_ref().unwrap();
        assert_eq!(list.error(), Some("Error loading products."));
    }

    #[tokio::test]
    async fn test_ready_survives_unreachable_backend() {
        let (controller, _) = controller_for("http://127.0.0.1:0");
        let mut page = Page::storefront();
        controller.ready(&mut page).await;

        assert_eq!(
            page.product_list.as_ref().unwrap().error(),
            Some("Error loading products.")
        );
    }

    #[tokio::test]
    async fn test_ready_skips_fetch_without_product_regions() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/products");
            then.status(200).json_body(serde_json::json!([]));
        });

        let (controller, _) = controller_for(&server.base_url());
        let mut page = Page::contact();
        controller.ready(&mut page).await;

        api_mock.assert_hits(0);
    }

    #[tokio::test]
    async fn test_submit_order_accepted_resets_form() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/orders/").json_body(serde_json::json!({
                "product_id": 1,
                "quantity": 2,
                "customer_name": "Ada Lovelace",
                "customer_email": "ada@example.com",
                "shipping_address": "12 Analytical St"
            }));
            then.status(200).json_body(serde_json::json!({}));
        });

        let (controller, notifier) = controller_for(&server.base_url());
        let mut page = Page::order();
        fill_order_form(&mut page);
        controller.submit_order(&mut page).await;

        api_mock.assert();
        assert_eq!(notifier.alerts(), vec!["Order placed successfully!"]);
        assert!(page.order_form.as_ref().unwrap().is_reset());
    }

    #[tokio::test]
    async fn test_submit_order_rejected_keeps_form() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/orders/");
            then.status(400)
                .json_body(serde_json::json!({"detail": "Product out of stock"}));
        });

        let (controller, notifier) = controller_for(&server.base_url());
        let mut page = Page::order();
        fill_order_form(&mut page);
        controller.submit_order(&mut page).await;

        assert_eq!(
            notifier.alerts(),
            vec!["Failed to place order: Product out of stock"]
        );
        let form = page.order_form.as_ref().unwrap();
        assert!(!form.is_reset());
        assert_eq!(form.value("name"), "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_submit_order_rejection_without_detail_uses_status_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/orders/");
            then.status(400).json_body(serde_json::json!({}));
        });

        let (controller, notifier) = controller_for(&server.base_url());
        let mut page = Page::order();
        fill_order_form(&mut page);
        controller.submit_order(&mut page).await;

        assert_eq!(notifier.alerts(), vec!["Failed to place order: Bad Request"]);
    }

    #[tokio::test]
    async fn test_submit_order_transport_failure_keeps_form() {
        let (controller, notifier) = controller_for("http://127.0.0.1:0");
        let mut page = Page::order();
        fill_order_form(&mut page);
        controller.submit_order(&mut page).await;

        assert_eq!(
            notifier.alerts(),
            vec!["An error occurred while placing your order."]
        );
        assert!(!page.order_form.as_ref().unwrap().is_reset());
    }

    #[tokio::test]
    async fn test_submit_order_coerces_blank_numbers_to_zero() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/api/orders/").json_body(serde_json::json!({
                "product_id": 0,
                "quantity": 0,
                "customer_name": "",
                "customer_email": "",
                "shipping_address": ""
            }));
            then.status(400)
                .json_body(serde_json::json!({"detail": "Product not found"}));
        });

        let (controller, notifier) = controller_for(&server.base_url());
        let mut page = Page::order();
        controller.submit_order(&mut page).await;

        api_mock.assert();
        assert_eq!(notifier.alerts(), vec!["Failed to place order: Product not found"]);
    }

    #[tokio::test]
    async fn test_submit_order_without_form_is_a_no_op() {
        let (controller, notifier) = controller_for("http://127.0.0.1:0");
        let mut page = Page::products();
        controller.submit_order(&mut page).await;

        assert!(notifier.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_submit_contact_thanks_and_resets() {
        let (controller, notifier) = controller_for("http://127.0.0.1:0");
        let mut page = Page::contact();
        {
            let form = page.contact_form.as_mut().unwrap();
            form.fill("name", "Ada Lovelace");
            form.fill("email", "ada@example.com");
            form.fill("subject", "Hello");
            form.fill("message", "A question about a product.");
        }
        controller.submit_contact(&mut page).await;

        assert_eq!(
            notifier.alerts(),
            vec!["Thank you for your message! We will get back to you shortly."]
        );
        assert!(page.contact_form.as_ref().unwrap().is_reset());
    }

    #[test]
    fn test_parse_int_field() {
        assert_eq!(parse_int_field("42"), 42);
        assert_eq!(parse_int_field(" 7 "), 7);
        assert_eq!(parse_int_field(""), 0);
        assert_eq!(parse_int_field("abc"), 0);
        assert_eq!(parse_int_field("2.5"), 0);
    }
}
