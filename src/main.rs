use clap::Parser;
use shopfront::utils::{logger, validation::Validate};
use shopfront::{ApiClient, CliConfig, ConsoleNotifier, Page, PageController, PageKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shopfront CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = ApiClient::new(config.base_url.clone());
    let controller = PageController::new(client, ConsoleNotifier);

    let mut page = match config.page {
        PageKind::Products => Page::products(),
        PageKind::Order => Page::order(),
        PageKind::Contact => Page::contact(),
    };

    controller.ready(&mut page).await;

    let html = page.render();
    if !html.is_empty() {
        println!("{}", html);
    }

    match config.page {
        PageKind::Order if config.has_order_input() => {
            if let Some(form) = page.order_form.as_mut() {
                if let Some(product_id) = config.product_id {
                    form.fill("product", product_id.to_string());
                }
                if let Some(quantity) = config.quantity {
                    form.fill("quantity", quantity.to_string());
                }
                if let Some(name) = &config.name {
                    form.fill("name", name.clone());
                }
                if let Some(email) = &config.email {
                    form.fill("email", email.clone());
                }
                if let Some(address) = &config.address {
                    form.fill("address", address.clone());
                }
            }
            controller.submit_order(&mut page).await;
        }
        PageKind::Contact if config.has_contact_input() => {
            if let Some(form) = page.contact_form.as_mut() {
                if let Some(name) = &config.name {
                    form.fill("name", name.clone());
                }
                if let Some(email) = &config.email {
                    form.fill("email", email.clone());
                }
                if let Some(subject) = &config.subject {
                    form.fill("subject", subject.clone());
                }
                if let Some(message) = &config.message {
                    form.fill("message", message.clone());
                }
            }
            controller.submit_contact(&mut page).await;
        }
        _ => {}
    }

    Ok(())
}
