use crate::domain::model::Product;

/// Image shown when a product carries no image reference.
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// Label of the leading no-selection option in the product select.
pub const SELECT_PLACEHOLDER_LABEL: &str = "-- Select a Product --";

/// Paragraph shown in the list region when loading fails.
pub const LIST_ERROR_TEXT: &str = "Error loading products.";

/// Label of the single option shown in the select when loading fails.
pub const SELECT_ERROR_LABEL: &str = "Error loading products";

/// Price with a dollar sign and exactly two decimal places, the format
/// every price on the page uses.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// One rendered product card: the `div.product-item` of the catalog page.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub image_src: String,
    pub title: String,
    pub description: String,
    pub price_label: String,
}

impl ProductCard {
    pub fn render(product: &Product) -> Self {
        Self {
            image_src: product
                .image_url
                .clone()
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            title: product.name.clone(),
            description: product.description.clone().unwrap_or_default(),
            price_label: format_price(product.price),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"product-item\">\
             <img src=\"{}\" alt=\"{}\">\
             <h3>{}</h3>\
             <p>{}</p>\
             <p class=\"price\">{}</p>\
             </div>",
            self.image_src, self.title, self.title, self.description, self.price_label
        )
    }
}

/// The product list region (`div.product-list`): either rendered cards or
/// an error placeholder, never both.
#[derive(Debug, Clone, Default)]
pub struct ProductList {
    cards: Vec<ProductCard>,
    error: Option<String>,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears any prior content and renders one card per product.
    pub fn show_products(&mut self, products: &[Product]) {
        self.error = None;
        self.cards = products.iter().map(ProductCard::render).collect();
    }

    /// Replaces the region content with the loading-failure message.
    pub fn show_error(&mut self) {
        self.cards.clear();
        self.error = Some(LIST_ERROR_TEXT.to_string());
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn to_html(&self) -> String {
        let inner = match &self.error {
            Some(message) => format!("<p>{}</p>", message),
            None => self
                .cards
                .iter()
                .map(ProductCard::to_html)
                .collect::<Vec<_>>()
                .join(""),
        };
        format!("<div class=\"product-list\">{}</div>", inner)
    }
}

/// One entry of the product choice control.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// The product choice control (`select#product`). Ships empty; options are
/// injected after the catalog loads.
#[derive(Debug, Clone, Default)]
pub struct ProductSelect {
    options: Vec<SelectOption>,
}

impl ProductSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the options with the no-selection placeholder followed by
    /// one option per product, labelled with name and price.
    pub fn show_products(&mut self, products: &[Product]) {
        let mut options = Vec::with_capacity(products.len() + 1);
        options.push(SelectOption {
            value: String::new(),
            label: SELECT_PLACEHOLDER_LABEL.to_string(),
        });
        for product in products {
            options.push(SelectOption {
                value: product.id.to_string(),
                label: format!("{} - {}", product.name, format_price(product.price)),
            });
        }
        self.options = options;
    }

    /// Replaces the options with a single unselectable error entry.
    pub fn show_error(&mut self) {
        self.options = vec![SelectOption {
            value: String::new(),
            label: SELECT_ERROR_LABEL.to_string(),
        }];
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn to_html(&self) -> String {
        let options = self
            .options
            .iter()
            .map(|option| format!("<option value=\"{}\">{}</option>", option.value, option.label))
            .collect::<Vec<_>>()
            .join("");
        format!("<select id=\"product\" name=\"product\">{}</select>", options)
    }
}
