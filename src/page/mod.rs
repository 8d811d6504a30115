pub mod form;
pub mod view;

pub use form::FormState;
pub use view::{ProductCard, ProductList, ProductSelect, SelectOption};

/// In-memory stand-in for the storefront DOM. Each region exists only on
/// the pages that carry it; behaviors gate on presence, so a missing region
/// is never an error.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub product_list: Option<ProductList>,
    pub product_select: Option<ProductSelect>,
    pub order_form: Option<FormState>,
    pub contact_form: Option<FormState>,
}

impl Page {
    /// A page with no rendering targets at all.
    pub fn blank() -> Self {
        Self::default()
    }

    /// The catalog page: product cards only.
    pub fn products() -> Self {
        Self {
            product_list: Some(ProductList::new()),
            ..Self::default()
        }
    }

    /// The order page: product choice control plus the order form.
    pub fn order() -> Self {
        Self {
            product_select: Some(ProductSelect::new()),
            order_form: Some(FormState::order()),
            ..Self::default()
        }
    }

    /// The contact page: contact form only.
    pub fn contact() -> Self {
        Self {
            contact_form: Some(FormState::contact()),
            ..Self::default()
        }
    }

    /// Every region on one page.
    pub fn storefront() -> Self {
        Self {
            product_list: Some(ProductList::new()),
            product_select: Some(ProductSelect::new()),
            order_form: Some(FormState::order()),
            contact_form: Some(FormState::contact()),
        }
    }

    /// Whether the page has anywhere to render products into.
    pub fn has_product_target(&self) -> bool {
        self.product_list.is_some() || self.product_select.is_some()
    }

    /// HTML of the dynamic regions, in page order. Forms are static markup
    /// and are not re-rendered.
    pub fn render(&self) -> String {
        let mut parts = Vec::new();
        if let Some(list) = &self.product_list {
            parts.push(list.to_html());
        }
        if let Some(select) = &self.product_select {
            parts.push(select.to_html());
        }
        parts.join("\n")
    }
}
