/// Element id of the order form.
pub const ORDER_FORM_ID: &str = "orderForm";

/// Element id of the contact form.
pub const CONTACT_FORM_ID: &str = "contactForm";

const ORDER_FIELDS: [&str; 5] = ["product", "quantity", "name", "email", "address"];
const CONTACT_FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

#[derive(Debug, Clone)]
struct FormField {
    name: &'static str,
    value: String,
}

/// Mutable field state of one form. The field set is fixed by the page
/// markup; every field defaults to the empty string.
#[derive(Debug, Clone)]
pub struct FormState {
    id: &'static str,
    fields: Vec<FormField>,
}

impl FormState {
    pub fn order() -> Self {
        Self::with_fields(ORDER_FORM_ID, &ORDER_FIELDS)
    }

    pub fn contact() -> Self {
        Self::with_fields(CONTACT_FORM_ID, &CONTACT_FIELDS)
    }

    fn with_fields(id: &'static str, names: &[&'static str]) -> Self {
        Self {
            id,
            fields: names
                .iter()
                .map(|&name| FormField {
                    name,
                    value: String::new(),
                })
                .collect(),
        }
    }

    pub fn id(&self) -> &str {
        self.id
    }

    /// Sets a field value, like typing into the matching input. Names the
    /// markup does not declare are ignored.
    pub fn fill(&mut self, name: &str, value: impl Into<String>) {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => field.value = value.into(),
            None => tracing::warn!("form '{}' has no field named '{}'", self.id, name),
        }
    }

    /// Current value of a field; empty for unknown names.
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    /// Clears every field back to its default, like `form.reset()`.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn is_reset(&self) -> bool {
        self.fields.iter().all(|field| field.value.is_empty())
    }
}
