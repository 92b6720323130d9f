//! The create/update form.
//!
//! ```text
//!            start_edit(id) ok
//!   Create ─────────────────────▶ Editing(id)
//!     ▲                               │
//!     └───────────────────────────────┘
//!      create/update/delete ok, or reset
//! ```
//!
//! Failed operations never change the mode.

use catalog_sdk::{Product, ProductId, ProductPayload};
use thiserror::Error;

/// Message shown when the form does not validate.
pub const VALIDATION_MESSAGE: &str = "Please enter a valid product name and a positive price.";

/// Which request a submit issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submit creates a new product.
    #[default]
    Create,
    /// Submit updates the product with this id.
    Editing(ProductId),
}

impl FormMode {
    pub fn editing_id(&self) -> Option<ProductId> {
        match self {
            FormMode::Create => None,
            FormMode::Editing(id) => Some(*id),
        }
    }

    /// Label of the submit control.
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Add Product",
            FormMode::Editing(_) => "Update Product",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("product name is empty")]
    MissingName,

    #[error("price `{0}` is not a positive number")]
    InvalidPrice(String),
}

/// Field contents and mode of the form.
///
/// Fields hold raw text as typed; nothing is parsed until [`validate`].
///
/// [`validate`]: FormState::validate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub price: String,
    pub description: String,
    mode: FormMode,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn editing_id(&self) -> Option<ProductId> {
        self.mode.editing_id()
    }

    /// Load a fetched product and switch to update mode.
    pub(crate) fn begin_edit(&mut self, id: ProductId, product: &Product) {
        self.name = product.name.clone();
        self.price = product.price.to_string();
        self.description = product.description.clone().unwrap_or_default();
        self.mode = FormMode::Editing(id);
    }

    /// Clear every field and return to create mode. Idempotent.
    pub(crate) fn reset(&mut self) {
        self.name.clear();
        self.price.clear();
        self.description.clear();
        self.mode = FormMode::Create;
    }

    /// Build the request body, or explain why the fields are unusable.
    pub fn validate(&self) -> Result<ProductPayload, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        let price = parse_price(&self.price)
            .ok_or_else(|| ValidationError::InvalidPrice(self.price.clone()))?;

        Ok(ProductPayload::new(name, price, self.description.trim()))
    }
}

fn parse_price(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, price: &str, description: &str) -> FormState {
        FormState {
            name: name.into(),
            price: price.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_builds_trimmed_payload() {
        let payload = filled("  Lamp ", " 19.5", " Desk lamp  ").validate().unwrap();
        assert_eq!(payload, ProductPayload::new("Lamp", 19.5, "Desk lamp"));

        let no_description = filled("Mug", "4", "").validate().unwrap();
        assert_eq!(no_description.description, "");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            filled("   ", "5", "").validate(),
            Err(ValidationError::MissingName)
        );
        for price in ["", "abc", "0", "-3", "NaN", "inf"] {
            assert_eq!(
                filled("Lamp", price, "").validate(),
                Err(ValidationError::InvalidPrice(price.into())),
                "price {price:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_edit_then_reset() {
        let mut form = FormState::new();
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.mode().submit_label(), "Add Product");

        let product = Product {
            id: ProductId(7),
            name: "Lamp".into(),
            price: 9.0,
            description: None,
        };
        form.begin_edit(ProductId(7), &product);
        assert_eq!(form.editing_id(), Some(ProductId(7)));
        assert_eq!(form.mode().submit_label(), "Update Product");
        assert_eq!(form.name, "Lamp");
        assert_eq!(form.price, "9");
        assert_eq!(form.description, "");

        form.reset();
        assert_eq!(form, FormState::new());
        form.reset();
        assert_eq!(form, FormState::new());
    }
}
