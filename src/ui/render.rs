//! List rendering.
//!
//! A render always produces the whole list; rows are never patched in place.

use catalog_sdk::{Product, ProductId};

/// Shown when the collection is empty.
pub const EMPTY_PLACEHOLDER: &str = "No products available. Add one!";

/// Shown when the collection could not be fetched.
pub const LOAD_ERROR: &str = "Error loading products. Please ensure the product server is running.";

/// Shown in place of an absent or blank description.
pub const NO_DESCRIPTION: &str = "No description";

/// An action offered on a product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListAction {
    Edit(ProductId),
    Delete(ProductId),
}

impl ListAction {
    pub fn product_id(&self) -> ProductId {
        match self {
            ListAction::Edit(id) | ListAction::Delete(id) => *id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListAction::Edit(_) => "Edit",
            ListAction::Delete(_) => "Delete",
        }
    }
}

/// Display values for one product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl ProductRow {
    fn new(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description_text().unwrap_or(NO_DESCRIPTION).to_string(),
            price: format_price(product.price),
        }
    }

    pub fn actions(&self) -> [ListAction; 2] {
        [ListAction::Edit(self.id), ListAction::Delete(self.id)]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListRow {
    Product(ProductRow),
    /// Informational single-line row without actions.
    Placeholder(&'static str),
    /// Failure row without actions.
    Error(&'static str),
}

/// The complete content of the list container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedList {
    rows: Vec<ListRow>,
}

impl RenderedList {
    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    /// Product rows only.
    pub fn products(&self) -> impl Iterator<Item = &ProductRow> {
        self.rows.iter().filter_map(|row| match row {
            ListRow::Product(product) => Some(product),
            _ => None,
        })
    }

    /// Every action offered by the list, in row order.
    pub fn actions(&self) -> Vec<ListAction> {
        self.products().flat_map(|row| row.actions()).collect()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.rows.as_slice(), [ListRow::Error(_)])
    }
}

/// Render a fetched collection.
pub fn render_products(products: &[Product]) -> RenderedList {
    if products.is_empty() {
        return RenderedList {
            rows: vec![ListRow::Placeholder(EMPTY_PLACEHOLDER)],
        };
    }

    RenderedList {
        rows: products
            .iter()
            .map(|product| ListRow::Product(ProductRow::new(product)))
            .collect(),
    }
}

/// Render the list after a failed fetch.
pub fn render_error() -> RenderedList {
    RenderedList {
        rows: vec![ListRow::Error(LOAD_ERROR)],
    }
}

/// `$` followed by exactly two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}
