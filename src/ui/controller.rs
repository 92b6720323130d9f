//! Product list controller.
//!
//! Owns the API client, the form state and a [`Ui`]. Each operation is one
//! round trip followed by a list refresh or a form pre-fill. Failures are
//! logged and reported through [`Ui::alert`]; nothing is retried.

use catalog_sdk::{ApiError, ProductClient, ProductId};

use crate::ui::form::{FormMode, FormState, VALIDATION_MESSAGE};
use crate::ui::render::{render_error, render_products, ListAction, RenderedList};

/// Asked before every delete.
pub const DELETE_CONFIRMATION: &str =
    "Are you sure you want to delete this product? This action cannot be undone.";

/// Shown after a successful delete.
pub const DELETE_SUCCESS: &str = "Product deleted successfully!";

/// Where results are shown to the user.
///
/// `alert` and `confirm` block until the user has seen or answered them.
pub trait Ui {
    /// Replace the displayed list.
    fn render(&mut self, list: &RenderedList);

    fn alert(&mut self, message: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Reflect field contents and submit label.
    fn show_form(&mut self, form: &FormState);

    /// Bring the form into view.
    fn focus_form(&mut self) {}
}

/// How an operation ended.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user declined a confirmation; no request was sent.
    Declined,
    /// The form did not validate; no request was sent.
    Invalid,
    /// The request failed; state is unchanged.
    Failed,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// Keeps a [`Ui`] in sync with the remote product collection.
#[derive(Debug)]
pub struct ProductListController<U> {
    client: ProductClient,
    form: FormState,
    ui: U,
}

impl<U: Ui> ProductListController<U> {
    pub fn new(client: ProductClient, ui: U) -> Self {
        Self {
            client,
            form: FormState::new(),
            ui,
        }
    }

    pub fn client(&self) -> &ProductClient {
        &self.client
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Field access for typing into the form. The mode is only changed by
    /// [`start_edit`](Self::start_edit) and [`reset_form`](Self::reset_form).
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    pub fn into_ui(self) -> U {
        self.ui
    }

    /// Fetch the whole collection and render it. On failure the list shows
    /// a single error row.
    pub async fn fetch_products(&mut self) -> Outcome {
        match self.client.list_products().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Fetched products");
                self.ui.render(&render_products(&products));
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching products");
                self.ui.render(&render_error());
                Outcome::Failed
            }
        }
    }

    /// Dispatch an action clicked in the list.
    pub async fn handle_action(&mut self, action: ListAction) -> Outcome {
        match action {
            ListAction::Edit(id) => self.start_edit(id).await,
            ListAction::Delete(id) => self.delete_product(id).await,
        }
    }

    /// Load a product into the form and switch to update mode.
    pub async fn start_edit(&mut self, id: ProductId) -> Outcome {
        match self.client.get_product(id).await {
            Ok(product) => {
                self.form.begin_edit(id, &product);
                tracing::debug!(id = %id, "Editing product");
                self.ui.show_form(&self.form);
                self.ui.focus_form();
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Error fetching product for edit");
                self.alert_failure("Failed to load product for editing", &e);
                Outcome::Failed
            }
        }
    }

    /// Delete after confirmation, then refresh the list and reset the form.
    pub async fn delete_product(&mut self, id: ProductId) -> Outcome {
        if !self.ui.confirm(DELETE_CONFIRMATION) {
            tracing::debug!(id = %id, "Delete declined");
            return Outcome::Declined;
        }

        match self.client.delete_product(id).await {
            Ok(_) => {
                tracing::info!(id = %id, "Product deleted");
                self.ui.alert(DELETE_SUCCESS);
                let _ = self.fetch_products().await;
                self.reset_form();
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Error deleting product");
                self.alert_failure("Failed to delete product", &e);
                Outcome::Failed
            }
        }
    }

    /// Validate the form, then create or update depending on its mode.
    pub async fn submit(&mut self) -> Outcome {
        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(error = %e, "Form rejected");
                self.ui.alert(VALIDATION_MESSAGE);
                return Outcome::Invalid;
            }
        };

        let mode = self.form.mode();
        let result = match mode {
            FormMode::Create => self.client.create_product(&payload).await,
            FormMode::Editing(id) => self.client.update_product(id, &payload).await,
        };
        let (done, verb) = match mode {
            FormMode::Create => ("added", "add"),
            FormMode::Editing(_) => ("updated", "update"),
        };

        match result {
            Ok(product) => {
                tracing::info!(id = %product.id, name = %product.name, "Product {}", done);
                let message = format!("Product \"{}\" {} successfully!", product.name, done);
                self.ui.alert(&message);
                self.reset_form();
                let _ = self.fetch_products().await;
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(mode = ?mode, error = %e, "Error submitting product");
                self.alert_failure(&format!("Failed to {} product", verb), &e);
                Outcome::Failed
            }
        }
    }

    /// Clear the form and return to create mode.
    pub fn reset_form(&mut self) {
        self.form.reset();
        self.ui.show_form(&self.form);
    }

    fn alert_failure(&mut self, context: &str, error: &ApiError) {
        let message = format!("{}: {}", context, error.user_message());
        self.ui.alert(&message);
    }
}
