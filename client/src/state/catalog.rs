//! Catalog page view-model: product list, form inputs, and message regions.
//!
//! DESIGN
//! ======
//! Every transition is a plain method so the page logic can be exercised
//! without a browser. Methods that show a message return the `FlashTicket`
//! the caller must schedule for clearing.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::error::CatalogError;
use crate::net::types::{NewProduct, Product};
use crate::state::flash::{FlashKind, FlashRegion, FlashSlot, FlashTicket};

pub const VALIDATION_MESSAGE: &str = "Please enter a valid name and price.";
pub const LOADING_MESSAGE: &str = "Loading products...";
pub const EMPTY_MESSAGE: &str = "No products registered.";
pub const CREATED_MESSAGE: &str = "Product added successfully!";

fn load_failed_message(detail: &str) -> String {
    format!("Failed to load products. Check that the backend is running. ({detail})")
}

/// Raw text of the create form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
}

impl ProductForm {
    /// Check the inputs and build the request body.
    ///
    /// The name is trimmed; the price must parse as a finite number above zero.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] when either field is unusable.
    pub fn validate(&self) -> Result<NewProduct, CatalogError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation(VALIDATION_MESSAGE));
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0)
            .ok_or(CatalogError::Validation(VALIDATION_MESSAGE))?;
        Ok(NewProduct { name: name.to_owned(), price })
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.price.clear();
    }
}

/// State behind the catalog page.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub submitting: bool,
    pub form: ProductForm,
    pub form_flash: FlashSlot,
    pub list_flash: FlashSlot,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            submitting: false,
            form: ProductForm::default(),
            form_flash: FlashSlot::new(FlashRegion::Form),
            list_flash: FlashSlot::new(FlashRegion::List),
        }
    }
}

impl CatalogState {
    /// Drop rendered items and the list message, and enter the loading state.
    pub fn begin_load(&mut self) {
        self.items.clear();
        self.list_flash.dismiss();
        self.loading = true;
    }

    /// Apply the list response.
    pub fn finish_load(&mut self, result: Result<Vec<Product>, CatalogError>) -> Option<FlashTicket> {
        self.loading = false;
        match result {
            Ok(items) if items.is_empty() => {
                self.items.clear();
                Some(self.list_flash.show(EMPTY_MESSAGE, FlashKind::Info))
            }
            Ok(items) => {
                self.items = items;
                self.list_flash.dismiss();
                None
            }
            Err(err) => {
                self.items.clear();
                Some(self.list_flash.show(load_failed_message(&err.to_string()), FlashKind::Error))
            }
        }
    }

    /// Mark a submission as started. Returns `false` if one is already in
    /// flight, so the caller must not start another.
    pub fn claim_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Validate the form. On success the request body is returned and the
    /// form is marked as submitting; on failure the validation message is
    /// shown, the submitting flag released, and its ticket returned.
    ///
    /// # Errors
    ///
    /// Returns the ticket of the validation message when the inputs are invalid.
    pub fn begin_submit(&mut self) -> Result<NewProduct, FlashTicket> {
        match self.form.validate() {
            Ok(product) => {
                self.submitting = true;
                Ok(product)
            }
            Err(err) => {
                self.submitting = false;
                Err(self.form_flash.show(err.to_string(), FlashKind::Error))
            }
        }
    }

    /// Apply the create response. Returns the message ticket and whether the
    /// list should be reloaded. The form is reset only on success.
    pub fn finish_submit(&mut self, result: Result<(), CatalogError>) -> (FlashTicket, bool) {
        self.submitting = false;
        match result {
            Ok(()) => {
                let ticket = self.form_flash.show(CREATED_MESSAGE, FlashKind::Success);
                self.form.reset();
                (ticket, true)
            }
            Err(err) => (self.form_flash.show(err.to_string(), FlashKind::Error), false),
        }
    }

    /// Clear the message `ticket` was issued for, if it is still showing.
    pub fn clear_flash(&mut self, ticket: FlashTicket) -> bool {
        match ticket.region {
            FlashRegion::Form => self.form_flash.clear(ticket),
            FlashRegion::List => self.list_flash.clear(ticket),
        }
    }
}
