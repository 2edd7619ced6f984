//! Display fragment for a single product.
//!
//! DESIGN
//! ======
//! Text is derived in `ProductCardView` so the exact labels can be checked
//! without rendering; the component only lays them out. No validation is
//! done here: upstream data is taken as well-formed.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::Product;

/// Currency label shown before every price.
pub const CURRENCY_LABEL: &str = "R$";

/// Price with exactly two decimals and the currency label, e.g. `R$ 9.99`.
pub fn format_price(price: f64) -> String {
    format!("{CURRENCY_LABEL} {price:.2}")
}

/// Text content of a product card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub price_label: String,
    pub id_label: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price_label: format!("Price: {}", format_price(product.price)),
            id_label: format!("ID: {}", product.id),
        }
    }
}

/// A product entry in the catalog list.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ProductCardView { id, name, price_label, id_label } = ProductCardView::from(&product);

    view! {
        <div class="product-item" data-id=id>
            <h3 class="product-item__name">{name}</h3>
            <p class="product-item__price">{price_label}</p>
            <p class="product-item__id">{id_label}</p>
        </div>
    }
}
