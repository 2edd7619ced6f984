//! Catalog page: create form above the product list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It triggers the initial list fetch once the page
//! is mounted in the browser.

use leptos::prelude::*;

use crate::components::product_entry_form::ProductEntryForm;
use crate::components::product_list::ProductList;
#[cfg(feature = "hydrate")]
use crate::net::api::HttpGateway;
#[cfg(feature = "hydrate")]
use crate::state::catalog::CatalogState;

#[component]
pub fn CatalogPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let catalog = expect_context::<RwSignal<CatalogState>>();
        let gateway = expect_context::<HttpGateway>();
        Effect::new(move || {
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                crate::catalog::load_products(&gateway, &catalog).await;
            });
        });
    }

    view! {
        <main class="catalog-page">
            <header class="catalog-page__header">
                <h1>"Product Catalog"</h1>
            </header>
            <section class="catalog-page__form">
                <h2>"Add product"</h2>
                <ProductEntryForm/>
            </section>
            <section class="catalog-page__list">
                <h2>"Products"</h2>
                <ProductList/>
            </section>
        </main>
    }
}
