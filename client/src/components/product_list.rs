//! Product list container. The loading indicator and the list message share
//! one region: while a load is in flight only the indicator shows.

use leptos::prelude::*;

use crate::components::flash_message::FlashMessage;
use crate::components::product_card::ProductCard;
use crate::state::catalog::{CatalogState, LOADING_MESSAGE};

#[component]
pub fn ProductList() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let list_flash = Signal::derive(move || catalog.with(|s| s.list_flash.current().cloned()));

    view! {
        <section class="product-list">
            <Show
                when=move || catalog.with(|s| s.loading)
                fallback=move || view! { <FlashMessage flash=list_flash/> }
            >
                <p class="message">{LOADING_MESSAGE}</p>
            </Show>
            <div class="product-list__items">
                {move || {
                    catalog
                        .with(|s| s.items.clone())
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product/> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
