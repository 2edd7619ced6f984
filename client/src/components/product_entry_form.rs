//! Form for adding a product.
//!
//! SYSTEM CONTEXT
//! ==============
//! Inputs are bound to `CatalogState::form`; submission hands off to
//! `catalog::submit_product`, which validates, posts, and reloads the list.

use leptos::prelude::*;

use crate::components::flash_message::FlashMessage;
use crate::net::api::HttpGateway;
use crate::state::catalog::CatalogState;

#[component]
pub fn ProductEntryForm() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let gateway = expect_context::<HttpGateway>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            if !catalog.try_update(CatalogState::claim_submit).unwrap_or(false) {
                return;
            }
            let gateway = gateway.clone();
            leptos::task::spawn_local(async move {
                crate::catalog::submit_product(&gateway, &catalog).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &gateway;
        }
    };

    let form_flash = Signal::derive(move || catalog.with(|s| s.form_flash.current().cloned()));

    view! {
        <form class="product-form" on:submit=on_submit>
            <label class="product-form__label" for="product-name">"Name"</label>
            <input
                id="product-name"
                class="product-form__input"
                type="text"
                placeholder="Widget"
                prop:value=move || catalog.with(|s| s.form.name.clone())
                on:input=move |ev| catalog.update(|s| s.form.name = event_target_value(&ev))
            />
            <label class="product-form__label" for="product-price">"Price"</label>
            <input
                id="product-price"
                class="product-form__input"
                type="number"
                step="0.01"
                min="0"
                placeholder="9.99"
                prop:value=move || catalog.with(|s| s.form.price.clone())
                on:input=move |ev| catalog.update(|s| s.form.price = event_target_value(&ev))
            />
            <button class="product-form__submit" type="submit" disabled=move || catalog.with(|s| s.submitting)>
                "Add product"
            </button>
            <FlashMessage flash=form_flash/>
        </form>
    }
}
