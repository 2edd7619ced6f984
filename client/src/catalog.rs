//! List and create flows for the catalog page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `load_products` on mount and `submit_product` on form submit.
//! Both are generic over the gateway (HTTP in the browser) and the store
//! (a Leptos signal in the browser), and run strictly sequentially: a
//! successful create awaits the list refresh before returning.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::net::api::ProductGateway;
use crate::state::catalog::CatalogState;
use crate::state::flash::FlashTicket;

/// Holder of the catalog view-model plus the timer that clears messages.
pub trait CatalogStore {
    /// Run `f` against the state. Returns `None` if the store is gone.
    fn mutate<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> Option<R>;

    /// Arrange for `ticket` to be cleared after `FLASH_DURATION`.
    fn schedule_clear(&self, ticket: FlashTicket);
}

impl CatalogStore for RwSignal<CatalogState> {
    fn mutate<R>(&self, f: impl FnOnce(&mut CatalogState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn schedule_clear(&self, ticket: FlashTicket) {
        #[cfg(feature = "hydrate")]
        {
            let state = *self;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(crate::state::flash::FLASH_DURATION).await;
                let _ = state.try_update(|s| s.clear_flash(ticket));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ticket;
        }
    }
}

/// Fetch the product list and render it into the store.
pub async fn load_products<G, S>(gateway: &G, store: &S)
where
    G: ProductGateway,
    S: CatalogStore,
{
    if store.mutate(CatalogState::begin_load).is_none() {
        return;
    }
    let result = gateway.list().await;
    if let Err(err) = &result {
        log::error!("failed to load products: {err}");
    }
    if let Some(Some(ticket)) = store.mutate(|s| s.finish_load(result)) {
        store.schedule_clear(ticket);
    }
}

/// Validate the form and create the product, reloading the list on success.
///
/// Returns `true` when the product was created. Invalid input never reaches
/// the gateway.
pub async fn submit_product<G, S>(gateway: &G, store: &S) -> bool
where
    G: ProductGateway,
    S: CatalogStore,
{
    let product = match store.mutate(CatalogState::begin_submit) {
        Some(Ok(product)) => product,
        Some(Err(ticket)) => {
            store.schedule_clear(ticket);
            return false;
        }
        None => return false,
    };

    let result = gateway.create(&product).await;
    if let Err(err) = &result {
        log::error!("failed to create product {:?}: {err}", product.name);
    }
    let Some((ticket, reload)) = store.mutate(|s| s.finish_submit(result)) else {
        return false;
    };
    store.schedule_clear(ticket);

    if reload {
        log::info!("created product {:?}", product.name);
        load_products(gateway, store).await;
    }
    reload
}
