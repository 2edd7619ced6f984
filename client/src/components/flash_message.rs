//! Message region for transient status and error text.

use leptos::prelude::*;

use crate::state::flash::Flash;

/// Renders the current message, or an empty region when there is none.
#[component]
pub fn FlashMessage(#[prop(into)] flash: Signal<Option<Flash>>) -> impl IntoView {
    let class = move || flash.get().map_or("message", |f| f.kind.css_class());
    let text = move || flash.get().map(|f| f.text).unwrap_or_default();

    view! {
        <p class=class role="status" aria-live="polite">{text}</p>
    }
}
