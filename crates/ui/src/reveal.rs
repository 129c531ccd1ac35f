//! Entrance animation for cards, driven by an `IntersectionObserver`

use folio_core::RevealConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Hide every card and reveal each one the first time it scrolls into view
pub fn observe_cards(doc: &Document, config: &RevealConfig) -> Result<(), JsValue> {
    let shown = config.shown_transform.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Ok(card) = target.clone().dyn_into::<HtmlElement>() {
                    let style = card.style();
                    let result = style
                        .set_property("opacity", "1")
                        .and_then(|()| style.set_property("transform", &shown));
                    if let Err(e) = result {
                        tracing::warn!(error = ?e, "failed to reveal card");
                    }
                }
                // Revealed cards stay visible
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    let cards = doc.query_selector_all(&config.card_selector)?;
    for i in 0..cards.length() {
        let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let style = card.style();
        style.set_property("opacity", "0")?;
        style.set_property("transform", &config.hidden_transform)?;
        style.set_property("transition", &config.transition)?;
        observer.observe(&card);
    }

    tracing::debug!(cards = cards.length(), "entrance animation armed");
    Ok(())
}
