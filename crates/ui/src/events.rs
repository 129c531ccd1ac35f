//! Document-level event wiring: click outside the panel, in-page anchor
//! scrolling and the Ctrl/Cmd+K shortcut

use folio_core::view::{SETTINGS_PANEL_ID, SETTINGS_TRIGGER_SELECTOR};
use folio_core::{anchor_selector, ClickOrigin, KeyChord};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, KeyboardEvent, MouseEvent, Node, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::with_controller;

pub fn bind_all(doc: &Document) -> Result<(), JsValue> {
    bind_click_outside(doc)?;
    bind_anchor_scroll(doc)?;
    bind_shortcut(doc)?;
    Ok(())
}

fn bind_click_outside(doc: &Document) -> Result<(), JsValue> {
    let doc_inner = doc.clone();
    let cb = Closure::wrap(Box::new(move |e: MouseEvent| {
        let origin = click_origin(&doc_inner, e.target());
        if with_controller(|c| c.handle_document_click(origin)) == Some(true) {
            tracing::debug!("settings panel closed by outside click");
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    doc.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn click_origin(doc: &Document, target: Option<EventTarget>) -> ClickOrigin {
    let node = target.and_then(|t| t.dyn_into::<Node>().ok());
    let contains = |el: Option<Element>| el.is_some_and(|el| el.contains(node.as_ref()));

    ClickOrigin {
        inside_panel: contains(doc.get_element_by_id(SETTINGS_PANEL_ID)),
        inside_trigger: contains(doc.query_selector(SETTINGS_TRIGGER_SELECTOR).ok().flatten()),
    }
}

fn bind_anchor_scroll(doc: &Document) -> Result<(), JsValue> {
    let anchors = doc.query_selector_all(r##"a[href^="#"]"##)?;

    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let doc = doc.clone();
        let link = anchor.clone();
        let cb = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            scroll_to(&doc, &href);
        }) as Box<dyn FnMut(Event)>);
        anchor.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    tracing::debug!(count = anchors.length(), "anchor links bound");
    Ok(())
}

fn scroll_to(doc: &Document, href: &str) {
    let Some(selector) = anchor_selector(href) else {
        return;
    };
    match doc.query_selector(selector) {
        Ok(Some(target)) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        Ok(None) => tracing::debug!(selector, "anchor target not found"),
        Err(e) => tracing::warn!(selector, error = ?e, "invalid anchor selector"),
    }
}

fn bind_shortcut(doc: &Document) -> Result<(), JsValue> {
    let cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        let chord = KeyChord {
            key: e.key(),
            ctrl: e.ctrl_key(),
            meta: e.meta_key(),
        };
        if with_controller(|c| c.handle_key(&chord)) == Some(true) {
            e.prevent_default();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    doc.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
