mod dom;
mod events;
mod reveal;

use std::cell::RefCell;

use folio_core::{Controller, Deferred, PageConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Window};

use crate::dom::DomView;

thread_local! {
    static APP: RefCell<Option<Controller<DomView>>> = const { RefCell::new(None) };
}

/// Run `f` against the page controller, if the page has booted
pub(crate) fn with_controller<R>(f: impl FnOnce(&mut Controller<DomView>) -> R) -> Option<R> {
    let result = APP.with(|app| app.borrow_mut().as_mut().map(f));
    if result.is_none() {
        tracing::warn!("controller used before page load");
    }
    result
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let win = window().ok_or("No window")?;
    let doc = win.document().ok_or("No document")?;

    // Module scripts may run after DOMContentLoaded has already fired
    let ready_state = js_sys::Reflect::get(&doc, &"readyState".into())?
        .as_string()
        .unwrap_or_default();
    if ready_state == "loading" {
        let on_ready = Closure::once(move || {
            if let Err(e) = boot() {
                tracing::error!(error = ?e, "page boot failed");
            }
        });
        doc.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
        Ok(())
    } else {
        boot()
    }
}

fn boot() -> Result<(), JsValue> {
    let win = window().ok_or("No window")?;
    let doc = win.document().ok_or("No document")?;

    let PageConfig {
        initial,
        feedback,
        reveal,
    } = read_config(&win);

    let mut controller = Controller::new(initial, feedback, DomView::new(doc.clone()));
    controller.load_settings();
    APP.with(|app| *app.borrow_mut() = Some(controller));

    events::bind_all(&doc)?;
    reveal::observe_cards(&doc, &reveal)?;

    tracing::info!("portfolio page ready");
    Ok(())
}

/// Page configuration from `window.FOLIO_CONFIG`, defaults when absent or invalid
fn read_config(win: &Window) -> PageConfig {
    let raw = match js_sys::Reflect::get(win, &"FOLIO_CONFIG".into()) {
        Ok(v) if !v.is_undefined() && !v.is_null() => v,
        _ => return PageConfig::default(),
    };

    let json = match js_sys::JSON::stringify(&raw) {
        Ok(s) => String::from(s),
        Err(e) => {
            tracing::warn!(error = ?e, "FOLIO_CONFIG is not serialisable, using defaults");
            return PageConfig::default();
        }
    };

    PageConfig::from_json(&json).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "FOLIO_CONFIG rejected, using defaults");
        PageConfig::default()
    })
}

fn schedule(item: Deferred) {
    let Deferred { delay_ms, action } = item;
    let callback = Closure::once(move || {
        with_controller(|c| c.run_deferred(action));
    });

    if let Some(win) = window() {
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if let Err(e) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        ) {
            tracing::warn!(error = ?e, "failed to schedule deferred action");
        }
    }
    callback.forget();
}

// ============================================================================
// Inline handlers exposed to the page
// ============================================================================

#[wasm_bindgen(js_name = loadSettings)]
pub fn load_settings() {
    with_controller(Controller::load_settings);
}

#[wasm_bindgen(js_name = toggleSettings)]
pub fn toggle_settings() {
    with_controller(Controller::toggle_settings);
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    with_controller(Controller::toggle_theme);
}

#[wasm_bindgen(js_name = toggleStats)]
pub fn toggle_stats() {
    with_controller(Controller::toggle_stats);
}

#[wasm_bindgen(js_name = changeAnimationSpeed)]
pub fn change_animation_speed() {
    with_controller(Controller::change_animation_speed);
}

#[wasm_bindgen(js_name = saveSettings)]
pub fn save_settings() {
    if let Some(deferred) = with_controller(Controller::save_settings) {
        for item in deferred {
            schedule(item);
        }
    }
}
