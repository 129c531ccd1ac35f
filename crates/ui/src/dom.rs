use folio_core::view::{
    ANIMATION_DURATION_PROPERTY, LIGHT_MODE_CLASS, OPEN_CLASS, PROFILE_IMAGE_ID,
    SAVE_BUTTON_SELECTOR, SETTINGS_PANEL_ID, SPEED_SELECT_ID, STATS_SECTION_ID, STATS_TOGGLE_ID,
    THEME_LABEL_ID, THEME_TOGGLE_ID,
};
use folio_core::{DisplayTarget, LinkTarget, ProfileField, View};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement};

/// `View` over the live document.
///
/// Elements are looked up on every call; a missing element is logged and
/// the write skipped.
pub struct DomView {
    doc: Document,
}

impl DomView {
    pub const fn new(doc: Document) -> Self {
        Self { doc }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let el = self.doc.get_element_by_id(id);
        if el.is_none() {
            tracing::warn!(id, "element not found");
        }
        el
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn checkbox(&self, id: &str) -> Option<HtmlInputElement> {
        self.element(id)?.dyn_into::<HtmlInputElement>().ok()
    }

    fn save_button(&self) -> Option<HtmlElement> {
        let el = self
            .doc
            .query_selector(SAVE_BUTTON_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if el.is_none() {
            tracing::warn!(selector = SAVE_BUTTON_SELECTOR, "save button not found");
        }
        el
    }

    /// `value` of an input, textarea or select
    fn value_of(&self, id: &str) -> String {
        self.element(id)
            .and_then(|el| js_sys::Reflect::get(&el, &"value".into()).ok())
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    fn set_value_of(&self, id: &str, value: &str) {
        if let Some(el) = self.element(id) {
            if let Err(e) = js_sys::Reflect::set(&el, &"value".into(), &JsValue::from_str(value)) {
                tracing::warn!(id, error = ?e, "failed to set value");
            }
        }
    }

    fn set_style(el: &HtmlElement, property: &str, value: &str) {
        let style = el.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(e) = result {
            tracing::warn!(property, error = ?e, "failed to set style");
        }
    }

    fn set_checked(&self, id: &str, checked: bool) {
        if let Some(input) = self.checkbox(id) {
            input.set_checked(checked);
        }
    }

    fn is_checked(&self, id: &str) -> bool {
        self.checkbox(id).is_some_and(|input| input.checked())
    }
}

impl View for DomView {
    fn theme_checked(&self) -> bool {
        self.is_checked(THEME_TOGGLE_ID)
    }

    fn stats_checked(&self) -> bool {
        self.is_checked(STATS_TOGGLE_ID)
    }

    fn speed_choice(&self) -> String {
        self.value_of(SPEED_SELECT_ID)
    }

    fn input_value(&self, field: ProfileField) -> String {
        self.value_of(field.input_id())
    }

    fn save_button_text(&self) -> String {
        self.save_button()
            .and_then(|btn| btn.text_content())
            .unwrap_or_default()
    }

    fn set_light_mode(&mut self, on: bool) {
        if let Some(body) = self.doc.body() {
            if let Err(e) = body.class_list().toggle_with_force(LIGHT_MODE_CLASS, on) {
                tracing::warn!(class = LIGHT_MODE_CLASS, error = ?e, "failed to toggle class");
            }
        }
    }

    fn set_theme_toggle(&mut self, checked: bool) {
        self.set_checked(THEME_TOGGLE_ID, checked);
    }

    fn set_theme_label(&mut self, label: &str) {
        if let Some(el) = self.element(THEME_LABEL_ID) {
            el.set_text_content(Some(label));
        }
    }

    fn set_display_text(&mut self, target: DisplayTarget, text: &str) {
        if let Some(el) = self.element(target.element_id()) {
            el.set_text_content(Some(text));
        }
    }

    fn set_input_value(&mut self, field: ProfileField, value: &str) {
        self.set_value_of(field.input_id(), value);
    }

    fn set_link(&mut self, link: LinkTarget, href: &str) {
        if let Some(el) = self.element(link.element_id()) {
            if let Err(e) = el.set_attribute("href", href) {
                tracing::warn!(id = link.element_id(), error = ?e, "failed to set href");
            }
        }
    }

    fn set_profile_image(&mut self, src: &str) {
        if let Some(img) = self
            .element(PROFILE_IMAGE_ID)
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            img.set_src(src);
        }
    }

    fn set_stats_toggle(&mut self, checked: bool) {
        self.set_checked(STATS_TOGGLE_ID, checked);
    }

    fn set_stats_display(&mut self, display: &str) {
        if let Some(section) = self.html_element(STATS_SECTION_ID) {
            Self::set_style(&section, "display", display);
        }
    }

    fn set_speed_choice(&mut self, value: &str) {
        self.set_value_of(SPEED_SELECT_ID, value);
    }

    fn set_animation_duration(&mut self, duration: &str) {
        if let Some(root) = self
            .doc
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            Self::set_style(&root, ANIMATION_DURATION_PROPERTY, duration);
        }
    }

    fn set_panel_open(&mut self, open: bool) {
        if let Some(panel) = self.element(SETTINGS_PANEL_ID) {
            if let Err(e) = panel.class_list().toggle_with_force(OPEN_CLASS, open) {
                tracing::warn!(class = OPEN_CLASS, error = ?e, "failed to toggle class");
            }
        }
    }

    fn set_save_button(&mut self, text: &str, background: &str) {
        if let Some(btn) = self.save_button() {
            btn.set_text_content(Some(text));
            Self::set_style(&btn, "background", background);
        }
    }
}
