//! In-memory page used to drive the controller in tests

use std::collections::HashMap;

use folio_core::{DisplayTarget, LinkTarget, ProfileField, View};

/// Records every write the controller makes and lets tests set the
/// state of form controls.
#[derive(Debug, Default)]
pub struct FakePage {
    pub theme_checked: bool,
    pub stats_checked: bool,
    pub speed_choice: String,
    pub inputs: HashMap<ProfileField, String>,
    pub display: HashMap<DisplayTarget, String>,
    pub links: HashMap<LinkTarget, String>,
    pub profile_image: Option<String>,
    pub light_mode: bool,
    pub theme_label: String,
    pub stats_display: String,
    pub animation_duration: String,
    pub panel_open: bool,
    pub save_text: String,
    pub save_background: String,
}

impl FakePage {
    pub fn new() -> Self {
        Self {
            save_text: "Save Settings".to_string(),
            ..Self::default()
        }
    }

    pub fn type_into(&mut self, field: ProfileField, value: &str) {
        self.inputs.insert(field, value.to_string());
    }

    pub fn text(&self, target: DisplayTarget) -> Option<&str> {
        self.display.get(&target).map(String::as_str)
    }
}

impl View for FakePage {
    fn theme_checked(&self) -> bool {
        self.theme_checked
    }

    fn stats_checked(&self) -> bool {
        self.stats_checked
    }

    fn speed_choice(&self) -> String {
        self.speed_choice.clone()
    }

    fn input_value(&self, field: ProfileField) -> String {
        self.inputs.get(&field).cloned().unwrap_or_default()
    }

    fn save_button_text(&self) -> String {
        self.save_text.clone()
    }

    fn set_light_mode(&mut self, on: bool) {
        self.light_mode = on;
    }

    fn set_theme_toggle(&mut self, checked: bool) {
        self.theme_checked = checked;
    }

    fn set_theme_label(&mut self, label: &str) {
        self.theme_label = label.to_string();
    }

    fn set_display_text(&mut self, target: DisplayTarget, text: &str) {
        self.display.insert(target, text.to_string());
    }

    fn set_input_value(&mut self, field: ProfileField, value: &str) {
        self.inputs.insert(field, value.to_string());
    }

    fn set_link(&mut self, link: LinkTarget, href: &str) {
        self.links.insert(link, href.to_string());
    }

    fn set_profile_image(&mut self, src: &str) {
        self.profile_image = Some(src.to_string());
    }

    fn set_stats_toggle(&mut self, checked: bool) {
        self.stats_checked = checked;
    }

    fn set_stats_display(&mut self, display: &str) {
        self.stats_display = display.to_string();
    }

    fn set_speed_choice(&mut self, value: &str) {
        self.speed_choice = value.to_string();
    }

    fn set_animation_duration(&mut self, duration: &str) {
        self.animation_duration = duration.to_string();
    }

    fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    fn set_save_button(&mut self, text: &str, background: &str) {
        self.save_text = text.to_string();
        self.save_background = background.to_string();
    }
}
