//! Presentation controller
//!
//! Owns the settings record and the panel state. Every handler reads the
//! controls it needs from the [`View`], updates the record, then writes the
//! record back so the page never diverges from it.

use crate::config::FeedbackConfig;
use crate::settings::{
    github_avatar_url, github_profile_url, mailto_url, AnimationSpeed, Settings, Theme,
};
use crate::view::{DisplayTarget, LinkTarget, ProfileField, View};

/// Open/closed state of the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    const fn flipped(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Work `save_settings` asks the page to run later
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    /// Put the save button back the way it was before the confirmation
    RestoreSaveButton,
    CloseSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred {
    pub delay_ms: u32,
    pub action: DeferredAction,
}

/// Where a document-level click landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickOrigin {
    pub inside_panel: bool,
    pub inside_trigger: bool,
}

/// Key press with the modifiers the shortcut cares about
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyChord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyChord {
    /// Ctrl+K or Cmd+K
    pub fn is_settings_shortcut(&self) -> bool {
        (self.ctrl || self.meta) && self.key == "k"
    }
}

pub struct Controller<V> {
    settings: Settings,
    panel: PanelState,
    feedback: FeedbackConfig,
    /// Save button label hidden behind a pending confirmation
    save_label: Option<String>,
    view: V,
}

impl<V: View> Controller<V> {
    pub fn new(settings: Settings, feedback: FeedbackConfig, view: V) -> Self {
        Self {
            settings,
            panel: PanelState::Closed,
            feedback,
            save_label: None,
            view,
        }
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub const fn panel(&self) -> PanelState {
        self.panel
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Push the whole record into the page
    pub fn load_settings(&mut self) {
        let theme = self.settings.theme;
        self.apply_theme(theme);
        self.view.set_theme_toggle(theme.is_light());

        if !self.settings.name.is_empty() {
            let name = self.settings.name.clone();
            self.show_name(&name);
            self.view.set_input_value(ProfileField::Name, &name);
        }
        if !self.settings.title.is_empty() {
            let title = self.settings.title.clone();
            self.view.set_display_text(DisplayTarget::Title, &title);
            self.view.set_input_value(ProfileField::Title, &title);
        }
        if !self.settings.bio.is_empty() {
            let bio = self.settings.bio.clone();
            self.view.set_display_text(DisplayTarget::Bio, &bio);
            self.view.set_input_value(ProfileField::Bio, &bio);
        }
        if let Some(user) = self.settings.github_username.clone().filter(|u| !u.is_empty()) {
            self.view.set_input_value(ProfileField::GithubUsername, &user);
            self.show_github(&user);
        }
        if let Some(email) = self.settings.email.clone().filter(|e| !e.is_empty()) {
            self.view.set_input_value(ProfileField::Email, &email);
            self.view.set_link(LinkTarget::Email, &mailto_url(&email));
        }

        self.view.set_stats_toggle(self.settings.show_stats);
        self.toggle_stats();

        self.view.set_speed_choice(self.settings.animation_speed.as_str());
        self.change_animation_speed();

        self.view.set_panel_open(self.panel.is_open());
        tracing::debug!(theme = %theme, "settings loaded into page");
    }

    pub fn toggle_settings(&mut self) {
        self.set_panel(self.panel.flipped());
    }

    pub fn close_settings(&mut self) {
        self.set_panel(PanelState::Closed);
    }

    pub fn toggle_theme(&mut self) {
        let theme = Theme::from_checked(self.view.theme_checked());
        self.apply_theme(theme);
        self.settings.theme = theme;
        tracing::debug!(%theme, "theme changed");
    }

    pub fn toggle_stats(&mut self) {
        let checked = self.view.stats_checked();
        self.view.set_stats_display(if checked { "block" } else { "none" });
        self.settings.show_stats = checked;
    }

    pub fn change_animation_speed(&mut self) {
        let speed = AnimationSpeed::from_choice(&self.view.speed_choice());
        self.view.set_animation_duration(speed.duration());
        self.settings.animation_speed = speed;
    }

    /// Copy non-empty profile inputs into the record.
    ///
    /// Returns the follow-ups the page has to schedule: restoring the save
    /// button and closing the panel.
    pub fn save_settings(&mut self) -> Vec<Deferred> {
        let mut updated = Vec::new();

        for field in ProfileField::ALL {
            let raw = self.view.input_value(field);
            let value = raw.trim();
            if value.is_empty() {
                continue;
            }
            self.store_field(field, value);
            updated.push(field);
        }
        tracing::info!(?updated, "profile saved");

        // Only capture the label while no confirmation is showing
        if self.save_label.is_none() {
            self.save_label = Some(self.view.save_button_text());
        }
        let feedback = &self.feedback;
        self.view.set_save_button(&feedback.saved_text, &feedback.saved_background);

        vec![
            Deferred {
                delay_ms: self.feedback.revert_after_ms,
                action: DeferredAction::RestoreSaveButton,
            },
            Deferred {
                delay_ms: self.feedback.close_after_ms,
                action: DeferredAction::CloseSettings,
            },
        ]
    }

    pub fn run_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::RestoreSaveButton => {
                if let Some(label) = self.save_label.take() {
                    self.view.set_save_button(&label, "");
                }
            }
            DeferredAction::CloseSettings => self.close_settings(),
        }
    }

    /// Close the panel on clicks outside both the panel and its trigger.
    /// Returns true when the panel was closed.
    pub fn handle_document_click(&mut self, origin: ClickOrigin) -> bool {
        if self.panel.is_open() && !origin.inside_panel && !origin.inside_trigger {
            self.close_settings();
            return true;
        }
        false
    }

    /// Returns true when the chord was the settings shortcut and the
    /// browser default must be suppressed.
    pub fn handle_key(&mut self, chord: &KeyChord) -> bool {
        if chord.is_settings_shortcut() {
            self.toggle_settings();
            return true;
        }
        false
    }

    fn set_panel(&mut self, state: PanelState) {
        self.panel = state;
        self.view.set_panel_open(state.is_open());
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.view.set_light_mode(theme.is_light());
        self.view.set_theme_label(theme.label());
    }

    fn show_name(&mut self, name: &str) {
        self.view.set_display_text(DisplayTarget::Name, name);
        self.view.set_display_text(DisplayTarget::FooterName, name);
    }

    fn show_github(&mut self, user: &str) {
        self.view.set_link(LinkTarget::Github, &github_profile_url(user));
        self.view.set_profile_image(&github_avatar_url(user));
    }

    fn store_field(&mut self, field: ProfileField, value: &str) {
        match field {
            ProfileField::Name => {
                self.settings.name = value.to_string();
                self.show_name(value);
            }
            ProfileField::Title => {
                self.settings.title = value.to_string();
                self.view.set_display_text(DisplayTarget::Title, value);
            }
            ProfileField::Bio => {
                self.settings.bio = value.to_string();
                self.view.set_display_text(DisplayTarget::Bio, value);
            }
            ProfileField::GithubUsername => {
                self.settings.github_username = Some(value.to_string());
                self.show_github(value);
            }
            ProfileField::Email => {
                self.settings.email = Some(value.to_string());
                self.view.set_link(LinkTarget::Email, &mailto_url(value));
            }
        }
    }
}
