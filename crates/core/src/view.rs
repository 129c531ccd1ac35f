//! Rendering seam between the controller and the page
//!
//! Element ids here are the markup contract of the portfolio page.

/// Editable profile inputs inside the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Title,
    Bio,
    GithubUsername,
    Email,
}

impl ProfileField {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Title,
        Self::Bio,
        Self::GithubUsername,
        Self::Email,
    ];

    pub const fn input_id(self) -> &'static str {
        match self {
            Self::Name => "userName",
            Self::Title => "userTitle",
            Self::Bio => "userBio",
            Self::GithubUsername => "githubUsername",
            Self::Email => "userEmail",
        }
    }
}

/// Read-only text elements showing profile values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayTarget {
    Name,
    FooterName,
    Title,
    Bio,
}

impl DisplayTarget {
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Name => "displayName",
            Self::FooterName => "footerName",
            Self::Title => "displayTitle",
            Self::Bio => "displayBio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    Github,
    Email,
}

impl LinkTarget {
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Github => "githubLink",
            Self::Email => "emailLink",
        }
    }
}

pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_LABEL_ID: &str = "themeLabel";
pub const PROFILE_IMAGE_ID: &str = "profileImg";
pub const STATS_TOGGLE_ID: &str = "showStats";
pub const STATS_SECTION_ID: &str = "statsSection";
pub const SPEED_SELECT_ID: &str = "animationSpeed";
pub const SETTINGS_PANEL_ID: &str = "settingsPanel";
pub const SETTINGS_TRIGGER_SELECTOR: &str = ".settings-btn";
pub const SAVE_BUTTON_SELECTOR: &str = ".save-btn";
pub const LIGHT_MODE_CLASS: &str = "light-mode";
pub const OPEN_CLASS: &str = "open";
pub const ANIMATION_DURATION_PROPERTY: &str = "--animation-duration";

/// Page operations the controller needs.
///
/// Readers return the current state of form controls; writers update
/// visible elements. Implementations decide what to do with missing
/// elements, the controller never checks.
pub trait View {
    fn theme_checked(&self) -> bool;
    fn stats_checked(&self) -> bool;
    fn speed_choice(&self) -> String;
    fn input_value(&self, field: ProfileField) -> String;
    fn save_button_text(&self) -> String;

    fn set_light_mode(&mut self, on: bool);
    fn set_theme_toggle(&mut self, checked: bool);
    fn set_theme_label(&mut self, label: &str);
    fn set_display_text(&mut self, target: DisplayTarget, text: &str);
    fn set_input_value(&mut self, field: ProfileField, value: &str);
    fn set_link(&mut self, link: LinkTarget, href: &str);
    fn set_profile_image(&mut self, src: &str);
    fn set_stats_toggle(&mut self, checked: bool);
    /// CSS `display` value for the stats section (`block` or `none`)
    fn set_stats_display(&mut self, display: &str);
    fn set_speed_choice(&mut self, value: &str);
    fn set_animation_duration(&mut self, duration: &str);
    fn set_panel_open(&mut self, open: bool);
    /// Empty `background` clears the inline style
    fn set_save_button(&mut self, text: &str, background: &str);
}
