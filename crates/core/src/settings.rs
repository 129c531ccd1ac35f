//! The settings record mirrored into the page

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Colour scheme of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Theme selected by the `themeToggle` checkbox
    pub const fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// Text shown in `themeLabel`
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark Mode",
            Self::Light => "Light Mode",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Speed of the page's CSS animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Lenient mapping used for the `animationSpeed` select.
    /// Anything that is not `slow` or `fast` is treated as normal.
    pub fn from_choice(choice: &str) -> Self {
        choice.parse().unwrap_or_else(|_| {
            tracing::debug!(choice, "unrecognised animation speed, using normal");
            Self::Normal
        })
    }

    /// Value written to the `--animation-duration` custom property
    pub const fn duration(self) -> &'static str {
        match self {
            Self::Slow => "0.6s",
            Self::Normal => "0.3s",
            Self::Fast => "0.15s",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        }
    }
}

impl FromStr for AnimationSpeed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(Self::Slow),
            "normal" => Ok(Self::Normal),
            "fast" => Ok(Self::Fast),
            other => Err(Error::UnknownSpeed(other.to_string())),
        }
    }
}

impl fmt::Display for AnimationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All user-configurable display state of the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub github_username: Option<String>,
    pub email: Option<String>,
    pub show_stats: bool,
    pub animation_speed: AnimationSpeed,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            name: "Your Name".to_string(),
            title: "Developer & Creator".to_string(),
            bio: "I'm a passionate developer who loves building amazing things with code. \
                  Check out my work below and feel free to reach out!"
                .to_string(),
            github_username: None,
            email: None,
            show_stats: true,
            animation_speed: AnimationSpeed::Normal,
        }
    }
}

/// Profile page URL for a GitHub user
pub fn github_profile_url(username: &str) -> String {
    format!("https://github.com/{username}")
}

/// Avatar image URL for a GitHub user
pub fn github_avatar_url(username: &str) -> String {
    format!("https://github.com/{username}.png")
}

pub fn mailto_url(email: &str) -> String {
    format!("mailto:{email}")
}
