//! Controller behaviour against an in-memory page

mod common;

use common::FakePage;
use folio_core::{
    ClickOrigin, Controller, DeferredAction, DisplayTarget, FeedbackConfig, KeyChord, LinkTarget,
    PanelState, ProfileField, Settings, Theme,
};

fn loaded(settings: Settings) -> Controller<FakePage> {
    let mut controller = Controller::new(settings, FeedbackConfig::default(), FakePage::new());
    controller.load_settings();
    controller
}

#[test]
fn test_default_load() {
    let controller = loaded(Settings::default());
    let page = controller.view();

    assert!(!page.light_mode);
    assert!(!page.theme_checked);
    assert_eq!(page.stats_display, "block");
    assert_eq!(page.animation_duration, "0.3s");
    assert_eq!(page.speed_choice, "normal");
    assert!(!page.panel_open);
    assert!(page.links.is_empty());
    assert!(page.profile_image.is_none());
}

#[test]
fn test_load_mirrors_record_into_display() {
    let settings = Settings {
        theme: Theme::Light,
        name: "Ada Lovelace".to_string(),
        title: "Analyst".to_string(),
        bio: "Notes on the engine".to_string(),
        github_username: Some("ada".to_string()),
        email: Some("ada@example.com".to_string()),
        show_stats: false,
        animation_speed: folio_core::AnimationSpeed::Slow,
    };
    let controller = loaded(settings.clone());
    let page = controller.view();

    assert_eq!(page.text(DisplayTarget::Name), Some("Ada Lovelace"));
    assert_eq!(page.text(DisplayTarget::FooterName), Some("Ada Lovelace"));
    assert_eq!(page.text(DisplayTarget::Title), Some("Analyst"));
    assert_eq!(page.text(DisplayTarget::Bio), Some("Notes on the engine"));
    assert_eq!(page.inputs[&ProfileField::GithubUsername], "ada");
    assert_eq!(page.links[&LinkTarget::Github], "https://github.com/ada");
    assert_eq!(page.profile_image.as_deref(), Some("https://github.com/ada.png"));
    assert_eq!(page.links[&LinkTarget::Email], "mailto:ada@example.com");
    assert!(page.light_mode);
    assert!(page.theme_checked);
    assert_eq!(page.theme_label, "Light Mode");
    assert_eq!(page.stats_display, "none");
    assert_eq!(page.animation_duration, "0.6s");
    assert_eq!(controller.settings(), &settings);
}

#[test]
fn test_load_skips_empty_fields() {
    let settings = Settings {
        title: String::new(),
        github_username: Some(String::new()),
        ..Settings::default()
    };
    let controller = loaded(settings);
    let page = controller.view();

    assert!(page.text(DisplayTarget::Title).is_none());
    assert!(!page.inputs.contains_key(&ProfileField::GithubUsername));
    assert!(!page.links.contains_key(&LinkTarget::Github));
}

#[test]
fn test_toggle_theme_idempotent_and_inverse() {
    let mut controller = loaded(Settings::default());

    controller.view_mut().theme_checked = true;
    controller.toggle_theme();
    controller.toggle_theme();
    assert_eq!(controller.settings().theme, Theme::Light);
    assert!(controller.view().light_mode);
    assert_eq!(controller.view().theme_label, "Light Mode");

    controller.view_mut().theme_checked = false;
    controller.toggle_theme();
    assert_eq!(controller.settings().theme, Theme::Dark);
    assert!(!controller.view().light_mode);
    assert_eq!(controller.view().theme_label, "Dark Mode");
}

#[test]
fn test_toggle_stats_follows_checkbox() {
    let mut controller = loaded(Settings::default());

    for checked in [false, true, false] {
        controller.view_mut().stats_checked = checked;
        controller.toggle_stats();
        let expected = if checked { "block" } else { "none" };
        assert_eq!(controller.view().stats_display, expected);
        assert_eq!(controller.settings().show_stats, checked);
    }
}

#[test]
fn test_animation_speed_mapping() {
    let mut controller = loaded(Settings::default());

    let cases = [("slow", "0.6s"), ("fast", "0.15s"), ("normal", "0.3s"), ("turbo", "0.3s")];
    for (choice, duration) in cases {
        controller.view_mut().speed_choice = choice.to_string();
        controller.change_animation_speed();
        assert_eq!(controller.view().animation_duration, duration);
    }
    // The record holds an enum, so an unrecognised choice like "turbo" is
    // stored as normal rather than echoing the select's raw value.
    assert_eq!(controller.settings().animation_speed, folio_core::AnimationSpeed::Normal);
}

#[test]
fn test_save_updates_only_non_empty_fields() {
    let mut controller = loaded(Settings::default());
    let page = controller.view_mut();
    page.type_into(ProfileField::Name, "  Grace Hopper  ");
    page.type_into(ProfileField::Title, "   ");
    page.type_into(ProfileField::Bio, "");
    page.type_into(ProfileField::GithubUsername, " grace ");
    page.type_into(ProfileField::Email, "");

    controller.save_settings();

    let settings = controller.settings();
    assert_eq!(settings.name, "Grace Hopper");
    assert_eq!(settings.title, "Developer & Creator");
    assert_eq!(settings.bio, Settings::default().bio);
    assert_eq!(settings.github_username.as_deref(), Some("grace"));
    assert!(settings.email.is_none());

    let page = controller.view();
    assert_eq!(page.text(DisplayTarget::Name), Some("Grace Hopper"));
    assert_eq!(page.text(DisplayTarget::FooterName), Some("Grace Hopper"));
    assert_eq!(page.text(DisplayTarget::Title), Some("Developer & Creator"));
    assert_eq!(page.links[&LinkTarget::Github], "https://github.com/grace");
    assert_eq!(page.profile_image.as_deref(), Some("https://github.com/grace.png"));
    assert!(!page.links.contains_key(&LinkTarget::Email));
}

#[test]
fn test_save_feedback_and_deferred_work() {
    let mut controller = loaded(Settings::default());
    controller.toggle_settings();
    controller.view_mut().type_into(ProfileField::Email, "me@example.com");

    let deferred = controller.save_settings();
    assert_eq!(controller.view().save_text, "\u{2713} Saved!");
    assert_eq!(controller.view().save_background, "#3fb950");
    assert_eq!(controller.view().links[&LinkTarget::Email], "mailto:me@example.com");

    assert_eq!(deferred.len(), 2);
    assert_eq!(deferred[0].delay_ms, 2000);
    assert_eq!(deferred[0].action, DeferredAction::RestoreSaveButton);
    assert_eq!(deferred[1].delay_ms, 1000);
    assert_eq!(deferred[1].action, DeferredAction::CloseSettings);

    for item in deferred {
        controller.run_deferred(item.action);
    }
    assert_eq!(controller.view().save_text, "Save Settings");
    assert_eq!(controller.view().save_background, "");
    assert_eq!(controller.panel(), PanelState::Closed);
    assert!(!controller.view().panel_open);

    // running the close again is harmless
    controller.run_deferred(DeferredAction::CloseSettings);
    assert_eq!(controller.panel(), PanelState::Closed);
}

#[test]
fn test_repeated_save_restores_original_label() {
    let mut controller = loaded(Settings::default());

    let first = controller.save_settings();
    let second = controller.save_settings();
    assert_eq!(controller.view().save_text, "\u{2713} Saved!");

    for item in first.into_iter().chain(second) {
        controller.run_deferred(item.action);
    }
    assert_eq!(controller.view().save_text, "Save Settings");
    assert_eq!(controller.view().save_background, "");

    // a later save captures the label again
    controller.view_mut().save_text = "Save".to_string();
    let third = controller.save_settings();
    for item in third {
        controller.run_deferred(item.action);
    }
    assert_eq!(controller.view().save_text, "Save");
}

#[test]
fn test_click_outside_closes_open_panel_only() {
    let mut controller = loaded(Settings::default());
    let outside = ClickOrigin::default();

    assert!(!controller.handle_document_click(outside));
    assert_eq!(controller.panel(), PanelState::Closed);

    controller.toggle_settings();
    assert!(controller.view().panel_open);

    let in_panel = ClickOrigin {
        inside_panel: true,
        inside_trigger: false,
    };
    let on_trigger = ClickOrigin {
        inside_panel: false,
        inside_trigger: true,
    };
    assert!(!controller.handle_document_click(in_panel));
    assert!(!controller.handle_document_click(on_trigger));
    assert_eq!(controller.panel(), PanelState::Open);

    assert!(controller.handle_document_click(outside));
    assert_eq!(controller.panel(), PanelState::Closed);
    assert!(!controller.view().panel_open);
}

#[test]
fn test_keyboard_shortcut_toggles_panel() {
    let mut controller = loaded(Settings::default());
    let ctrl_k = KeyChord {
        key: "k".to_string(),
        ctrl: true,
        meta: false,
    };
    let plain_k = KeyChord {
        key: "k".to_string(),
        ..KeyChord::default()
    };

    assert!(!controller.handle_key(&plain_k));
    assert_eq!(controller.panel(), PanelState::Closed);

    assert!(controller.handle_key(&ctrl_k));
    assert_eq!(controller.panel(), PanelState::Open);
    assert!(controller.handle_key(&ctrl_k));
    assert_eq!(controller.panel(), PanelState::Closed);
}
