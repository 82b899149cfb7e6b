//! Admin control panel with a light/dark theme switch.
//!
//! The panel owns the theme cell: it starts light on every mount and is
//! dropped when the panel unmounts. Sub-components receive the mode as a
//! prop and report toggles back through a callback.

use dioxus::prelude::*;
use showcase_ui::{Accent, Button, Chip, StatCard, ThemeMode, ThemeProvider, ThemeToggle, ToggleSwitch};

use crate::content::{ADMIN_METRICS, BUTTON_SAMPLES, KEY_FEATURES};
use crate::state::{NotificationPreferences, Preference};

/// Admin view.
#[component]
pub fn AdminPanel(on_back: EventHandler<()>) -> Element {
    let mut mode = use_signal(ThemeMode::default);
    let current = *mode.read();

    let toggle = move |_: ()| {
        let new_mode = mode.write().toggle();
        tracing::debug!(mode = %new_mode, "Theme toggled");
    };

    rsx! {
        ThemeProvider {
            mode: current,
            AdminPanelContent {
                mode: current,
                on_back,
                on_toggle: toggle,
            }
        }
    }
}

#[component]
fn AdminPanelContent(mode: ThemeMode, on_back: EventHandler<()>, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "admin",

            header {
                class: "admin-appbar",
                button {
                    class: "icon-btn",
                    title: "Back",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                h1 { class: "appbar-title", "Admin Control Panel" }
                span { class: "appbar-mode-label", "{mode.display_name()}" }
                ThemeToggle { mode, on_toggle }
            }

            main {
                class: "container-wide admin-main",

                div {
                    class: "page-header",
                    h2 { class: "page-title", "Welcome Back, Admin" }
                    p {
                        class: "text-secondary",
                        "Manage your system settings and monitor performance metrics"
                    }
                }

                ThemeSettings { mode, on_toggle }

                div {
                    class: "stat-grid",
                    for metric in ADMIN_METRICS.iter() {
                        StatCard {
                            key: "{metric.title}",
                            title: metric.title.to_string(),
                            value: metric.value.to_string(),
                            change: format!("{} from last week", metric.change),
                            icon: metric.icon.to_string(),
                            accent: metric.accent,
                            caption: metric.caption.unwrap_or_default().to_string(),
                        }
                    }
                }

                section {
                    class: "paper",
                    h3 { class: "section-title", "Styled Component Examples" }
                    hr { class: "divider" }
                    div {
                        class: "button-row",
                        for sample in BUTTON_SAMPLES.iter() {
                            Button {
                                key: "{sample.label}",
                                label: sample.label.to_string(),
                                variant: sample.variant,
                                accent: sample.accent,
                                full_width: true,
                            }
                        }
                    }
                }

                div {
                    class: "split-grid split-grid-admin",
                    SystemConfiguration {}
                    PreferencesCard {}
                }
            }
        }
    }
}

/// Mode chip and dark mode switch.
#[component]
fn ThemeSettings(mode: ThemeMode, on_toggle: EventHandler<()>) -> Element {
    let (chip_label, chip_accent) = match mode {
        ThemeMode::Light => ("Light Mode Active", Accent::Primary),
        ThemeMode::Dark => ("Dark Mode Active", Accent::Secondary),
    };

    rsx! {
        section {
            class: "paper theme-settings",
            div {
                class: "theme-settings-text",
                h3 { class: "section-title", "Theme Settings" }
                p {
                    class: "text-secondary",
                    "Customize your visual experience with light or dark mode"
                }
            }
            div {
                class: "theme-settings-controls",
                Chip {
                    label: chip_label.to_string(),
                    accent: chip_accent,
                    icon: "✔".to_string(),
                }
                ToggleSwitch {
                    label: "Dark Mode".to_string(),
                    checked: mode.is_dark(),
                    on_change: move |_| on_toggle.call(()),
                }
            }
        }
    }
}

#[component]
fn SystemConfiguration() -> Element {
    rsx! {
        div {
            class: "card split-main",
            div {
                class: "card-content",
                h3 { class: "section-title", "System Configuration" }
                hr { class: "divider" }
                p {
                    class: "text-secondary",
                    "This section demonstrates responsive layout behavior and theme adaptation. "
                    "On desktop, it occupies two-thirds of the width. On tablet and mobile devices, "
                    "it stacks vertically and takes full width for optimal readability."
                }
                h4 { class: "subsection-title", "Key Features:" }
                ul {
                    class: "feature-list",
                    for feature in KEY_FEATURES.iter() {
                        li { key: "{feature}", class: "text-secondary", "{feature}" }
                    }
                }
            }
        }
    }
}

/// Notification switches. Their state lives and dies with this card.
#[component]
fn PreferencesCard() -> Element {
    let mut prefs = use_signal(NotificationPreferences::default);
    let current = *prefs.read();

    rsx! {
        div {
            class: "card split-side",
            div {
                class: "card-content",
                h3 { class: "section-title", "Preferences" }
                hr { class: "divider" }
                div {
                    class: "preference-list",
                    for preference in Preference::all().iter().copied() {
                        ToggleSwitch {
                            key: "{preference.label()}",
                            label: preference.label().to_string(),
                            checked: current.get(preference),
                            on_change: move |enabled: bool| prefs.write().set(preference, enabled),
                        }
                    }
                }
                div {
                    class: "preference-actions",
                    Button {
                        label: "Save Preferences".to_string(),
                        full_width: true,
                    }
                }
            }
        }
    }
}
