//! Landing page with hero, feature grid and call to action.

use dioxus::prelude::*;
use showcase_ui::{Accent, Button};

use crate::content::FEATURES;
use crate::state::View;

/// Landing page. Navigation requests are sent by view name.
#[component]
pub fn LandingPage(on_navigate: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "landing",

            div {
                class: "container",

                // Hero
                section {
                    class: "hero",
                    h1 { class: "hero-title", "Welcome to Material UI Experiments" }
                    p {
                        class: "hero-subtitle",
                        "Build beautiful, responsive interfaces with ease using Material UI components"
                    }
                    div {
                        class: "hero-actions",
                        Button {
                            label: "View Dashboard".to_string(),
                            icon: "▦".to_string(),
                            large: true,
                            on_click: move |_| on_navigate.call(View::Dashboard.name().to_string()),
                        }
                        Button {
                            label: "View Admin Panel".to_string(),
                            icon: "🛡".to_string(),
                            accent: Accent::Secondary,
                            large: true,
                            on_click: move |_| on_navigate.call(View::Admin.name().to_string()),
                        }
                    }
                }

                // Features
                section {
                    class: "feature-grid",
                    for feature in FEATURES.iter() {
                        div {
                            key: "{feature.title}",
                            class: "card feature-card",
                            div {
                                class: "card-content",
                                div { class: "feature-icon accent-fg-{feature.accent.class_name()}", "{feature.icon}" }
                                h3 { class: "feature-title", "{feature.title}" }
                                p { class: "text-secondary", "{feature.description}" }
                            }
                        }
                    }
                }

                // Call to action
                section {
                    class: "cta",
                    h2 { class: "cta-title", "Ready to Start Building?" }
                    p {
                        class: "cta-text",
                        "Join thousands of developers creating amazing applications with Material UI"
                    }
                    button { class: "btn btn-large cta-button", "Learn More" }
                }
            }
        }
    }
}
