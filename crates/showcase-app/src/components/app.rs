//! Root component that renders the active view.

use dioxus::prelude::*;

use crate::state::{View, ViewController};

use super::{AdminPanel, Dashboard, LandingPage};

/// Renders exactly one view, chosen by the controller.
#[component]
pub fn App(controller: Signal<ViewController>) -> Element {
    let mut controller_write = controller;
    let current = controller.read().current();

    let view = match current {
        View::Home => rsx! {
            LandingPage {
                on_navigate: move |target: String| {
                    controller_write.write().navigate(&target);
                },
            }
        },
        View::Dashboard => rsx! {
            Dashboard {
                on_back: move |_| controller_write.write().navigate_home(),
            }
        },
        View::Admin => rsx! {
            AdminPanel {
                on_back: move |_| controller_write.write().navigate_home(),
            }
        },
    };

    rsx! {
        div {
            class: "app-shell",
            "data-view": "{current}",
            {view}
        }
    }
}
