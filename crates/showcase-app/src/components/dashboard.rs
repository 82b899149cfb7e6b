//! Business dashboard with a collapsible sidebar.

use dioxus::prelude::*;
use showcase_ui::StatCard;

use crate::content::{ACTIVE_MENU_ITEM, DASHBOARD_METRICS, MENU_ITEMS, QUICK_STATS};
use crate::state::DrawerState;

/// Dashboard view.
#[component]
pub fn Dashboard(on_back: EventHandler<()>) -> Element {
    let mut drawer = use_signal(DrawerState::default);
    let drawer_open = drawer.read().open;

    rsx! {
        div {
            class: "dashboard",

            // Top bar
            header {
                class: "dashboard-appbar",
                button {
                    class: "icon-btn menu-toggle",
                    title: "Toggle menu",
                    onclick: move |_| {
                        let open = drawer.write().toggle();
                        tracing::debug!(open, "Drawer toggled");
                    },
                    "☰"
                }
                button {
                    class: "icon-btn",
                    title: "Back",
                    onclick: move |_| on_back.call(()),
                    "←"
                }
                h1 { class: "appbar-title", "Dashboard" }
                button { class: "icon-btn", title: "Notifications", "🔔" }
                button { class: "icon-btn", title: "Account", "👤" }
            }

            // Sidebar: permanent on wide screens, overlay on narrow ones
            nav {
                class: if drawer_open { "dashboard-drawer drawer-open" } else { "dashboard-drawer" },
                SidebarMenu {}
            }
            if drawer_open {
                div {
                    class: "drawer-backdrop",
                    onclick: move |_| drawer.write().close(),
                }
            }

            // Main content
            main {
                class: "dashboard-main",
                div {
                    class: "container-wide",

                    div {
                        class: "page-header",
                        h2 { class: "page-title", "Overview" }
                        p {
                            class: "text-secondary",
                            "Welcome back! Here's what's happening with your business today."
                        }
                    }

                    div {
                        class: "stat-grid",
                        for metric in DASHBOARD_METRICS.iter() {
                            StatCard {
                                key: "{metric.title}",
                                title: metric.title.to_string(),
                                value: metric.value.to_string(),
                                change: metric.change.to_string(),
                                icon: metric.icon.to_string(),
                                accent: metric.accent,
                                trend_suffix: "vs last month".to_string(),
                            }
                        }
                    }

                    div {
                        class: "split-grid",

                        div {
                            class: "card split-main",
                            div {
                                class: "card-content",
                                h3 { class: "section-title", "Recent Activity" }
                                div {
                                    class: "chart-placeholder",
                                    span { class: "text-secondary", "Activity Chart Placeholder" }
                                }
                            }
                        }

                        div {
                            class: "card split-side",
                            div {
                                class: "card-content",
                                h3 { class: "section-title", "Quick Stats" }
                                div {
                                    class: "quick-stats",
                                    for stat in QUICK_STATS.iter() {
                                        div {
                                            key: "{stat.label}",
                                            class: "quick-stat",
                                            span { class: "quick-stat-label", "{stat.label}" }
                                            span { class: "quick-stat-value", "{stat.value}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Sidebar title and menu entries.
#[component]
fn SidebarMenu() -> Element {
    rsx! {
        div {
            class: "drawer-header",
            span { class: "drawer-title", "Admin Panel" }
        }
        ul {
            class: "drawer-menu",
            for (index, item) in MENU_ITEMS.iter().enumerate() {
                li {
                    key: "{item.label}",
                    class: if index == ACTIVE_MENU_ITEM { "drawer-item active" } else { "drawer-item" },
                    span { class: "drawer-icon", "{item.icon}" }
                    span { class: "drawer-label", "{item.label}" }
                }
            }
        }
    }
}
