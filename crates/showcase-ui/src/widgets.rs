//! Presentational building blocks shared by the showcase views.

use dioxus::prelude::*;

/// Accent colour used by icons, chips and buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
}

impl Accent {
    /// Class suffix understood by the shared stylesheet.
    pub fn class_name(self) -> &'static str {
        match self {
            Accent::Primary => "primary",
            Accent::Secondary => "secondary",
            Accent::Success => "success",
            Accent::Info => "info",
            Accent::Warning => "warning",
        }
    }
}

/// Button fill style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Contained,
    Outlined,
    Text,
}

impl ButtonVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            ButtonVariant::Contained => "contained",
            ButtonVariant::Outlined => "outlined",
            ButtonVariant::Text => "text",
        }
    }
}

/// Themed button. Without `on_click` the button is inert.
#[component]
pub fn Button(
    label: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] accent: Accent,
    icon: Option<String>,
    #[props(default)] large: bool,
    #[props(default)] full_width: bool,
    on_click: Option<EventHandler<()>>,
) -> Element {
    let mut class = format!("btn btn-{} btn-{}", variant.class_name(), accent.class_name());
    if large {
        class.push_str(" btn-large");
    }
    if full_width {
        class.push_str(" btn-full");
    }

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                if let Some(handler) = on_click {
                    handler.call(());
                }
            },
            if let Some(icon) = icon {
                span { class: "btn-icon", "{icon}" }
            }
            span { class: "btn-label", "{label}" }
        }
    }
}

/// Surface with the themed card border and radius.
#[component]
pub fn Card(#[props(default)] kind: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card {kind}",
            div { class: "card-content", {children} }
        }
    }
}

/// Headline number card with a trend line and an accent icon badge.
///
/// Empty `caption` and `trend_suffix` are not rendered.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    change: String,
    icon: String,
    accent: Accent,
    #[props(default)] caption: String,
    #[props(default)] trend_suffix: String,
) -> Element {
    rsx! {
        Card { kind: "stat-card".to_string(),
            div { class: "stat-card-row",
                div { class: "stat-card-body",
                    span { class: "stat-card-title", "{title}" }
                    span { class: "stat-card-value", "{value}" }
                    if !caption.is_empty() {
                        span { class: "stat-card-caption", "{caption}" }
                    }
                    span { class: "stat-card-change",
                        "{change}"
                        if !trend_suffix.is_empty() {
                            span { class: "stat-card-change-suffix", " {trend_suffix}" }
                        }
                    }
                }
                div { class: "icon-badge accent-{accent.class_name()}", "{icon}" }
            }
        }
    }
}

/// Labelled on/off switch.
#[component]
pub fn ToggleSwitch(label: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "switch-control",
            span { class: if checked { "switch switch-on" } else { "switch" },
                input {
                    r#type: "checkbox",
                    checked,
                    onchange: move |_| on_change.call(!checked),
                }
                span { class: "switch-thumb" }
            }
            span { class: "switch-label", "{label}" }
        }
    }
}

/// Small rounded status label.
#[component]
pub fn Chip(label: String, accent: Accent, icon: Option<String>) -> Element {
    rsx! {
        span { class: "chip chip-{accent.class_name()}",
            if let Some(icon) = icon {
                span { class: "chip-icon", "{icon}" }
            }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_class_names_are_distinct() {
        let all = [
            Accent::Primary,
            Accent::Secondary,
            Accent::Success,
            Accent::Info,
            Accent::Warning,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.class_name(), b.class_name());
            }
        }
    }

    #[test]
    fn test_button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Contained);
        assert_eq!(ButtonVariant::Outlined.class_name(), "outlined");
    }
}
