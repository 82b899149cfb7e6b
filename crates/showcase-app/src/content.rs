//! Static copy and figures rendered by the views.

use showcase_ui::{Accent, ButtonVariant};

/// Landing page feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub accent: Accent,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🚀",
        accent: Accent::Primary,
        title: "Fast Performance",
        description: "Lightning-fast load times and optimal performance for your applications.",
    },
    Feature {
        icon: "⚡",
        accent: Accent::Secondary,
        title: "Speed Optimized",
        description: "Built with modern technologies to ensure maximum speed and efficiency.",
    },
    Feature {
        icon: "🛡",
        accent: Accent::Success,
        title: "Secure & Safe",
        description: "Enterprise-grade security to protect your data and applications.",
    },
    Feature {
        icon: "🎧",
        accent: Accent::Info,
        title: "24/7 Support",
        description: "Round-the-clock customer support to help you whenever you need.",
    },
];

/// Dashboard sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub icon: &'static str,
    pub label: &'static str,
}

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem { icon: "▦", label: "Dashboard" },
    MenuItem { icon: "👥", label: "Users" },
    MenuItem { icon: "📊", label: "Analytics" },
    MenuItem { icon: "⚙", label: "Settings" },
];

/// Index of the highlighted sidebar entry.
pub const ACTIVE_MENU_ITEM: usize = 0;

/// Headline figure shown in a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    /// Extra line under the value, if any.
    pub caption: Option<&'static str>,
}

pub const DASHBOARD_METRICS: [Metric; 4] = [
    Metric {
        title: "Total Revenue",
        value: "$45,231",
        change: "+12.5%",
        icon: "$",
        accent: Accent::Primary,
        caption: None,
    },
    Metric {
        title: "New Orders",
        value: "1,245",
        change: "+8.2%",
        icon: "🛒",
        accent: Accent::Success,
        caption: None,
    },
    Metric {
        title: "Active Users",
        value: "8,542",
        change: "+18.7%",
        icon: "👥",
        accent: Accent::Info,
        caption: None,
    },
    Metric {
        title: "Growth Rate",
        value: "23.5%",
        change: "+5.4%",
        icon: "📈",
        accent: Accent::Secondary,
        caption: None,
    },
];

/// Label and value pair in the dashboard quick stats list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const QUICK_STATS: [QuickStat; 4] = [
    QuickStat { label: "Conversion Rate", value: "3.24%" },
    QuickStat { label: "Avg. Order Value", value: "$156" },
    QuickStat { label: "Customer Satisfaction", value: "4.8/5" },
    QuickStat { label: "Response Time", value: "2.3h" },
];

pub const ADMIN_METRICS: [Metric; 4] = [
    Metric {
        title: "Dashboard Overview",
        value: "2,543",
        change: "+12.5%",
        icon: "▦",
        accent: Accent::Primary,
        caption: Some("Total Views"),
    },
    Metric {
        title: "Active Users",
        value: "1,234",
        change: "+8.3%",
        icon: "👥",
        accent: Accent::Success,
        caption: Some("Online Now"),
    },
    Metric {
        title: "Analytics",
        value: "85%",
        change: "+15.2%",
        icon: "📊",
        accent: Accent::Info,
        caption: Some("Engagement Rate"),
    },
    Metric {
        title: "Performance",
        value: "94%",
        change: "+3.1%",
        icon: "📈",
        accent: Accent::Warning,
        caption: Some("System Health"),
    },
];

/// Button shown in the admin styled-components row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSample {
    pub label: &'static str,
    pub variant: ButtonVariant,
    pub accent: Accent,
}

pub const BUTTON_SAMPLES: [ButtonSample; 4] = [
    ButtonSample {
        label: "Primary Button",
        variant: ButtonVariant::Contained,
        accent: Accent::Primary,
    },
    ButtonSample {
        label: "Outlined Button",
        variant: ButtonVariant::Outlined,
        accent: Accent::Primary,
    },
    ButtonSample {
        label: "Secondary Button",
        variant: ButtonVariant::Contained,
        accent: Accent::Secondary,
    },
    ButtonSample {
        label: "Text Button",
        variant: ButtonVariant::Text,
        accent: Accent::Primary,
    },
];

pub const KEY_FEATURES: [&str; 3] = [
    "Automatic theme color adjustment for light and dark modes",
    "Responsive grid system with breakpoint-based layouts",
    "Customized component styling",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_admin_metrics_have_captions() {
        assert!(DASHBOARD_METRICS.iter().all(|m| m.caption.is_none()));
        assert!(ADMIN_METRICS.iter().all(|m| m.caption.is_some()));
    }

    #[test]
    fn test_active_menu_item_exists() {
        assert!(ACTIVE_MENU_ITEM < MENU_ITEMS.len());
        assert_eq!(MENU_ITEMS[ACTIVE_MENU_ITEM].label, "Dashboard");
    }

    #[test]
    fn test_button_samples_cover_every_variant() {
        for variant in [
            ButtonVariant::Contained,
            ButtonVariant::Outlined,
            ButtonVariant::Text,
        ] {
            assert!(BUTTON_SAMPLES.iter().any(|b| b.variant == variant));
        }
    }
}
