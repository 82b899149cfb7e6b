//! Theme system for the showcase views.
//!
//! A [`ThemeMode`] selects one of two fixed palettes. [`ThemeConfig`] is
//! recomputed from the mode on every render and handed to
//! [`ThemeProvider`], which exposes it to the stylesheet as CSS custom
//! properties on a wrapper div. The mode itself is always passed down
//! explicitly as a prop; nothing here reads an ambient theme.

use std::fmt;

use dioxus::prelude::*;

/// Light or dark palette selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Flips the mode in place and returns the new value.
    pub fn toggle(&mut self) -> Self {
        *self = self.toggled();
        *self
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Returns the CSS data-theme attribute value.
    pub fn css_value(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the display name for the mode.
    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light Mode",
            ThemeMode::Dark => "Dark Mode",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_value())
    }
}

/// Main, light and dark shades of one palette colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorShades {
    pub main: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
}

/// Page and surface background colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Background {
    pub default: &'static str,
    pub paper: &'static str,
}

/// Foreground text colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// Colour palette for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub mode: ThemeMode,
    pub primary: ColorShades,
    pub secondary: ColorShades,
    pub background: Background,
    pub text: TextColors,
    pub divider: &'static str,
}

const LIGHT_PALETTE: Palette = Palette {
    mode: ThemeMode::Light,
    primary: ColorShades {
        main: "#1976d2",
        light: "#42a5f5",
        dark: "#1565c0",
    },
    secondary: ColorShades {
        main: "#dc004e",
        light: "#f48fb1",
        dark: "#c51162",
    },
    background: Background {
        default: "#f5f7fa",
        paper: "#ffffff",
    },
    text: TextColors {
        primary: "rgba(0, 0, 0, 0.87)",
        secondary: "rgba(0, 0, 0, 0.6)",
    },
    divider: "#e0e0e0",
};

const DARK_PALETTE: Palette = Palette {
    mode: ThemeMode::Dark,
    primary: ColorShades {
        main: "#90caf9",
        light: "#bbdefb",
        dark: "#42a5f5",
    },
    secondary: ColorShades {
        main: "#f48fb1",
        light: "#f8bbd0",
        dark: "#f06292",
    },
    background: Background {
        default: "#0a1929",
        paper: "#132f4c",
    },
    text: TextColors {
        primary: "#ffffff",
        secondary: "rgba(255, 255, 255, 0.7)",
    },
    divider: "#1e3a52",
};

impl Palette {
    /// Returns the fixed palette for `mode`.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => LIGHT_PALETTE,
            ThemeMode::Dark => DARK_PALETTE,
        }
    }
}

/// Style overrides applied to buttons, cards and app bars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentOverrides {
    pub button_radius_px: u8,
    pub button_weight: u16,
    pub button_padding: &'static str,
    pub card_radius_px: u8,
    pub card_border: String,
    pub app_bar_border: String,
}

impl ComponentOverrides {
    fn for_palette(palette: &Palette) -> Self {
        let border = format!("1px solid {}", palette.divider);
        Self {
            button_radius_px: 8,
            button_weight: 600,
            button_padding: "8px 20px",
            card_radius_px: 12,
            card_border: border.clone(),
            app_bar_border: border,
        }
    }
}

/// Everything the styling provider needs to restyle its subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    pub palette: Palette,
    pub components: ComponentOverrides,
}

impl ThemeConfig {
    /// Builds the configuration for `mode`. Same mode, same config.
    pub fn for_mode(mode: ThemeMode) -> Self {
        let palette = Palette::for_mode(mode);
        let components = ComponentOverrides::for_palette(&palette);
        Self {
            palette,
            components,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.palette.mode
    }

    /// Renders the configuration as an inline list of CSS custom properties.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let c = &self.components;
        let vars: [(&str, String); 17] = [
            ("--primary-main", p.primary.main.to_string()),
            ("--primary-light", p.primary.light.to_string()),
            ("--primary-dark", p.primary.dark.to_string()),
            ("--secondary-main", p.secondary.main.to_string()),
            ("--secondary-light", p.secondary.light.to_string()),
            ("--secondary-dark", p.secondary.dark.to_string()),
            ("--bg-default", p.background.default.to_string()),
            ("--bg-paper", p.background.paper.to_string()),
            ("--text-primary", p.text.primary.to_string()),
            ("--text-secondary", p.text.secondary.to_string()),
            ("--divider", p.divider.to_string()),
            ("--button-radius", format!("{}px", c.button_radius_px)),
            ("--button-weight", c.button_weight.to_string()),
            ("--button-padding", c.button_padding.to_string()),
            ("--card-radius", format!("{}px", c.card_radius_px)),
            ("--card-border", c.card_border.clone()),
            ("--appbar-border", c.app_bar_border.clone()),
        ];

        vars.iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

/// Styling provider: restyles its children from the given mode.
#[component]
pub fn ThemeProvider(mode: ThemeMode, children: Element) -> Element {
    let config = ThemeConfig::for_mode(mode);
    let style = config.css_variables();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{mode.css_value()}",
            style: "{style}",
            {children}
        }
    }
}

/// Icon button that flips the theme.
#[component]
pub fn ThemeToggle(mode: ThemeMode, on_toggle: EventHandler<()>) -> Element {
    // Shows the mode a click switches to.
    let icon = if mode.is_dark() { "☀" } else { "☾" };
    let label = format!("Switch to {}", mode.toggled().display_name());

    rsx! {
        button {
            class: "icon-btn theme-toggle",
            title: "{label}",
            onclick: move |_| on_toggle.call(()),
            "{icon}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert!(!ThemeMode::default().is_dark());
    }

    #[test]
    fn test_toggle_flips_and_returns_new_mode() {
        let mut mode = ThemeMode::Light;
        assert_eq!(mode.toggle(), ThemeMode::Dark);
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.toggle(), ThemeMode::Light);
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for start in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(start.toggled().toggled(), start);
        }
    }

    #[test]
    fn test_palette_matches_mode() {
        assert_eq!(Palette::for_mode(ThemeMode::Light).mode, ThemeMode::Light);
        assert_eq!(Palette::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        assert_eq!(Palette::for_mode(ThemeMode::Light).primary.main, "#1976d2");
        assert_eq!(Palette::for_mode(ThemeMode::Dark).background.default, "#0a1929");
    }

    #[test]
    fn test_config_is_deterministic() {
        assert_eq!(
            ThemeConfig::for_mode(ThemeMode::Dark),
            ThemeConfig::for_mode(ThemeMode::Dark)
        );
        assert_ne!(
            ThemeConfig::for_mode(ThemeMode::Light),
            ThemeConfig::for_mode(ThemeMode::Dark)
        );
    }

    #[test]
    fn test_card_border_follows_divider() {
        let light = ThemeConfig::for_mode(ThemeMode::Light);
        let dark = ThemeConfig::for_mode(ThemeMode::Dark);
        assert_eq!(light.components.card_border, "1px solid #e0e0e0");
        assert_eq!(dark.components.app_bar_border, "1px solid #1e3a52");
        assert_eq!(light.components.button_radius_px, 8);
        assert_eq!(dark.components.card_radius_px, 12);
    }

    #[test]
    fn test_css_variables() {
        let css = ThemeConfig::for_mode(ThemeMode::Light).css_variables();
        assert!(css.contains("--primary-main: #1976d2;"));
        assert!(css.contains("--bg-paper: #ffffff;"));
        assert!(css.contains("--card-radius: 12px;"));
        assert!(!css.contains("#0a1929"));
    }
}
