//! Shared UI components for the showcase views.
//!
//! Provides the light/dark theme context, the palette tables the styling
//! provider renders from, and the presentational widgets every view uses.

pub mod theme;
pub mod widgets;

pub use theme::{
    Background, ColorShades, ComponentOverrides, Palette, TextColors, ThemeConfig, ThemeMode,
    ThemeProvider, ThemeToggle,
};
pub use widgets::{Accent, Button, ButtonVariant, Card, Chip, StatCard, ToggleSwitch};

/// Shared CSS containing design tokens and widget styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
