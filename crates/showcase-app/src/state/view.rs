//! View enumeration and the controller that owns the active view.

use std::fmt;
use std::str::FromStr;

use crate::error::ViewError;

/// One of the full-screen views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Dashboard,
    Admin,
}

impl View {
    /// Canonical name used in navigation requests.
    pub fn name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Dashboard => "dashboard",
            View::Admin => "admin",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Dashboard => "Dashboard",
            View::Admin => "Admin Panel",
        }
    }

    pub fn all() -> &'static [View] {
        &[View::Home, View::Dashboard, View::Admin]
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::all()
            .iter()
            .copied()
            .find(|view| view.name() == s)
            .ok_or_else(|| ViewError::UnknownView(s.to_string()))
    }
}

/// Holds the active view. The only writer of view state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewController {
    current: View,
}

impl ViewController {
    /// Creates a controller showing the home view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller from an optional view name.
    ///
    /// Missing or unrecognised names start on the home view.
    pub fn with_initial(name: Option<&str>) -> Self {
        let current = match name.map(View::from_str) {
            Some(Ok(view)) => view,
            Some(Err(err)) => {
                tracing::warn!(%err, "Falling back to home view");
                View::Home
            }
            None => View::Home,
        };
        Self { current }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn is_home(&self) -> bool {
        self.current == View::Home
    }

    /// Handles a navigation request by name.
    ///
    /// Returns `true` if the name was recognised. Unrecognised names are
    /// ignored and the current view is kept.
    pub fn navigate(&mut self, target: &str) -> bool {
        match target.parse::<View>() {
            Ok(view) => {
                self.navigate_to(view);
                true
            }
            Err(err) => {
                tracing::debug!(%err, current = %self.current, "Ignoring navigation request");
                false
            }
        }
    }

    /// Switches to `view`.
    pub fn navigate_to(&mut self, view: View) {
        if view != self.current {
            tracing::info!(from = %self.current, to = %view, "View changed");
        }
        self.current = view;
    }

    /// Switches back to the home view.
    pub fn navigate_home(&mut self) {
        self.navigate_to(View::Home);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for view in View::all() {
            assert_eq!(view.name().parse::<View>(), Ok(*view));
            assert_eq!(view.to_string(), view.name());
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(
            "Dashboard".parse::<View>(),
            Err(ViewError::UnknownView("Dashboard".to_string()))
        );
        assert!(" home".parse::<View>().is_err());
        assert!("".parse::<View>().is_err());
    }

    #[test]
    fn test_starts_on_home() {
        let controller = ViewController::new();
        assert_eq!(controller.current(), View::Home);
        assert!(controller.is_home());
    }

    #[test]
    fn test_with_initial() {
        assert_eq!(ViewController::with_initial(None).current(), View::Home);
        assert_eq!(
            ViewController::with_initial(Some("admin")).current(),
            View::Admin
        );
        assert_eq!(
            ViewController::with_initial(Some("settings")).current(),
            View::Home
        );
    }

    #[test]
    fn test_navigate_to_every_view() {
        let mut controller = ViewController::new();
        for view in View::all() {
            assert!(controller.navigate(view.name()));
            assert_eq!(controller.current(), *view);
        }
    }

    #[test]
    fn test_unknown_target_keeps_current_view() {
        let mut controller = ViewController::with_initial(Some("dashboard"));
        assert!(!controller.navigate("nonexistent"));
        assert_eq!(controller.current(), View::Dashboard);

        assert!(!controller.navigate("nonexistent"));
        assert_eq!(controller.current(), View::Dashboard);
    }

    #[test]
    fn test_navigate_home() {
        let mut controller = ViewController::new();
        controller.navigate_to(View::Admin);
        controller.navigate_home();
        assert!(controller.is_home());

        controller.navigate_home();
        assert!(controller.is_home());
    }
}
