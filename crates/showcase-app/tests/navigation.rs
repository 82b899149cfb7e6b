use showcase_app::{View, ViewController, ViewError};
use showcase_ui::{ThemeConfig, ThemeMode};

// ----------------------------------------------------------------------------
// View navigation
// ----------------------------------------------------------------------------

#[test]
fn test_every_known_name_selects_its_view() {
    for view in View::all() {
        let mut controller = ViewController::new();
        assert!(controller.navigate(view.name()));
        assert_eq!(controller.current(), *view);
    }
}

#[test]
fn test_dashboard_and_back() {
    let mut controller = ViewController::new();
    assert_eq!(controller.current(), View::Home);

    controller.navigate("dashboard");
    assert_eq!(controller.current(), View::Dashboard);

    controller.navigate_home();
    assert_eq!(controller.current(), View::Home);
}

#[test]
fn test_admin_and_back() {
    let mut controller = ViewController::new();
    controller.navigate("admin");
    assert_eq!(controller.current(), View::Admin);

    controller.navigate_home();
    assert!(controller.is_home());
}

#[test]
fn test_unknown_name_from_home_stays_home() {
    let mut controller = ViewController::new();
    assert!(!controller.navigate("nonexistent"));
    assert_eq!(controller.current(), View::Home);
}

#[test]
fn test_unknown_name_is_ignored_from_any_view() {
    for view in View::all() {
        let mut controller = ViewController::new();
        controller.navigate_to(*view);
        let before = controller.clone();

        for junk in ["nonexistent", "HOME", "dash board", ""] {
            assert!(!controller.navigate(junk));
            assert_eq!(controller, before);
        }
    }
}

#[test]
fn test_initial_view_falls_back_to_home() {
    assert_eq!(ViewController::with_initial(None).current(), View::Home);
    assert_eq!(ViewController::with_initial(Some("bogus")).current(), View::Home);
    assert_eq!(
        ViewController::with_initial(Some("dashboard")).current(),
        View::Dashboard
    );
}

#[test]
fn test_parse_error_names_the_target() {
    let err = "reports".parse::<View>().unwrap_err();
    assert_eq!(err, ViewError::UnknownView("reports".to_string()));
    assert!(err.to_string().contains("reports"));
}

// ----------------------------------------------------------------------------
// Theme toggle
// ----------------------------------------------------------------------------

#[test]
fn test_theme_toggle_scenario() {
    let mut mode = ThemeMode::default();
    assert_eq!(mode, ThemeMode::Light);

    mode.toggle();
    assert_eq!(mode, ThemeMode::Dark);

    mode.toggle();
    assert_eq!(mode, ThemeMode::Light);
}

#[test]
fn test_theme_config_follows_toggle() {
    let mut mode = ThemeMode::Light;
    let light = ThemeConfig::for_mode(mode);

    mode.toggle();
    let dark = ThemeConfig::for_mode(mode);
    assert_ne!(light, dark);
    assert_eq!(dark.mode(), ThemeMode::Dark);

    mode.toggle();
    assert_eq!(ThemeConfig::for_mode(mode), light);
}

#[test]
fn test_theme_is_independent_of_navigation() {
    let mut controller = ViewController::new();
    let mut mode = ThemeMode::Light;

    controller.navigate("admin");
    mode.toggle();
    controller.navigate_home();

    assert_eq!(mode, ThemeMode::Dark);
    assert!(controller.is_home());
}
