//! Entry point for the showcase desktop app.

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use showcase_app::components::App;
use showcase_app::config::Args;
use showcase_app::{STYLES_CSS, ViewController, logging};

/// View name requested on the command line.
static INITIAL_VIEW: OnceLock<Option<String>> = OnceLock::new();

fn main() {
    let args = Args::parse();

    if let Err(err) = logging::init(&args.log_level) {
        eprintln!("showcase: {err}");
        std::process::exit(2);
    }

    tracing::info!(view = ?args.view, "Starting showcase");

    INITIAL_VIEW.set(args.view).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("Showcase")
                        .with_inner_size(LogicalSize::new(args.width, args.height))
                        .with_maximized(args.maximized),
                )
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    showcase_ui::SHARED_CSS,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Creates the view controller and hands it to the app shell.
#[component]
fn RootApp() -> Element {
    let controller = use_signal(|| {
        let initial = INITIAL_VIEW.get().and_then(|v| v.as_deref());
        ViewController::with_initial(initial)
    });

    use_drop(|| {
        tracing::info!("Shutting down showcase");
    });

    rsx! {
        App { controller }
    }
}
