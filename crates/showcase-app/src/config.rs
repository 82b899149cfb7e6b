//! Command line configuration.

use clap::Parser;

/// Command line arguments.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "showcase")]
#[command(about = "Landing, dashboard and admin views with a light/dark theme")]
pub struct Args {
    /// View to open first: home, dashboard or admin (unknown names open home)
    #[arg(short, long)]
    pub view: Option<String>,

    /// Default log filter; RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 860)]
    pub height: u32,

    /// Start with the window maximized
    #[arg(long)]
    pub maximized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["showcase"]).unwrap();
        assert_eq!(args.view, None);
        assert_eq!(args.log_level, "info");
        assert_eq!((args.width, args.height), (1280, 860));
        assert!(!args.maximized);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "showcase",
            "--view",
            "admin",
            "--log-level",
            "debug",
            "--width",
            "800",
            "--maximized",
        ])
        .unwrap();
        assert_eq!(args.view.as_deref(), Some("admin"));
        assert_eq!(args.log_level, "debug");
        assert_eq!(args.width, 800);
        assert!(args.maximized);
    }

    #[test]
    fn test_rejects_non_numeric_size() {
        assert!(Args::try_parse_from(["showcase", "--height", "tall"]).is_err());
    }
}
