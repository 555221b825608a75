//! Tracing subscriber setup for the selene binary.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Workspace crates whose events follow the `-v` count. Everything else
/// stays at warn.
const WORKSPACE_TARGETS: &[&str] = &[
    "selene",
    "selene_calendar",
    "selene_chart",
    "selene_io",
    "selene_lunar",
];

/// Maps the `-v` count to the most verbose level emitted: none is warn,
/// `-v` info, `-vv` debug and anything more trace.
fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Filter directives used when `RUST_LOG` is unset.
fn default_directives(level: Level) -> String {
    let level = level.as_str().to_ascii_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(WORKSPACE_TARGETS.iter().map(|target| format!("{target}={level}")));
    directives.join(",")
}

/// Installs the global subscriber. Events go to stderr so stdout carries
/// only the chart or phase table; event targets are shown from `-vv` on.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(3), Level::TRACE);
        assert_eq!(level_for(u8::MAX), Level::TRACE);
    }

    #[test]
    fn directives_cover_every_workspace_crate() {
        let directives = default_directives(Level::DEBUG);
        assert!(directives.starts_with("warn,"));
        for target in WORKSPACE_TARGETS {
            assert!(
                directives.contains(&format!("{target}=debug")),
                "{target} missing from {directives}"
            );
        }
    }

    #[test]
    fn directives_parse_as_env_filter() {
        for verbosity in 0..=3 {
            let directives = default_directives(level_for(verbosity));
            assert!(EnvFilter::try_new(&directives).is_ok(), "{directives}");
        }
    }
}
