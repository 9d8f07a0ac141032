//! Logger construction from verbosity flags.

use tracing::Dispatch;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use super::Options;

/// Log level implied by the verbosity flags. `--debug` beats `--verbose`
/// beats `--quiet`.
#[must_use]
pub fn log_level(options: &Options) -> &'static str {
    if options.debug {
        "debug"
    } else if options.verbose {
        "info"
    } else if options.quiet {
        "error"
    } else {
        "warn"
    }
}

/// Build the logger for this invocation: one stderr sink, `RUST_LOG` wins
/// over the flags.
///
/// The caller decides the scope it applies to; nothing is installed globally.
#[must_use]
pub fn build_dispatch(options: &Options) -> Dispatch {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(options)));
    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter);
    Dispatch::new(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(log_level(&Options::default()), "warn");
    }

    #[test]
    fn test_debug_beats_verbose() {
        let options = Options {
            debug: true,
            verbose: true,
            ..Default::default()
        };
        assert_eq!(log_level(&options), "debug");
    }

    #[test]
    fn test_verbose_beats_quiet() {
        let options = Options {
            verbose: true,
            quiet: true,
            ..Default::default()
        };
        assert_eq!(log_level(&options), "info");
    }

    #[test]
    fn test_quiet_level() {
        let options = Options {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(log_level(&options), "error");
    }

    #[test]
    fn test_dispatch_scoped_to_caller() {
        let dispatch = build_dispatch(&Options::default());
        tracing::dispatcher::with_default(&dispatch, || {
            tracing::warn!("scoped logger");
        });
    }
}
