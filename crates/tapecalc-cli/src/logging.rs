//! Log output on stderr
//!
//! `RUST_LOG` wins when set; otherwise the level follows `-q`/`-v`.

use crate::config::Verbosity;
use tracing_subscriber::EnvFilter;

/// Builds the filter for a verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()))
}

/// Installs the global subscriber; later calls are ignored
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init(Verbosity::Quiet);
        init(Verbosity::Debug);
    }
}
