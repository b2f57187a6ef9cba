//! Console logging setup.
//!
//! Simulated requests, validation outcomes and page events are emitted with
//! `tracing`. The binary installs a `fmt` subscriber once at startup:
//!
//! ```ignore
//! learnhub_core::logging::init(args.log.as_deref())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::{LearnError, LearnResult};

/// Filter used when neither an explicit filter nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter: explicit directive, else `RUST_LOG`, else [`DEFAULT_FILTER`].
pub fn filter(directive: Option<&str>) -> LearnResult<EnvFilter> {
    match directive {
        Some(d) => EnvFilter::try_new(d).map_err(|e| LearnError::Logging(e.to_string())),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(directive: Option<&str>) -> LearnResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter(directive)?)
        .with_target(false)
        .try_init()
        .map_err(|e| LearnError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directive_is_parsed() {
        assert!(filter(Some("learnhub_core=debug,info")).is_ok());
        assert!(matches!(filter(Some("learnhub=notalevel")), Err(LearnError::Logging(_))));
    }
}
