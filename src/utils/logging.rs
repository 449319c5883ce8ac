//! Logging setup for pyreadme.
//!
//! Library code logs through the `log` facade; the binary installs an
//! `env_logger` backend whose level follows the CLI verbosity. `RUST_LOG`
//! still overrides the level when set.

use crate::core::options::Verbosity;
use std::sync::RwLock;

/// Global verbosity level
static VERBOSITY: RwLock<Verbosity> = RwLock::new(Verbosity::Normal);

/// Initialize the logging system with a verbosity level
pub fn init(verbosity: Verbosity) {
    if let Ok(mut v) = VERBOSITY.write() {
        *v = verbosity;
    }

    env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .parse_default_env()
        .format_timestamp(None)
        .format_target(verbosity.is_debug())
        .try_init()
        .ok();
}

/// Get the current verbosity level
pub fn get_verbosity() -> Verbosity {
    VERBOSITY.read().map(|v| *v).unwrap_or(Verbosity::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_records_verbosity() {
        init(Verbosity::Debug);
        assert!(get_verbosity().is_debug());

        init(Verbosity::Normal);
        assert!(!get_verbosity().is_verbose());
        assert!(get_verbosity().is_normal());
    }
}
