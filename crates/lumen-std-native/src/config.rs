//! Host-side configuration.
//!
//! The primitives never read the environment. An embedding host that wants a fixed
//! seed or flushed output installs a [`StdConfig`] once, before the runtime
//! initializes; otherwise the defaults apply.

use once_cell::sync::OnceCell;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StdConfig {
    /// Fixed generator seed. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Flush stdout after every output primitive.
    pub autoflush: bool,
}

impl StdConfig {
    pub fn builder() -> StdConfigBuilder {
        StdConfigBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct StdConfigBuilder {
    config: StdConfig,
}

impl StdConfigBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn autoflush(mut self, on: bool) -> Self {
        self.config.autoflush = on;
        self
    }

    pub fn build(self) -> StdConfig {
        self.config
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("runtime configuration already installed")]
    AlreadyInstalled,
    #[error("runtime already initialized; configuration must be installed before the first primitive call")]
    RuntimeStarted,
}

static CONFIG: OnceCell<StdConfig> = OnceCell::new();

/// Installs the process-wide configuration.
pub fn install(config: StdConfig) -> Result<(), ConfigError> {
    if crate::runtime::is_initialized() {
        return Err(ConfigError::RuntimeStarted);
    }
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInstalled)
}

/// The installed configuration, or the defaults if none was installed. Calling this
/// freezes the configuration.
pub(crate) fn resolve() -> &'static StdConfig {
    CONFIG.get_or_init(StdConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let cfg = StdConfig::builder().seed(7).autoflush(true).build();
        assert_eq!(cfg.seed, Some(7));
        assert!(cfg.autoflush);
    }

    #[test]
    fn default_has_no_seed() {
        let cfg = StdConfig::default();
        assert_eq!(cfg.seed, None);
        assert!(!cfg.autoflush);
    }
}
