//! Hook chain construction from configuration.

use mkhooks_config::{Config, HookName};

use crate::depth::DepthFilter;
use crate::hook::{Hook, HookChain};
use crate::title::FilenameTitle;

impl HookChain {
    /// Build the chain listed in `config.hooks`, in listed order.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut chain = Self::new();
        for &name in &config.hooks {
            chain.push(create_hook(name, config));
        }
        tracing::debug!(hooks = ?chain.names(), "Registered hooks");
        chain
    }
}

fn create_hook(name: HookName, config: &Config) -> Box<dyn Hook> {
    match name {
        HookName::DepthFilter => Box::new(DepthFilter::new(&config.depth_filter.env_var)),
        HookName::FilenameTitle => {
            Box::new(FilenameTitle::new().with_overwrite(config.filename_title.overwrite))
        }
    }
}
