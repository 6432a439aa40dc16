use std::path::PathBuf;
use std::sync::Arc;

pub use hot_update_plugin::*;
pub use loader_plugin::*;
pub use resolver_plugin::*;

use crate::host::HostPipelineRef;
use crate::types::BuildMode;

mod hot_update_plugin;
mod loader_plugin;
mod resolver_plugin;

/// Everything a plugin receives at construction time
pub struct PluginContext {
  pub host: HostPipelineRef,
  pub logger: PluginLogger,
  pub options: Arc<PluginOptions>,
}

#[derive(Default)]
pub struct PluginLogger {}

#[derive(Clone, Debug, Default)]
pub struct PluginOptions {
  pub mode: BuildMode,
  pub project_root: PathBuf,
}
