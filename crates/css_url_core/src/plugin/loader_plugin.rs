use std::fmt::Debug;

use async_trait::async_trait;

use crate::types::GeneratedModule;

/// Produces module source for ids a plugin claims, ahead of the host's own
/// file loading.
///
/// Loaders run in a pipeline until one of them returns a module.
///
#[async_trait]
pub trait LoaderPlugin: Debug + Send + Sync {
  /// Unique name for this loader, used for attribution and diagnostics
  fn name(&self) -> &'static str;

  /// Returns the generated module body, or `None` to decline the id
  async fn load(&self, id: &str) -> Result<Option<GeneratedModule>, anyhow::Error>;
}
