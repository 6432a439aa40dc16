use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use parking_lot::RwLock;

use crate::host::AssetReference;
use crate::host::EmittedAsset;
use crate::host::HostPipeline;
use crate::host::ResolveOptions;
use crate::plugin::Resolution;
use crate::types::GeneratedModule;

/// In-memory host pipeline for testing
///
/// Resolutions and loadable modules are seeded up front; emitted assets are
/// recorded for assertions.
#[derive(Debug, Default)]
pub struct InMemoryHost {
  resolutions: RwLock<HashMap<String, Resolution>>,
  modules: RwLock<HashMap<String, GeneratedModule>>,
  emitted: Mutex<Vec<EmittedAsset>>,
}

impl InMemoryHost {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds the result of resolving the given specifier
  pub fn set_resolution(&self, specifier: impl Into<String>, resolution: Resolution) {
    self.resolutions.write().insert(specifier.into(), resolution);
  }

  /// Seeds the module the pipeline produces for the given id
  pub fn set_module(&self, id: impl Into<String>, module: GeneratedModule) {
    self.modules.write().insert(id.into(), module);
  }

  /// Every asset emitted so far, in emission order
  pub fn emitted_assets(&self) -> Vec<EmittedAsset> {
    self.emitted.lock().clone()
  }
}

#[async_trait]
impl HostPipeline for InMemoryHost {
  async fn resolve<'a>(
    &self,
    specifier: &'a str,
    _importer: Option<&'a str>,
    _options: ResolveOptions,
  ) -> Result<Resolution, anyhow::Error> {
    Ok(
      self
        .resolutions
        .read()
        .get(specifier)
        .cloned()
        .unwrap_or(Resolution::Unresolved),
    )
  }

  async fn load(&self, id: &str) -> Result<Option<GeneratedModule>, anyhow::Error> {
    Ok(self.modules.read().get(id).cloned())
  }

  fn emit_asset(&self, asset: EmittedAsset) -> Result<AssetReference, anyhow::Error> {
    let mut emitted = self.emitted.lock();
    emitted.push(asset);
    Ok(AssetReference::new(format!("ref{}", emitted.len())))
  }
}
