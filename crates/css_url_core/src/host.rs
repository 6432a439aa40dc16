use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::plugin::Resolution;
use crate::types::GeneratedModule;
use crate::types::SpecifierType;

/// HostPipeline abstraction instance
///
/// This is the real bundler in production and `InMemoryHost` or
/// `MockHostPipeline` in tests.
pub type HostPipelineRef = Arc<dyn HostPipeline + Send + Sync>;

/// Options forwarded through the host resolver chain
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolveOptions {
  /// A list of custom conditions to use when resolving package.json
  /// "exports" and "imports"
  pub package_conditions: Vec<String>,

  /// How the specifier should be interpreted
  pub specifier_type: SpecifierType,
}

/// A named asset handed to the host for emission
#[derive(Clone, Debug, PartialEq)]
pub struct EmittedAsset {
  pub name: String,
  pub source: Vec<u8>,

  /// Retain the asset even when nothing in the output graph references it
  /// directly; a generated code reference exists.
  pub needs_code_reference: bool,
}

/// Token returned by asset emission, resolvable to a final URL once the
/// host has finished content hashing.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AssetReference(String);

impl AssetReference {
  pub fn new(reference: impl Into<String>) -> Self {
    AssetReference(reference.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Placeholder expression the host substitutes with the asset's final URL
  /// during output finalization
  pub fn file_url_expression(&self) -> String {
    format!("import.meta.BUNDLE_FILE_URL_{}", self.0)
  }
}

/// The recursive resolve/load/emit surface the host exposes to plugins
#[automock]
#[async_trait]
pub trait HostPipeline: Debug + Send + Sync {
  /// Runs the host's full resolver chain on a specifier
  async fn resolve<'a>(
    &self,
    specifier: &'a str,
    importer: Option<&'a str>,
    options: ResolveOptions,
  ) -> Result<Resolution, anyhow::Error>;

  /// Resolves and loads a module id through the host pipeline, including
  /// ids synthesized by plugins. Re-entrant from inside a `load` hook.
  async fn load(&self, id: &str) -> Result<Option<GeneratedModule>, anyhow::Error>;

  /// Registers a finished asset with the host's output
  fn emit_asset(&self, asset: EmittedAsset) -> Result<AssetReference, anyhow::Error>;
}
