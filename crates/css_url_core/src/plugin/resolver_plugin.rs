use std::fmt::Debug;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::host::ResolveOptions;

/// An import request as seen by the resolver chain
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolveContext {
  pub specifier: String,

  /// Id of the importing module, absent for entries
  pub importer: Option<String>,

  pub options: ResolveOptions,
}

/// A successfully resolved or rewritten module id
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedId {
  pub id: String,

  /// Whether evaluating the module has side effects; `false` lets the host
  /// drop the module when nothing uses its exports
  pub side_effects: bool,

  /// Name of the plugin that produced this resolution
  pub resolved_by: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Resolution {
  /// The resolver declined; the host tries the next one
  Unresolved,

  /// The target lives outside the build graph and resolves at runtime
  External,

  Resolved(ResolvedId),
}

/// Rewrites or resolves import specifiers ahead of the host's own resolution
///
/// Resolvers run in a pipeline until one of them returns a result.
///
#[async_trait]
pub trait ResolverPlugin: Debug + Send + Sync {
  /// Unique name for this resolver, used for attribution and diagnostics
  fn name(&self) -> &'static str;

  /// Determines what the import specifier resolves to
  async fn resolve(&self, ctx: ResolveContext) -> Result<Resolution, anyhow::Error>;
}
