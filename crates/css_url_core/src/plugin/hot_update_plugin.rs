use std::fmt::Debug;

use async_trait::async_trait;

use crate::module_graph::ModuleGraphRef;

/// One entry of a file-change notification.
///
/// Non-script assets are often reported by file alone, before any module id
/// exists for them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChangedModule {
  pub id: Option<String>,
  pub file: String,
}

pub struct HotUpdateContext {
  pub changed: Vec<ChangedModule>,
  pub graph: ModuleGraphRef,
}

/// Reacts to file-change notifications from the host watcher
#[async_trait]
pub trait HotUpdatePlugin: Debug + Send + Sync {
  /// Unique name for this plugin, used for attribution and diagnostics
  fn name(&self) -> &'static str;

  /// Inspects the change set and issues reload commands on the graph.
  ///
  /// Infallible: a target module that does not exist in the graph is simply
  /// nothing to propagate.
  async fn handle_hot_update(&self, ctx: HotUpdateContext);
}
