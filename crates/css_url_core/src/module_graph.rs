use std::fmt::Debug;
use std::sync::Arc;

/// Live module graph abstraction instance, owned by the host dev server
pub type ModuleGraphRef = Arc<dyn ModuleGraph + Send + Sync>;

/// A node in the host's live module graph.
///
/// Node lifecycle is host-owned; plugins read nodes and issue commands keyed
/// by them, never construct or destroy them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModuleNode {
  /// Absent until the module has been requested at least once
  pub id: Option<String>,

  pub file: Option<String>,

  /// The module handles its own hot updates; propagation stops here
  pub is_self_accepting: bool,
}

impl ModuleNode {
  /// Identity used when walking the graph, preferring the id
  pub fn key(&self) -> Option<&str> {
    self.id.as_deref().or(self.file.as_deref())
  }
}

/// Query-and-command surface over the host's live module graph
pub trait ModuleGraph: Debug + Send + Sync {
  /// All modules backed by the given file, across query variants
  fn modules_for_file(&self, file: &str) -> Vec<Arc<ModuleNode>>;

  fn module_by_id(&self, id: &str) -> Option<Arc<ModuleNode>>;

  /// Modules that import the given module
  fn importers(&self, module: &ModuleNode) -> Vec<Arc<ModuleNode>>;

  /// Commands the host to invalidate the module and push an update to
  /// consumers
  fn reload_module(&self, module: &ModuleNode);
}
