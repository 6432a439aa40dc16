use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use parking_lot::RwLock;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::Direction;

use crate::module_graph::ModuleGraph;
use crate::module_graph::ModuleNode;

/// In-memory module graph for testing
///
/// Import edges point from importer to importee, the direction a dev server
/// records them in. Reload commands are recorded for assertions.
#[derive(Debug, Default)]
pub struct InMemoryModuleGraph {
  state: RwLock<GraphState>,
  reloaded: Mutex<Vec<String>>,
}

#[derive(Debug, Default)]
struct GraphState {
  graph: DiGraph<Arc<ModuleNode>, ()>,
  index_by_key: HashMap<String, NodeIndex>,
}

impl InMemoryModuleGraph {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a module; later `add_import` calls refer to it by key
  pub fn add_module(&self, module: ModuleNode) -> Arc<ModuleNode> {
    let module = Arc::new(module);
    let mut state = self.state.write();
    let index = state.graph.add_node(Arc::clone(&module));
    if let Some(key) = module.key() {
      state.index_by_key.insert(key.to_string(), index);
    }
    module
  }

  /// Records that the module keyed `importer` imports the module keyed
  /// `importee`. Unknown keys are ignored.
  pub fn add_import(&self, importer: &str, importee: &str) {
    let mut state = self.state.write();
    let from = state.index_by_key.get(importer).copied();
    let to = state.index_by_key.get(importee).copied();
    if let (Some(from), Some(to)) = (from, to) {
      state.graph.add_edge(from, to, ());
    }
  }

  /// Keys of every module reloaded so far, in command order
  pub fn reloaded_modules(&self) -> Vec<String> {
    self.reloaded.lock().clone()
  }
}

impl ModuleGraph for InMemoryModuleGraph {
  fn modules_for_file(&self, file: &str) -> Vec<Arc<ModuleNode>> {
    self
      .state
      .read()
      .graph
      .node_weights()
      .filter(|module| module.file.as_deref() == Some(file))
      .cloned()
      .collect()
  }

  fn module_by_id(&self, id: &str) -> Option<Arc<ModuleNode>> {
    self
      .state
      .read()
      .graph
      .node_weights()
      .find(|module| module.id.as_deref() == Some(id))
      .cloned()
  }

  fn importers(&self, module: &ModuleNode) -> Vec<Arc<ModuleNode>> {
    let state = self.state.read();
    let Some(index) = module.key().and_then(|key| state.index_by_key.get(key)) else {
      return Vec::new();
    };
    state
      .graph
      .neighbors_directed(*index, Direction::Incoming)
      .map(|importer| Arc::clone(&state.graph[importer]))
      .collect()
  }

  fn reload_module(&self, module: &ModuleNode) {
    if let Some(key) = module.key() {
      self.reloaded.lock().push(key.to_string());
    }
  }
}
