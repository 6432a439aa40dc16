pub mod diagnostic;
pub mod host;
pub mod in_memory;
pub mod module_graph;
pub mod plugin;
pub mod types;
