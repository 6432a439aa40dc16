use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use css_url_core::module_graph::ModuleGraph;
use css_url_core::module_graph::ModuleNode;
use css_url_core::plugin::HotUpdateContext;
use css_url_core::plugin::HotUpdatePlugin;

use crate::plugin::synthetic_id;
use crate::plugin::CssUrlPlugin;
use crate::plugin::DIRECT_PARAM;
use crate::plugin::PLUGIN_NAME;
use crate::query_url;

fn mark_seen(seen: &mut HashSet<String>, module: &ModuleNode) {
  if let Some(key) = module.key() {
    seen.insert(key.to_string());
  }
}

/// Propagates hot updates from `<file>?direct` modules to the synthetic
/// `<file>.js?css-url` modules.
///
/// The synthetic module's real input is the raw stylesheet, fetched
/// out-of-band through the direct URL, so the host's dependency tracker has
/// no edge between the two. This walk recreates that edge: whenever a
/// changed module turns out to be a direct stylesheet view, the
/// corresponding synthetic module is recomputed by pure string mapping and
/// force-reloaded if the graph knows it.
#[async_trait]
impl HotUpdatePlugin for CssUrlPlugin {
  fn name(&self) -> &'static str {
    PLUGIN_NAME
  }

  async fn handle_hot_update(&self, ctx: HotUpdateContext) {
    let graph = ctx.graph.as_ref();
    let mut seen: HashSet<String> = HashSet::new();
    let mut stack: Vec<Arc<ModuleNode>> = Vec::new();

    for changed in &ctx.changed {
      match &changed.id {
        Some(id) => {
          if let Some(module) = graph.module_by_id(id) {
            mark_seen(&mut seen, &module);
            stack.push(module);
          }
        }
        // Stylesheets are often reported by file alone; seed every module
        // variant the graph holds for that file.
        None => {
          for module in graph.modules_for_file(&changed.file) {
            mark_seen(&mut seen, &module);
            stack.push(module);
          }
        }
      }
    }

    while let Some(module) = stack.pop() {
      if let Some(id) = module.id.as_deref() {
        if query_url::has_param(id, DIRECT_PARAM) {
          let stylesheet_id = query_url::remove_params(id, &[DIRECT_PARAM]);
          let target_id = synthetic_id(&stylesheet_id);

          if let Some(target) = graph.module_by_id(&target_id) {
            tracing::debug!(
              "{} reloading {} for changed stylesheet {}",
              PLUGIN_NAME,
              target_id,
              stylesheet_id
            );
            graph.reload_module(&target);
          }
        }
      }

      // Self-accepting modules handle their own update; propagation stops
      // here. Direct modules are self-accepting too, which is why the
      // bridging reload above runs before this check.
      if module.is_self_accepting {
        continue;
      }

      for importer in graph.importers(&module) {
        let Some(key) = importer.key() else {
          continue;
        };
        if seen.contains(key) {
          continue;
        }
        seen.insert(key.to_string());
        stack.push(importer);
      }
    }
  }
}
