//! Walks the dev-mode flow for a single `?css-url` import against the
//! in-memory host: resolve the marker-bearing specifier, then load the
//! synthetic module it resolves to.

use std::path::PathBuf;
use std::sync::Arc;

use css_url_core::in_memory::InMemoryHost;
use css_url_core::plugin::LoaderPlugin;
use css_url_core::plugin::PluginContext;
use css_url_core::plugin::PluginLogger;
use css_url_core::plugin::PluginOptions;
use css_url_core::plugin::Resolution;
use css_url_core::plugin::ResolveContext;
use css_url_core::plugin::ResolvedId;
use css_url_core::plugin::ResolverPlugin;
use css_url_core::types::BuildMode;
use css_url_plugin::CssUrlPlugin;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
  let host = Arc::new(InMemoryHost::new());
  host.set_resolution(
    "./styles/outer.scss",
    Resolution::Resolved(ResolvedId {
      id: String::from("/srv/app/styles/outer.scss"),
      side_effects: true,
      resolved_by: None,
    }),
  );

  let plugin = CssUrlPlugin::new(&PluginContext {
    host,
    logger: PluginLogger::default(),
    options: Arc::new(PluginOptions {
      mode: BuildMode::Development,
      project_root: PathBuf::from("/srv/app"),
    }),
  });

  let resolution = plugin
    .resolve(ResolveContext {
      specifier: String::from("./styles/outer.scss?css-url"),
      importer: Some(String::from("/srv/app/src/main.js")),
      options: Default::default(),
    })
    .await?;

  let Resolution::Resolved(resolved) = resolution else {
    anyhow::bail!("expected the plugin to claim the import");
  };
  println!("resolved id: {}", resolved.id);

  if let Some(module) = plugin.load(&resolved.id).await? {
    println!("generated module: {}", module.code);
  }

  Ok(())
}
