use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use async_trait::async_trait;
use css_url_core::diagnostic::ErrorKind;
use css_url_core::diagnostic_error;
use css_url_core::host::EmittedAsset;
use css_url_core::plugin::LoaderPlugin;
use css_url_core::types::BuildMode;
use css_url_core::types::GeneratedModule;

use crate::plugin::canonical_asset_name;
use crate::plugin::target_stylesheet_id;
use crate::plugin::CssUrlPlugin;
use crate::plugin::DIRECT_PARAM;
use crate::plugin::INLINE_PARAM;
use crate::plugin::PLUGIN_NAME;
use crate::plugin::URL_PARAM;
use crate::plugin::USED_PARAM;
use crate::query_url;

#[async_trait]
impl LoaderPlugin for CssUrlPlugin {
  fn name(&self) -> &'static str {
    PLUGIN_NAME
  }

  async fn load(&self, id: &str) -> Result<Option<GeneratedModule>, anyhow::Error> {
    if !query_url::has_param(id, URL_PARAM) {
      return Ok(None);
    }

    let unmarked = query_url::remove_params(id, &[URL_PARAM, USED_PARAM]);
    let target_id = target_stylesheet_id(&unmarked);

    if let BuildMode::Development = self.mode {
      // Compilation is deferred to the dev server's on-demand transform of
      // the direct URL; the timestamp defeats HTTP caching across reloads.
      let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
      let target_url = query_url::append_params(
        &self.relative_id(&target_id),
        &[DIRECT_PARAM, &format!("t={timestamp}")],
      );

      return Ok(Some(GeneratedModule::default_export_string(&target_url)));
    }

    // In build mode the whole pipeline runs for <target>?inline&used, the
    // compiled CSS string is extracted from the generated module, emitted as
    // a named asset, and the returned module evaluates to the asset's final
    // URL once the host resolves the reference.
    let inline_id = query_url::append_params(&target_id, &[INLINE_PARAM, USED_PARAM]);
    let inline_module = self.host.load(&inline_id).await?.ok_or_else(|| {
      diagnostic_error!(
        ErrorKind::Pipeline,
        PLUGIN_NAME,
        "compiling {inline_id} produced no output; is the stylesheet pipeline configured?"
      )
    })?;

    let css = inline_module.default_export_json_string().ok_or_else(|| {
      diagnostic_error!(
        ErrorKind::Pipeline,
        PLUGIN_NAME,
        "expected {inline_id} to compile to a single exported string, got: {}",
        inline_module.code
      )
    })?;

    let reference = self.host.emit_asset(EmittedAsset {
      name: canonical_asset_name(&target_id),
      source: css.into_bytes(),
      needs_code_reference: true,
    })?;

    Ok(Some(GeneratedModule::default_export_expression(
      &reference.file_url_expression(),
    )))
  }
}
