use std::path::PathBuf;
use std::sync::Arc;

use css_url_core::host::HostPipelineRef;
use css_url_core::plugin::PluginContext;
use css_url_core::types::BuildMode;
use css_url_core::types::StyleLanguage;

use crate::query_url;

pub const PLUGIN_NAME: &str = "css-url-plugin";

/// Query parameter marking an import as "give me a URL to the compiled
/// stylesheet" rather than the stylesheet itself
pub const URL_PARAM: &str = "css-url";

/// Query parameter under which the dev server serves a stylesheet verbatim
pub const DIRECT_PARAM: &str = "direct";

/// Internal query parameter requesting compiled CSS text from the host
pub const INLINE_PARAM: &str = "inline";

/// Qualifier some host CSS pipelines require so the inline result is not
/// emptied by usage analysis
pub const USED_PARAM: &str = "used";

/// Rewrites marker-bearing stylesheet imports into script modules exporting
/// a URL to the compiled stylesheet, in both dev-server and production
/// builds.
///
/// The resolver and loader hooks cover the import itself; the hot-update
/// hook bridges the dependency edge between a stylesheet file and its
/// synthetic URL module, which the host's own tracker never records.
#[derive(Debug)]
pub struct CssUrlPlugin {
  pub(crate) host: HostPipelineRef,
  pub(crate) mode: BuildMode,
  pub(crate) project_root: PathBuf,
}

impl CssUrlPlugin {
  pub fn new(ctx: &PluginContext) -> Self {
    CssUrlPlugin {
      host: Arc::clone(&ctx.host),
      mode: ctx.options.mode.clone(),
      project_root: ctx.options.project_root.clone(),
    }
  }

  /// Expresses an absolute id relative to the project root where possible,
  /// matching how the dev server addresses files under the root
  pub(crate) fn relative_id(&self, id: &str) -> String {
    let root = self.project_root.to_string_lossy();
    let root = root.trim_end_matches('/');

    match id.strip_prefix(root) {
      Some(rest) if rest.starts_with('/') => rest.to_string(),
      _ => id.to_string(),
    }
  }
}

/// Maps a stylesheet id to the synthetic script id exporting its URL.
///
/// Inverse of [`target_stylesheet_id`]. Both directions are pure string
/// manipulation so the hot-reload bridge can recompute one side from the
/// other without a lookup table.
pub(crate) fn synthetic_id(stylesheet_id: &str) -> String {
  let script_id = query_url::map_base_path(stylesheet_id, |base| format!("{base}.js"));

  query_url::append_params(&script_id, &[URL_PARAM])
}

/// Recovers the stylesheet id from a synthetic id whose markers have been
/// removed
pub(crate) fn target_stylesheet_id(unmarked_id: &str) -> String {
  query_url::map_base_path(unmarked_id, |base| {
    base.strip_suffix(".js").unwrap_or(base).to_string()
  })
}

/// Whether the request's base path carries a recognized stylesheet extension
pub(crate) fn is_stylesheet_request(specifier: &str) -> bool {
  query_url::clean_url(specifier)
    .rsplit_once('.')
    .is_some_and(|(_, ext)| StyleLanguage::from_extension(ext).is_some())
}

/// Asset name for a stylesheet id: its base filename with any recognized
/// stylesheet extension canonicalized to `.css`
pub(crate) fn canonical_asset_name(stylesheet_id: &str) -> String {
  let base = query_url::clean_url(stylesheet_id);
  let name = base.rsplit('/').next().unwrap_or(base);

  match name.rsplit_once('.') {
    Some((stem, ext)) if StyleLanguage::from_extension(ext).is_some() => format!("{stem}.css"),
    _ => name.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use css_url_core::in_memory::InMemoryHost;
  use css_url_core::plugin::PluginLogger;
  use css_url_core::plugin::PluginOptions;
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::query_url::remove_params;

  fn plugin_with(host: Arc<InMemoryHost>, options: PluginOptions) -> CssUrlPlugin {
    CssUrlPlugin::new(&PluginContext {
      host,
      logger: PluginLogger::default(),
      options: Arc::new(options),
    })
  }

  #[test]
  fn synthetic_and_stylesheet_ids_are_inverses() {
    for id in [
      "/srv/app/styles/outer.scss",
      "/srv/app/styles/outer.scss?v=2",
      "relative/plain.css",
    ] {
      let synthetic = synthetic_id(id);
      assert!(synthetic.ends_with(URL_PARAM));

      let unmarked = remove_params(&synthetic, &[URL_PARAM]);
      assert_eq!(target_stylesheet_id(&unmarked), id);
    }
  }

  #[test]
  fn synthetic_id_keeps_existing_params_ahead_of_the_marker() {
    assert_eq!(
      synthetic_id("/app/a.scss?v=2"),
      "/app/a.scss.js?v=2&css-url"
    );
  }

  #[test]
  fn recognizes_stylesheet_requests_by_base_path() {
    assert!(is_stylesheet_request("./outer.scss?css-url"));
    assert!(is_stylesheet_request("/abs/path/site.styl"));
    assert!(is_stylesheet_request("theme.module.css?css-url&v=2"));
    assert!(!is_stylesheet_request("./outer.js?css-url"));
    assert!(!is_stylesheet_request("./scss?css-url"));
    assert!(!is_stylesheet_request("no-extension"));
  }

  #[test]
  fn canonicalizes_asset_names_to_css() {
    assert_eq!(canonical_asset_name("/app/styles/outer.scss"), "outer.css");
    assert_eq!(canonical_asset_name("/app/plain.css?v=2"), "plain.css");
    assert_eq!(canonical_asset_name("/app/theme.module.less"), "theme.module.css");
    assert_eq!(canonical_asset_name("odd-name"), "odd-name");
  }

  #[test]
  fn relativizes_ids_under_the_project_root_only() {
    let plugin = plugin_with(
      Arc::new(InMemoryHost::new()),
      PluginOptions {
        project_root: PathBuf::from("/srv/app"),
        ..PluginOptions::default()
      },
    );

    assert_eq!(plugin.relative_id("/srv/app/styles/a.css"), "/styles/a.css");
    assert_eq!(plugin.relative_id("/srv/app-data/a.css"), "/srv/app-data/a.css");
    assert_eq!(plugin.relative_id("/elsewhere/a.css"), "/elsewhere/a.css");
  }
}
