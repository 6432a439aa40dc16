use async_trait::async_trait;
use css_url_core::diagnostic::Diagnostic;
use css_url_core::diagnostic::ErrorKind;
use css_url_core::plugin::Resolution;
use css_url_core::plugin::ResolveContext;
use css_url_core::plugin::ResolvedId;
use css_url_core::plugin::ResolverPlugin;

use crate::plugin::is_stylesheet_request;
use crate::plugin::synthetic_id;
use crate::plugin::CssUrlPlugin;
use crate::plugin::PLUGIN_NAME;
use crate::plugin::URL_PARAM;
use crate::query_url;

#[async_trait]
impl ResolverPlugin for CssUrlPlugin {
  fn name(&self) -> &'static str {
    PLUGIN_NAME
  }

  async fn resolve(&self, ctx: ResolveContext) -> Result<Resolution, anyhow::Error> {
    if !query_url::has_param(&ctx.specifier, URL_PARAM) {
      return Ok(Resolution::Unresolved);
    }

    if !is_stylesheet_request(&ctx.specifier) {
      return Err(anyhow::Error::new(Diagnostic {
        message: format!(
          "?{URL_PARAM} imports can only be used with stylesheet files, got {}",
          ctx.specifier
        ),
        kind: ErrorKind::Configuration,
        origin: Some(String::from(PLUGIN_NAME)),
        hints: Some(vec![format!(
          "remove the ?{URL_PARAM} query, or point the import at a stylesheet"
        )]),
      }));
    }

    let target = query_url::remove_params(&ctx.specifier, &[URL_PARAM]);
    let resolution = self
      .host
      .resolve(&target, ctx.importer.as_deref(), ctx.options.clone())
      .await?;

    let resolved = match resolution {
      Resolution::Resolved(resolved) => resolved,
      Resolution::Unresolved | Resolution::External => {
        tracing::trace!("{} left {} to later resolvers", PLUGIN_NAME, target);
        return Ok(Resolution::Unresolved);
      }
    };

    Ok(Resolution::Resolved(ResolvedId {
      id: synthetic_id(&resolved.id),
      side_effects: false,
      resolved_by: Some(String::from(PLUGIN_NAME)),
    }))
  }
}
