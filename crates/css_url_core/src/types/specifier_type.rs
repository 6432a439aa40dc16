use serde::Deserialize;
use serde::Serialize;

/// How an import specifier should be interpreted during resolution
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecifierType {
  /// An ES Module specifier
  ///
  /// This is parsed as an URL, so query parameters survive resolution.
  ///
  #[default]
  Esm,

  /// A CommonJS specifier
  ///
  /// This is not parsed as an URL.
  ///
  CommonJS,

  /// A raw URL reference, e.g. from a CSS `url()` or `@import`
  Url,
}
